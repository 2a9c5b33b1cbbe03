#![forbid(unsafe_code)]

//! Boolean toggle.

use std::any::Any;

use weft_style::ClassList;

use crate::capability::ToggleCapable;
use crate::{FormWidget, WidgetId};

/// Check box widget with an optional caption.
///
/// Implements [`ToggleCapable`] only; it has no text value and carries no
/// validator.
#[derive(Debug)]
pub struct CheckBox {
    id: WidgetId,
    checked: bool,
    caption: String,
    disabled: bool,
    classes: ClassList,
}

impl Default for CheckBox {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckBox {
    /// Create an unchecked box without a caption.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            checked: false,
            caption: String::new(),
            disabled: false,
            classes: ClassList::new(),
        }
    }

    /// Set the caption rendered next to the box.
    #[must_use]
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Set the initial checked state.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

impl FormWidget for CheckBox {
    fn widget_id(&self) -> WidgetId {
        self.id
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn class_list(&self) -> &ClassList {
        &self.classes
    }

    fn class_list_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }

    fn render_text(&self) -> String {
        let mark = if self.checked { "[x]" } else { "[ ]" };
        if self.caption.is_empty() {
            mark.to_owned()
        } else {
            format!("{mark} {}", self.caption)
        }
    }

    fn as_toggle(&self) -> Option<&dyn ToggleCapable> {
        Some(self)
    }

    fn as_toggle_mut(&mut self) -> Option<&mut dyn ToggleCapable> {
        Some(self)
    }
}

impl ToggleCapable for CheckBox {
    fn is_checked(&self) -> bool {
        self.checked
    }

    fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
}
