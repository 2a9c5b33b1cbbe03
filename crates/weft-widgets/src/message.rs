#![forbid(unsafe_code)]

//! Plain text display.

use std::any::Any;

use weft_style::ClassList;

use crate::{FormWidget, WidgetId};

/// Non-interactive text widget.
///
/// Used for the per-field validation message slot. Exposes no
/// capabilities, so the default synchronization dispatch ignores it.
#[derive(Debug)]
pub struct Message {
    id: WidgetId,
    text: String,
    disabled: bool,
    classes: ClassList,
}

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}

impl Message {
    /// Create an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            text: String::new(),
            disabled: false,
            classes: ClassList::new(),
        }
    }

    /// Create a message with initial text.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut message = Self::new();
        message.text = text.into();
        message
    }

    /// The current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl FormWidget for Message {
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
        self.text.clone()
    }
}
