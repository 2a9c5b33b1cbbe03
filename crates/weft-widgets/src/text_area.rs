#![forbid(unsafe_code)]

//! Multi-line text input.

use std::any::Any;
use std::fmt;

use weft_core::SharedValidator;
use weft_style::ClassList;

use crate::capability::{TextValued, Validatable};
use crate::{FormWidget, WidgetId};

/// Multi-line text input widget.
///
/// Implements [`TextValued`] and [`Validatable`]. Unlike
/// [`LineEdit`](crate::LineEdit) the value may span lines and is never
/// clipped.
pub struct TextArea {
    id: WidgetId,
    value: String,
    /// Placeholder shown while the value is empty.
    placeholder: String,
    validator: Option<SharedValidator>,
    disabled: bool,
    classes: ClassList,
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextArea")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("placeholder", &self.placeholder)
            .field("has_validator", &self.validator.is_some())
            .field("disabled", &self.disabled)
            .field("classes", &self.classes)
            .finish()
    }
}

impl TextArea {
    /// Create an empty text area.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            value: String::new(),
            placeholder: String::new(),
            validator: None,
            disabled: false,
            classes: ClassList::new(),
        }
    }

    /// Set the placeholder shown while the value is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the initial value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

impl FormWidget for TextArea {
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
        if self.value.is_empty() {
            self.placeholder.clone()
        } else {
            self.value.clone()
        }
    }

    fn as_text_valued(&self) -> Option<&dyn TextValued> {
        Some(self)
    }

    fn as_text_valued_mut(&mut self) -> Option<&mut dyn TextValued> {
        Some(self)
    }

    fn as_validatable(&self) -> Option<&dyn Validatable> {
        Some(self)
    }

    fn as_validatable_mut(&mut self) -> Option<&mut dyn Validatable> {
        Some(self)
    }
}

impl TextValued for TextArea {
    fn value_text(&self) -> String {
        self.value.clone()
    }

    fn set_value_text(&mut self, text: &str) {
        self.value = text.to_owned();
    }
}

impl Validatable for TextArea {
    fn validator(&self) -> Option<&SharedValidator> {
        self.validator.as_ref()
    }

    fn set_validator(&mut self, validator: Option<SharedValidator>) {
        self.validator = validator;
    }
}
