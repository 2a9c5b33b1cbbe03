#![forbid(unsafe_code)]

//! Single-line text input.
//!
//! # Example
//! ```
//! use weft_widgets::line_edit::LineEdit;
//! use weft_widgets::capability::TextValued;
//!
//! let mut edit = LineEdit::new().max_length(8).display_width(10);
//! edit.set_value_text("hello");
//! assert_eq!(edit.value_text(), "hello");
//! ```

use std::any::Any;
use std::fmt;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use weft_core::SharedValidator;
use weft_style::ClassList;

use crate::capability::{TextValued, Validatable};
use crate::{FormWidget, WidgetId};

/// Single-line text input widget.
///
/// Implements [`TextValued`] and [`Validatable`]. The value is clipped to
/// `max_length` graphemes on every write, mirroring what a real input
/// control enforces while typing.
pub struct LineEdit {
    id: WidgetId,
    value: String,
    /// Placeholder shown while the value is empty.
    placeholder: String,
    /// Maximum length in graphemes (`None` = unlimited).
    max_length: Option<usize>,
    /// Rendered field width in display columns.
    display_width: usize,
    validator: Option<SharedValidator>,
    disabled: bool,
    classes: ClassList,
}

impl Default for LineEdit {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LineEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineEdit")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("placeholder", &self.placeholder)
            .field("max_length", &self.max_length)
            .field("display_width", &self.display_width)
            .field("has_validator", &self.validator.is_some())
            .field("disabled", &self.disabled)
            .field("classes", &self.classes)
            .finish()
    }
}

impl LineEdit {
    /// Create an empty line edit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            value: String::new(),
            placeholder: String::new(),
            max_length: None,
            display_width: 16,
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

    /// Set the maximum value length in graphemes.
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Set the rendered field width in display columns.
    #[must_use]
    pub fn display_width(mut self, display_width: usize) -> Self {
        self.display_width = display_width;
        self
    }

    /// Set the initial value, clipped like any other write.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.value = self.clipped(&value);
        self
    }

    fn clipped(&self, text: &str) -> String {
        let Some(max) = self.max_length else {
            return text.to_owned();
        };
        match text.grapheme_indices(true).nth(max) {
            Some((end, _)) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(max, "clipping line edit value");
                text[..end].to_owned()
            }
            None => text.to_owned(),
        }
    }
}

impl FormWidget for LineEdit {
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
        let shown = if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        };
        let pad = self.display_width.saturating_sub(shown.width());
        format!("[{}{}]", shown, " ".repeat(pad))
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

impl TextValued for LineEdit {
    fn value_text(&self) -> String {
        self.value.clone()
    }

    fn set_value_text(&mut self, text: &str) {
        self.value = self.clipped(text);
    }
}

impl Validatable for LineEdit {
    fn validator(&self) -> Option<&SharedValidator> {
        self.validator.as_ref()
    }

    fn set_validator(&mut self, validator: Option<SharedValidator>) {
        self.validator = validator;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use weft_core::RequiredValidator;

    #[test]
    fn max_length_counts_graphemes_not_bytes() {
        let mut edit = LineEdit::new().max_length(2);
        edit.set_value_text("e\u{301}ab");
        assert_eq!(edit.value_text(), "e\u{301}a");
    }

    #[test]
    fn unlimited_when_no_max_length() {
        let mut edit = LineEdit::new();
        edit.set_value_text("a very long value indeed");
        assert_eq!(edit.value_text(), "a very long value indeed");
    }

    #[test]
    fn renders_padded_to_display_width() {
        let edit = LineEdit::new().display_width(6).value("ab");
        assert_eq!(edit.render_text(), "[ab    ]");
    }

    #[test]
    fn padding_accounts_for_wide_characters() {
        let edit = LineEdit::new().display_width(6).value("日本");
        // Two ideographs occupy four columns.
        assert_eq!(edit.render_text(), "[日本  ]");
    }

    #[test]
    fn placeholder_shows_while_empty() {
        let edit = LineEdit::new().display_width(5).placeholder("name");
        assert_eq!(edit.render_text(), "[name ]");
    }

    #[test]
    fn exposes_text_and_validator_capabilities_only() {
        let mut edit = LineEdit::new();
        assert!(edit.as_text_valued().is_some());
        assert!(edit.as_validatable().is_some());
        assert!(edit.as_toggle().is_none());

        let validator: SharedValidator = Rc::new(RequiredValidator::new());
        if let Some(validatable) = edit.as_validatable_mut() {
            validatable.set_validator(Some(validator.clone()));
        }
        assert!(
            edit.validator().is_some_and(|v| Rc::ptr_eq(v, &validator))
        );
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use unicode_segmentation::UnicodeSegmentation;

    proptest! {
        #[test]
        fn clipped_value_never_exceeds_max(s in "\\PC{0,32}", max in 0usize..16) {
            let mut edit = LineEdit::new().max_length(max);
            edit.set_value_text(&s);
            prop_assert!(edit.value_text().graphemes(true).count() <= max);
        }

        #[test]
        fn render_never_narrower_than_display_width(s in "[a-z]{0,24}", width in 0usize..24) {
            use unicode_width::UnicodeWidthStr;
            let edit = LineEdit::new().display_width(width).value(s);
            let rendered = edit.render_text();
            let inner = &rendered[1..rendered.len() - 1];
            prop_assert!(inner.width() >= width);
        }
    }
}
