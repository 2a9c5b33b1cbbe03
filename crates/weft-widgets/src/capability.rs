#![forbid(unsafe_code)]

//! Widget capability protocols.
//!
//! The synchronization engine never pattern-matches on concrete widget
//! types. It asks a [`FormWidget`](crate::FormWidget) for one of these
//! protocols and, when the accessor returns `Some`, drives the widget
//! through it. The set is closed: a widget with none of them is simply
//! not synchronized by the default dispatch.

use weft_core::SharedValidator;

/// A widget holding a boolean checked state.
pub trait ToggleCapable {
    /// Whether the widget is currently checked.
    fn is_checked(&self) -> bool;

    /// Set the checked state.
    fn set_checked(&mut self, checked: bool);
}

/// A widget whose state is an editable string.
pub trait TextValued {
    /// The current text value.
    fn value_text(&self) -> String;

    /// Replace the text value.
    fn set_value_text(&mut self, text: &str);
}

/// A widget that carries its own validator.
pub trait Validatable {
    /// The installed validator, if any.
    fn validator(&self) -> Option<&SharedValidator>;

    /// Install or clear the validator.
    fn set_validator(&mut self, validator: Option<SharedValidator>);
}
