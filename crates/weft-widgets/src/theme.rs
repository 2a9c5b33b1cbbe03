#![forbid(unsafe_code)]

//! Validation styling seam.
//!
//! The engine never writes style classes for field widgets itself; it
//! hands the widget, the validation result, and a set of
//! [`ValidationStyleFlags`] to a [`Theme`]. The flags say which
//! decorations the theme may touch: `ALL` while a field's result should
//! show, `NONE` to clear decoration for a field that is no longer
//! validated.

use weft_core::ValidationResult;
use weft_style::{ValidationStyleFlags, class_names};

use crate::FormWidget;

/// Maps validation results onto widget style classes.
pub trait Theme {
    /// Apply (or clear) validation decoration on `widget`.
    ///
    /// `flags` selects which decorations may be active; anything not
    /// selected must come off, so a single call with
    /// [`ValidationStyleFlags::NONE`] undoes prior decoration.
    fn apply_validation_style(
        &self,
        widget: &mut dyn FormWidget,
        result: &ValidationResult,
        flags: ValidationStyleFlags,
    );
}

/// Stock theme: `valid` / `invalid` classes straight from the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseTheme;

impl BaseTheme {
    /// Create the stock theme.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Theme for BaseTheme {
    fn apply_validation_style(
        &self,
        widget: &mut dyn FormWidget,
        result: &ValidationResult,
        flags: ValidationStyleFlags,
    ) {
        let valid = result.is_valid();
        let classes = widget.class_list_mut();
        classes.toggle(
            class_names::VALID,
            flags.contains(ValidationStyleFlags::VALID_STYLE) && valid,
        );
        classes.toggle(
            class_names::INVALID,
            flags.contains(ValidationStyleFlags::INVALID_STYLE) && !valid,
        );
    }
}
