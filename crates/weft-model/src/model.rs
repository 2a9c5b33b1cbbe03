#![forbid(unsafe_code)]

//! The model interface the synchronization engine is written against.

use weft_core::{Field, SharedValidator, ValidationResult, Value};

/// A declarative form model: named fields with values, validators, and
/// per-field state flags.
///
/// The engine only ever sees this trait. Reads on fields the model does
/// not know must return the documented defaults rather than panic:
/// `Empty` value, empty text, no validator, visible, not read-only, not
/// validated, default validation result, and the field key as label.
pub trait Model {
    /// The fields, in model-declared order.
    fn fields(&self) -> Vec<Field>;

    /// The raw value of a field.
    fn value(&self, field: &Field) -> Value;

    /// The formatted text representation of a field's value.
    fn value_text(&self, field: &Field) -> String;

    /// Store a raw value for a field.
    fn set_value(&mut self, field: &Field, value: Value);

    /// The validator for a field, if any.
    fn validator(&self, field: &Field) -> Option<SharedValidator>;

    /// Whether the field participates in the view.
    fn is_visible(&self, field: &Field) -> bool;

    /// Whether the field's widget must reject edits.
    fn is_read_only(&self, field: &Field) -> bool;

    /// Whether the field has been validated since its value last changed.
    fn is_validated(&self, field: &Field) -> bool;

    /// The current validation result for a field.
    fn validation(&self, field: &Field) -> ValidationResult;

    /// The localized label text for a field.
    fn label(&self, field: &Field) -> String;
}
