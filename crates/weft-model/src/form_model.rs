#![forbid(unsafe_code)]

//! Concrete per-field record store.
//!
//! # Invariants
//!
//! 1. **Order is declaration order**: `fields()` returns keys in the order
//!    they were added; re-adding an existing field resets its record but
//!    keeps its position.
//!
//! 2. **Unknown fields are inert**: reads return the documented defaults,
//!    mutations log a warning and change nothing.
//!
//! 3. **`validated` tracks `validation`**: storing a validation result
//!    marks the field validated; `reset()` and re-adding clear both.

use std::fmt;
use std::rc::Rc;

use ahash::AHashMap;
use tracing::{debug, instrument, warn};

use weft_core::{Field, SharedValidator, ValidationResult, Value};
use weft_i18n::StringCatalog;

use crate::model::Model;

struct FieldRecord {
    value: Value,
    validator: Option<SharedValidator>,
    validation: ValidationResult,
    visible: bool,
    read_only: bool,
    validated: bool,
}

impl Default for FieldRecord {
    fn default() -> Self {
        Self {
            value: Value::Empty,
            validator: None,
            validation: ValidationResult::default(),
            visible: true,
            read_only: false,
            validated: false,
        }
    }
}

impl fmt::Debug for FieldRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRecord")
            .field("value", &self.value)
            .field("has_validator", &self.validator.is_some())
            .field("validation", &self.validation)
            .field("visible", &self.visible)
            .field("read_only", &self.read_only)
            .field("validated", &self.validated)
            .finish()
    }
}

/// The stock [`Model`] implementation: one record per field, plus an
/// optional string catalog for labels.
///
/// # Example
///
/// ```
/// use weft_core::{LengthValidator, Value};
/// use weft_model::{FormModel, Model};
///
/// let mut model = FormModel::new();
/// model.add_field("user-name");
/// model.set_validator(
///     &"user-name".into(),
///     Some(std::rc::Rc::new(LengthValidator::new().min(2).mandatory(true))),
/// );
/// model.set_value(&"user-name".into(), Value::from("jo"));
/// assert!(model.validate());
/// assert!(model.valid());
/// ```
#[derive(Debug, Default)]
pub struct FormModel {
    order: Vec<Field>,
    records: AHashMap<Field, FieldRecord>,
    catalog: Option<Rc<StringCatalog>>,
    locale: String,
}

impl FormModel {
    /// Create an empty model. Labels fall back to field keys until a
    /// catalog is attached; the initial locale is `"en"`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            records: AHashMap::new(),
            catalog: None,
            locale: "en".to_owned(),
        }
    }

    /// Attach the catalog used to resolve labels.
    pub fn set_catalog(&mut self, catalog: Rc<StringCatalog>) {
        self.catalog = Some(catalog);
    }

    /// Set the locale labels resolve with.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Add a field at the end of the order. Re-adding an existing field
    /// resets its record in place.
    pub fn add_field(&mut self, field: impl Into<Field>) {
        let field = field.into();
        if !self.records.contains_key(&field) {
            self.order.push(field.clone());
        }
        self.records.insert(field, FieldRecord::default());
    }

    /// Remove a field and its record.
    pub fn remove_field(&mut self, field: &Field) {
        self.order.retain(|f| f != field);
        self.records.remove(field);
    }

    /// Whether the model knows the field.
    #[must_use]
    pub fn contains(&self, field: &Field) -> bool {
        self.records.contains_key(field)
    }

    /// Install or clear a field's validator.
    pub fn set_validator(&mut self, field: &Field, validator: Option<SharedValidator>) {
        if let Some(record) = self.record_mut(field) {
            record.validator = validator;
        }
    }

    /// Store a validation result and mark the field validated.
    pub fn set_validation(&mut self, field: &Field, result: ValidationResult) {
        if let Some(record) = self.record_mut(field) {
            record.validation = result;
            record.validated = true;
        }
    }

    /// Mark or unmark the field as validated.
    pub fn set_validated(&mut self, field: &Field, validated: bool) {
        if let Some(record) = self.record_mut(field) {
            record.validated = validated;
        }
    }

    /// Show or hide the field.
    pub fn set_visible(&mut self, field: &Field, visible: bool) {
        if let Some(record) = self.record_mut(field) {
            record.visible = visible;
        }
    }

    /// Make the field read-only or editable.
    pub fn set_read_only(&mut self, field: &Field, read_only: bool) {
        if let Some(record) = self.record_mut(field) {
            record.read_only = read_only;
        }
    }

    /// Validate one field against its validator and store the result.
    ///
    /// A field without a validator is `Valid`. Returns whether the field
    /// is valid; unknown fields are not.
    pub fn validate_field(&mut self, field: &Field) -> bool {
        let Some(record) = self.records.get_mut(field) else {
            warn!(%field, "validate_field: unknown field");
            return false;
        };
        let result = match &record.validator {
            Some(validator) => validator.validate(&record.value.to_string()),
            None => ValidationResult::valid(),
        };
        debug!(%field, state = %result.state(), "validated field");
        let ok = result.is_valid();
        record.validation = result;
        record.validated = true;
        ok
    }

    /// Validate every field. Returns whether all fields are valid.
    #[instrument(skip(self))]
    pub fn validate(&mut self) -> bool {
        let fields = self.order.clone();
        let mut all_valid = true;
        for field in &fields {
            if !self.validate_field(field) {
                all_valid = false;
            }
        }
        all_valid
    }

    /// Whether every field has been validated and found valid.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.order.iter().all(|field| {
            self.records
                .get(field)
                .is_some_and(|r| r.validated && r.validation.is_valid())
        })
    }

    /// Clear values and validation state. Field order, validators, and
    /// the visibility / read-only flags survive.
    pub fn reset(&mut self) {
        for record in self.records.values_mut() {
            record.value = Value::Empty;
            record.validation = ValidationResult::default();
            record.validated = false;
        }
    }

    fn record_mut(&mut self, field: &Field) -> Option<&mut FieldRecord> {
        let record = self.records.get_mut(field);
        if record.is_none() {
            warn!(%field, "mutation on unknown field ignored");
        }
        record
    }
}

impl Model for FormModel {
    fn fields(&self) -> Vec<Field> {
        self.order.clone()
    }

    fn value(&self, field: &Field) -> Value {
        self.records
            .get(field)
            .map_or(Value::Empty, |r| r.value.clone())
    }

    fn value_text(&self, field: &Field) -> String {
        self.records
            .get(field)
            .map_or_else(String::new, |r| r.value.to_string())
    }

    fn set_value(&mut self, field: &Field, value: Value) {
        if let Some(record) = self.record_mut(field) {
            record.value = value;
        }
    }

    fn validator(&self, field: &Field) -> Option<SharedValidator> {
        self.records.get(field).and_then(|r| r.validator.clone())
    }

    fn is_visible(&self, field: &Field) -> bool {
        self.records.get(field).is_none_or(|r| r.visible)
    }

    fn is_read_only(&self, field: &Field) -> bool {
        self.records.get(field).is_some_and(|r| r.read_only)
    }

    fn is_validated(&self, field: &Field) -> bool {
        self.records.get(field).is_some_and(|r| r.validated)
    }

    fn validation(&self, field: &Field) -> ValidationResult {
        self.records
            .get(field)
            .map_or_else(ValidationResult::default, |r| r.validation.clone())
    }

    fn label(&self, field: &Field) -> String {
        match &self.catalog {
            Some(catalog) => catalog.tr(&self.locale, field.as_str()).to_owned(),
            None => field.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_core::{IntValidator, LengthValidator, ValidationState};
    use weft_i18n::LocaleStrings;

    fn field(name: &str) -> Field {
        Field::new(name)
    }

    #[test]
    fn fields_keep_declaration_order() {
        let mut model = FormModel::new();
        model.add_field("b");
        model.add_field("a");
        model.add_field("c");
        let names: Vec<String> = model.fields().iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn re_adding_resets_record_but_keeps_position() {
        let mut model = FormModel::new();
        model.add_field("a");
        model.add_field("b");
        model.set_value(&field("a"), Value::from("x"));
        model.add_field("a");
        assert_eq!(model.value(&field("a")), Value::Empty);
        let names: Vec<String> = model.fields().iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn unknown_field_reads_give_defaults() {
        let model = FormModel::new();
        let ghost = field("ghost");
        assert_eq!(model.value(&ghost), Value::Empty);
        assert_eq!(model.value_text(&ghost), "");
        assert!(model.validator(&ghost).is_none());
        assert!(model.is_visible(&ghost));
        assert!(!model.is_read_only(&ghost));
        assert!(!model.is_validated(&ghost));
        assert_eq!(model.label(&ghost), "ghost");
    }

    #[test]
    fn unknown_field_mutations_are_ignored() {
        let mut model = FormModel::new();
        model.set_value(&field("ghost"), Value::from("x"));
        model.set_visible(&field("ghost"), false);
        assert!(model.fields().is_empty());
    }

    #[test]
    fn value_text_is_the_display_form() {
        let mut model = FormModel::new();
        model.add_field("age");
        model.set_value(&field("age"), Value::Int(42));
        assert_eq!(model.value_text(&field("age")), "42");
    }

    #[test]
    fn validate_marks_every_field_validated() {
        let mut model = FormModel::new();
        model.add_field("a");
        model.add_field("b");
        model.set_validator(
            &field("a"),
            Some(Rc::new(LengthValidator::new().min(3).mandatory(true))),
        );
        model.set_value(&field("a"), Value::from("xy"));

        assert!(!model.validate());
        assert!(model.is_validated(&field("a")));
        assert!(model.is_validated(&field("b")));
        assert_eq!(
            model.validation(&field("a")).state(),
            ValidationState::Invalid
        );
        assert!(model.validation(&field("b")).is_valid());
    }

    #[test]
    fn valid_requires_validated_and_passing() {
        let mut model = FormModel::new();
        model.add_field("a");
        assert!(!model.valid()); // never validated
        model.validate_field(&field("a"));
        assert!(model.valid());
    }

    #[test]
    fn field_without_validator_is_valid() {
        let mut model = FormModel::new();
        model.add_field("free");
        assert!(model.validate_field(&field("free")));
        assert!(model.validation(&field("free")).is_valid());
    }

    #[test]
    fn set_validation_marks_validated() {
        let mut model = FormModel::new();
        model.add_field("a");
        model.set_validation(&field("a"), ValidationResult::invalid("nope"));
        assert!(model.is_validated(&field("a")));
        assert_eq!(model.validation(&field("a")).message(), "nope");
        model.set_validated(&field("a"), false);
        assert!(!model.is_validated(&field("a")));
    }

    #[test]
    fn visibility_and_read_only_flags() {
        let mut model = FormModel::new();
        model.add_field("a");
        model.set_visible(&field("a"), false);
        model.set_read_only(&field("a"), true);
        assert!(!model.is_visible(&field("a")));
        assert!(model.is_read_only(&field("a")));
    }

    #[test]
    fn reset_clears_values_but_keeps_validators_and_flags() {
        let mut model = FormModel::new();
        model.add_field("a");
        let validator: SharedValidator = Rc::new(IntValidator::new().bottom(0));
        model.set_validator(&field("a"), Some(validator.clone()));
        model.set_value(&field("a"), Value::from("7"));
        model.set_visible(&field("a"), false);
        model.validate();

        model.reset();
        assert_eq!(model.value(&field("a")), Value::Empty);
        assert!(!model.is_validated(&field("a")));
        assert!(!model.is_visible(&field("a")));
        assert!(
            model
                .validator(&field("a"))
                .is_some_and(|v| Rc::ptr_eq(&v, &validator))
        );
    }

    #[test]
    fn labels_resolve_through_the_catalog() {
        let mut catalog = StringCatalog::new();
        let mut en = LocaleStrings::new();
        en.insert("user-name", "User name");
        catalog.add_locale("en", en);
        let mut de = LocaleStrings::new();
        de.insert("user-name", "Benutzername");
        catalog.add_locale("de", de);
        catalog.set_fallback_chain(vec!["en".into()]);

        let mut model = FormModel::new();
        model.add_field("user-name");
        model.add_field("nickname");
        model.set_catalog(Rc::new(catalog));

        assert_eq!(model.label(&field("user-name")), "User name");
        // Untranslated keys stay visible as themselves.
        assert_eq!(model.label(&field("nickname")), "nickname");

        model.set_locale("de");
        assert_eq!(model.label(&field("user-name")), "Benutzername");
    }

    #[test]
    fn remove_field_drops_order_and_record() {
        let mut model = FormModel::new();
        model.add_field("a");
        model.add_field("b");
        model.remove_field(&field("a"));
        assert!(!model.contains(&field("a")));
        assert_eq!(model.fields().len(), 1);
    }
}
