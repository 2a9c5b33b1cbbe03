#![forbid(unsafe_code)]

//! Vocabulary types for Weft form synchronization.
//!
//! # Role in Weft
//! `weft-core` defines the shared language the other crates speak: field
//! keys, dynamically typed values, validation states and results, and the
//! [`Validator`] seam with its stock implementations.
//!
//! # Primary responsibilities
//! - **Field**: the key naming one unit of model/view synchronization,
//!   doubling as the template slot name.
//! - **Value**: the dynamically typed payload a model stores per field.
//! - **ValidationState / ValidationResult**: the outcome of validating a
//!   field's current value.
//! - **Validator**: the trait widgets and models share, plus stock
//!   validators (required, length, integer, and optionally regex).
//!
//! # How it fits in the system
//! The model crate (`weft-model`) stores these types per field; the widget
//! crate (`weft-widgets`) accepts validators; the engine (`weft-view`)
//! moves values between the two and surfaces validation results.

pub mod field;
pub mod validation;
pub mod validator;
pub mod value;

pub use field::Field;
pub use validation::{ValidationResult, ValidationState};
#[cfg(feature = "regex")]
pub use validator::RegexValidator;
pub use validator::{
    IntValidator, LengthValidator, RequiredValidator, SharedValidator, Validator,
};
pub use value::Value;
