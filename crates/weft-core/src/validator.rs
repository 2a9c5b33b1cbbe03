#![forbid(unsafe_code)]

//! The validator seam and its stock implementations.
//!
//! A [`Validator`] judges the *text form* of a field value; the model owns
//! any further coercion. Validators are shared between a model and the
//! widgets mirroring it as [`SharedValidator`] handles, and the
//! synchronization engine compares those handles by identity
//! (`Rc::ptr_eq`) to avoid reinstalling a validator that is already in
//! place.
//!
//! Stock validators follow one empty-input policy: an empty input is
//! accepted unless the validator is mandatory, in which case it yields
//! [`ValidationState::InvalidEmpty`] so the caller can distinguish
//! "missing" from "wrong".

use std::rc::Rc;

use unicode_segmentation::UnicodeSegmentation;

use crate::validation::{ValidationResult, ValidationState};

/// Default message for a missing mandatory value.
const BLANK_MESSAGE: &str = "This field cannot be empty";

/// Validates the text form of a field value.
pub trait Validator {
    /// Validate `input` and report the outcome.
    fn validate(&self, input: &str) -> ValidationResult;
}

/// Shared, identity-comparable validator handle.
pub type SharedValidator = Rc<dyn Validator>;

fn blank_result(custom: Option<&String>) -> ValidationResult {
    ValidationResult::invalid_empty(custom.map_or(BLANK_MESSAGE, String::as_str))
}

/// Accepts any non-empty input.
#[derive(Debug, Clone, Default)]
pub struct RequiredValidator {
    message: Option<String>,
}

impl RequiredValidator {
    /// Create a required-input validator with the default message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message reported for empty input.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, input: &str) -> ValidationResult {
        if input.is_empty() {
            blank_result(self.message.as_ref())
        } else {
            ValidationResult::valid()
        }
    }
}

/// Bounds the length of the input, counted in graphemes.
///
/// Byte or `char` counts would overcount combining sequences and emoji;
/// what the user perceives as one character must count as one.
#[derive(Debug, Clone, Default)]
pub struct LengthValidator {
    min: Option<usize>,
    max: Option<usize>,
    mandatory: bool,
    too_short: Option<String>,
    too_long: Option<String>,
}

impl LengthValidator {
    /// Create a length validator with no bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `min` graphemes.
    #[must_use]
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Allow at most `max` graphemes.
    #[must_use]
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Reject empty input instead of accepting it.
    #[must_use]
    pub fn mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Set the message reported when the input is too short.
    #[must_use]
    pub fn too_short_message(mut self, message: impl Into<String>) -> Self {
        self.too_short = Some(message.into());
        self
    }

    /// Set the message reported when the input is too long.
    #[must_use]
    pub fn too_long_message(mut self, message: impl Into<String>) -> Self {
        self.too_long = Some(message.into());
        self
    }
}

impl Validator for LengthValidator {
    fn validate(&self, input: &str) -> ValidationResult {
        if input.is_empty() {
            return if self.mandatory {
                blank_result(None)
            } else {
                ValidationResult::valid()
            };
        }

        let len = input.graphemes(true).count();
        #[cfg(feature = "tracing")]
        tracing::trace!(len, min = ?self.min, max = ?self.max, "length validation");

        if let Some(min) = self.min
            && len < min
        {
            let message = self
                .too_short
                .clone()
                .unwrap_or_else(|| format!("Must be at least {min} characters"));
            return ValidationResult::invalid(message);
        }
        if let Some(max) = self.max
            && len > max
        {
            let message = self
                .too_long
                .clone()
                .unwrap_or_else(|| format!("Must be at most {max} characters"));
            return ValidationResult::invalid(message);
        }
        ValidationResult::valid()
    }
}

/// Validates integer input within optional bounds.
#[derive(Debug, Clone, Default)]
pub struct IntValidator {
    bottom: Option<i64>,
    top: Option<i64>,
    mandatory: bool,
    nan_message: Option<String>,
    too_small: Option<String>,
    too_large: Option<String>,
}

impl IntValidator {
    /// Create an integer validator with no bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the value to be at least `bottom`.
    #[must_use]
    pub fn bottom(mut self, bottom: i64) -> Self {
        self.bottom = Some(bottom);
        self
    }

    /// Require the value to be at most `top`.
    #[must_use]
    pub fn top(mut self, top: i64) -> Self {
        self.top = Some(top);
        self
    }

    /// Reject empty input instead of accepting it.
    #[must_use]
    pub fn mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Set the message reported for non-integer input.
    #[must_use]
    pub fn nan_message(mut self, message: impl Into<String>) -> Self {
        self.nan_message = Some(message.into());
        self
    }

    /// Set the message reported for values below the bottom bound.
    #[must_use]
    pub fn too_small_message(mut self, message: impl Into<String>) -> Self {
        self.too_small = Some(message.into());
        self
    }

    /// Set the message reported for values above the top bound.
    #[must_use]
    pub fn too_large_message(mut self, message: impl Into<String>) -> Self {
        self.too_large = Some(message.into());
        self
    }
}

impl Validator for IntValidator {
    fn validate(&self, input: &str) -> ValidationResult {
        if input.is_empty() {
            return if self.mandatory {
                blank_result(None)
            } else {
                ValidationResult::valid()
            };
        }

        let Ok(n) = input.trim().parse::<i64>() else {
            let message = self
                .nan_message
                .clone()
                .unwrap_or_else(|| "Must be an integer".to_owned());
            return ValidationResult::invalid(message);
        };

        if let Some(bottom) = self.bottom
            && n < bottom
        {
            let message = self
                .too_small
                .clone()
                .unwrap_or_else(|| format!("Must be at least {bottom}"));
            return ValidationResult::invalid(message);
        }
        if let Some(top) = self.top
            && n > top
        {
            let message = self
                .too_large
                .clone()
                .unwrap_or_else(|| format!("Must be at most {top}"));
            return ValidationResult::invalid(message);
        }
        ValidationResult::valid()
    }
}

/// Requires the whole input to match a regular expression.
#[cfg(feature = "regex")]
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: regex::Regex,
    mandatory: bool,
    message: Option<String>,
}

#[cfg(feature = "regex")]
impl RegexValidator {
    /// Compile `pattern`; the input must match it in full, not merely
    /// contain a match.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: regex::Regex::new(&format!("^(?:{pattern})$"))?,
            mandatory: false,
            message: None,
        })
    }

    /// Reject empty input instead of accepting it.
    #[must_use]
    pub fn mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Set the message reported for non-matching input.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(feature = "regex")]
impl Validator for RegexValidator {
    fn validate(&self, input: &str) -> ValidationResult {
        if input.is_empty() {
            return if self.mandatory {
                blank_result(None)
            } else {
                ValidationResult::valid()
            };
        }
        if self.pattern.is_match(input) {
            ValidationResult::valid()
        } else {
            let message = self
                .message
                .clone()
                .unwrap_or_else(|| "Invalid input".to_owned());
            ValidationResult::invalid(message)
        }
    }
}
