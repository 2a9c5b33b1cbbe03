#![forbid(unsafe_code)]

//! Validation states and results.

use std::fmt;

/// Outcome category of validating a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationState {
    /// The value failed validation.
    Invalid,
    /// The value is absent and the field requires one.
    InvalidEmpty,
    /// The value passed validation.
    Valid,
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValidationState::Invalid => "invalid",
            ValidationState::InvalidEmpty => "invalid-empty",
            ValidationState::Valid => "valid",
        };
        f.write_str(name)
    }
}

/// Result of validating a field: a state plus a human-readable message.
///
/// The default result is `Invalid` with an empty message. That is the
/// placeholder a never-validated field carries; the model's `validated`
/// flag, not the result itself, decides whether it has any visible effect.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    state: ValidationState,
    message: String,
}

impl ValidationResult {
    /// Build a result from its parts.
    #[must_use]
    pub fn new(state: ValidationState, message: impl Into<String>) -> Self {
        Self {
            state,
            message: message.into(),
        }
    }

    /// A passing result with no message.
    #[must_use]
    pub fn valid() -> Self {
        Self::new(ValidationState::Valid, "")
    }

    /// A failing result.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(ValidationState::Invalid, message)
    }

    /// A failing result for a missing mandatory value.
    #[must_use]
    pub fn invalid_empty(message: impl Into<String>) -> Self {
        Self::new(ValidationState::InvalidEmpty, message)
    }

    /// The outcome category.
    #[must_use]
    pub fn state(&self) -> ValidationState {
        self.state
    }

    /// The human-readable message (possibly empty).
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when the state is [`ValidationState::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.state == ValidationState::Valid
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new(ValidationState::Invalid, "")
    }
}
