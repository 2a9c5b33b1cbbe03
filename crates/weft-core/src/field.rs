#![forbid(unsafe_code)]

//! Field keys.
//!
//! A [`Field`] names one unit of model/view synchronization. The key is
//! also the template slot the field's widget binds into; the auxiliary
//! message and label slots, and the visibility condition, derive from it
//! by fixed suffix/prefix.

use std::borrow::Borrow;
use std::fmt;

/// A named form field.
///
/// Keys are unique within a model. Cloning is cheap enough for per-pass
/// iteration; ordering follows the key text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field(String);

impl Field {
    /// Create a field key.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The key as a string slice (also the main template slot name).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Slot name holding the field's validation message widget.
    #[must_use]
    pub fn info_slot(&self) -> String {
        format!("{}-info", self.0)
    }

    /// Slot name holding the field's label text.
    #[must_use]
    pub fn label_slot(&self) -> String {
        format!("{}-label", self.0)
    }

    /// Condition name controlling the field's template region.
    #[must_use]
    pub fn condition(&self) -> String {
        format!("if:{}", self.0)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Field {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Field {
    fn borrow(&self) -> &str {
        &self.0
    }
}
