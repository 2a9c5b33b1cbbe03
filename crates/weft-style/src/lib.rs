#![forbid(unsafe_code)]

//! Style-class primitives for Weft widgets.
//!
//! This crate provides:
//! - [`ClassList`] for the ordered set of style classes a widget carries
//! - [`ValidationStyleFlags`] selecting which validation decorations a
//!   theme may apply
//! - [`class_names`] with the well-known class constants the stock theme
//!   and the validation indicator toggle

/// Ordered, duplicate-free style class lists.
pub mod class_list;
/// Validation style selection flags.
pub mod flags;

pub use class_list::ClassList;
pub use flags::ValidationStyleFlags;

pub mod class_names {
    //! Well-known style class names.
    //!
    //! These are the classes the stock theme and the validation indicator
    //! agree on; applications may add their own alongside them.

    /// Marks a validation message that reports a failure.
    pub const ERROR: &str = "error";
    /// Marks a widget whose value passed validation.
    pub const VALID: &str = "valid";
    /// Marks a widget whose value failed validation.
    pub const INVALID: &str = "invalid";
}
