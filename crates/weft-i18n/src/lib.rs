#![forbid(unsafe_code)]

//! Internationalization (i18n) foundation for Weft.
//!
//! Provides externalized string storage with key-based lookup, locale
//! fallback chains, and variable interpolation. Field labels, template
//! `tr`/`block` functions, and demo copy all resolve through a
//! [`StringCatalog`].

pub mod catalog;

pub use catalog::{I18nError, Locale, LocaleStrings, StringCatalog};
