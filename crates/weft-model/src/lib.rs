#![forbid(unsafe_code)]

//! Form model layer for Weft.
//!
//! # Role in Weft
//! `weft-model` defines the [`Model`] interface the synchronization engine
//! reads and writes, and ships [`FormModel`], a concrete per-field record
//! store implementing it.
//!
//! # Primary responsibilities
//! - **Model**: field enumeration, value storage, validator storage,
//!   visibility / read-only / validated flags, per-field validation
//!   results, localized labels.
//! - **FormModel**: the stock implementation with `validate()` /
//!   `valid()` / `reset()` and catalog-backed labels.
//!
//! # How it fits in the system
//! The engine (`weft-view`) drives any `Model`; applications usually hold
//! a `FormModel`, mutate it, and re-run the engine's full passes.

pub mod form_model;
pub mod model;

pub use form_model::FormModel;
pub use model::Model;
