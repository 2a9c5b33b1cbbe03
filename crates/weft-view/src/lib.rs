#![forbid(unsafe_code)]

//! Model/view field synchronization for Weft forms.
//!
//! # Role in Weft
//! `weft-view` is the engine that keeps a form model and a rendered
//! template in step, field by field, in both directions. Everything else
//! in the workspace exists to be driven by this crate: models supply
//! values and flags, templates hold widgets, widgets expose capabilities,
//! the theme turns validation results into style classes.
//!
//! # Primary responsibilities
//! - **Registry** ([`FieldBindings`]): which widget identity a field was
//!   bound with, plus optional custom transfer functions per direction.
//! - **Transfer** ([`update_view_value`], [`update_model_value`]): move
//!   one field's value between model and widget, custom function first,
//!   then the capability protocols.
//! - **Reconciliation** ([`FormView`]): the full per-field view pass
//!   (visibility, widget creation, validator sync, value transfer, label,
//!   validation display, read-only propagation) and the model pass.
//!
//! # How it fits in the system
//! An application builds a [`weft_template::Template`], wraps it in a
//! [`FormView`], binds or lets a [`WidgetFactory`] create widgets, and
//! then alternates `update_view` / `update_model` around model edits and
//! validation. The engine holds no field list of its own; every pass
//! follows `model.fields()`.

pub mod registry;
pub mod transfer;
pub mod view;

pub use registry::{FieldBinding, FieldBindings, UpdateModelFn, UpdateViewFn};
pub use transfer::{update_model_value, update_view_value};
pub use view::{FormView, WidgetFactory};
