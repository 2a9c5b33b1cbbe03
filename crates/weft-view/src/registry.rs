#![forbid(unsafe_code)]

//! Field binding registry.
//!
//! # Invariants
//!
//! 1. **Widget ids are non-owning**: a binding records the id the field
//!    was registered with; the template remains the owner and the single
//!    source of truth for which widget a slot holds right now. A stale id
//!    is only ever compared, never dereferenced.
//!
//! 2. **One binding per field**: registering a field again replaces its
//!    binding, custom transfer functions included.
//!
//! 3. **Directions are independent**: a binding may carry a custom
//!    transfer for one direction and use default dispatch for the other.

use std::fmt;

use ahash::AHashMap;

use weft_core::Field;
use weft_model::Model;
use weft_widgets::{FormWidget, WidgetId};

/// Custom model-to-widget transfer.
pub type UpdateViewFn = Box<dyn FnMut(&dyn Model, &mut dyn FormWidget)>;

/// Custom widget-to-model transfer.
pub type UpdateModelFn = Box<dyn FnMut(&mut dyn Model, &mut dyn FormWidget)>;

/// One field's registration: the widget identity it was bound with and
/// the optional custom transfer functions.
pub struct FieldBinding {
    field: Field,
    widget: WidgetId,
    pub(crate) update_view: Option<UpdateViewFn>,
    pub(crate) update_model: Option<UpdateModelFn>,
}

impl fmt::Debug for FieldBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("field", &self.field)
            .field("widget", &self.widget)
            .field("has_update_view", &self.update_view.is_some())
            .field("has_update_model", &self.update_model.is_some())
            .finish()
    }
}

impl FieldBinding {
    /// The bound field.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The widget identity the field was registered with.
    #[must_use]
    pub fn widget_id(&self) -> WidgetId {
        self.widget
    }

    /// Whether a custom model-to-widget transfer is installed.
    #[must_use]
    pub fn has_custom_update_view(&self) -> bool {
        self.update_view.is_some()
    }

    /// Whether a custom widget-to-model transfer is installed.
    #[must_use]
    pub fn has_custom_update_model(&self) -> bool {
        self.update_model.is_some()
    }
}

/// Field-to-binding map.
#[derive(Debug, Default)]
pub struct FieldBindings {
    bindings: AHashMap<Field, FieldBinding>,
}

impl FieldBindings {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: AHashMap::new(),
        }
    }

    /// Register a field with default transfer in both directions.
    pub fn register(&mut self, field: Field, widget: WidgetId) {
        self.register_with(field, widget, None, None);
    }

    /// Register a field, optionally overriding either transfer direction.
    ///
    /// Replaces any existing binding for the field.
    pub fn register_with(
        &mut self,
        field: Field,
        widget: WidgetId,
        update_view: Option<UpdateViewFn>,
        update_model: Option<UpdateModelFn>,
    ) {
        self.bindings.insert(
            field.clone(),
            FieldBinding {
                field,
                widget,
                update_view,
                update_model,
            },
        );
    }

    /// The binding for a field, if registered.
    #[must_use]
    pub fn lookup(&self, field: &Field) -> Option<&FieldBinding> {
        self.bindings.get(field)
    }

    pub(crate) fn lookup_mut(&mut self, field: &Field) -> Option<&mut FieldBinding> {
        self.bindings.get_mut(field)
    }

    /// Number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no field is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
