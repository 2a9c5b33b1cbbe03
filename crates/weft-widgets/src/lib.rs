#![forbid(unsafe_code)]

//! Widget object model for Weft forms.
//!
//! # Role in Weft
//! `weft-widgets` defines what the synchronization engine can see of a
//! widget: the [`FormWidget`] object trait, the closed set of capability
//! traits it exposes ([`ToggleCapable`], [`TextValued`], [`Validatable`]),
//! a small family of stock widgets, and the [`Theme`] seam that turns
//! validation results into style classes.
//!
//! # Primary responsibilities
//! - **FormWidget**: object-safe surface (identity, disabled flag, class
//!   list, plain-text rendering, capability accessors, `Any` downcasts).
//! - **Stock widgets**: [`LineEdit`], [`TextArea`], [`CheckBox`], and the
//!   capability-less [`Message`] used for per-field validation text.
//! - **Theme**: [`Theme`] + [`BaseTheme`] mapping validation results to
//!   the well-known `valid` / `invalid` classes.
//!
//! # How it fits in the system
//! The template crate (`weft-template`) owns boxed `FormWidget`s in its
//! slots; the engine (`weft-view`) drives them through the capability
//! accessors and hands them to the theme. Nothing here knows about models
//! or fields.

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use weft_style::ClassList;

pub mod capability;
pub mod check_box;
pub mod line_edit;
pub mod message;
pub mod text_area;
pub mod theme;

pub use capability::{TextValued, ToggleCapable, Validatable};
pub use check_box::CheckBox;
pub use line_edit::LineEdit;
pub use message::Message;
pub use text_area::TextArea;
pub use theme::{BaseTheme, Theme};

/// Process-unique widget identity.
///
/// Ids are handed out monotonically and never reused, so a stored id can
/// safely outlive its widget: a stale id simply compares unequal to every
/// live widget's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

impl WidgetId {
    /// Allocate the next id. Called by widget constructors.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric id.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// A `FormWidget` is a view component the synchronization engine can bind
/// to a form field.
///
/// The trait is object-safe; the engine only ever holds `&mut dyn
/// FormWidget` borrowed from a template slot. Capability accessors return
/// `None` by default, so a widget opts in to exactly the protocols it
/// supports.
pub trait FormWidget {
    /// This widget's process-unique id.
    fn widget_id(&self) -> WidgetId;

    /// Upcast for typed downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Upcast for typed downcasting, mutably.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Whether the widget rejects user interaction.
    fn is_disabled(&self) -> bool;

    /// Enable or disable user interaction.
    fn set_disabled(&mut self, disabled: bool);

    /// The style classes currently on the widget.
    fn class_list(&self) -> &ClassList;

    /// Mutable access to the style classes.
    fn class_list_mut(&mut self) -> &mut ClassList;

    /// Plain-text rendering, used when the owning template renders.
    fn render_text(&self) -> String;

    /// The toggle protocol, if this widget holds a boolean state.
    fn as_toggle(&self) -> Option<&dyn ToggleCapable> {
        None
    }

    /// Mutable toggle protocol access.
    fn as_toggle_mut(&mut self) -> Option<&mut dyn ToggleCapable> {
        None
    }

    /// The text-value protocol, if this widget edits a string.
    fn as_text_valued(&self) -> Option<&dyn TextValued> {
        None
    }

    /// Mutable text-value protocol access.
    fn as_text_valued_mut(&mut self) -> Option<&mut dyn TextValued> {
        None
    }

    /// The validator protocol, if this widget carries a validator.
    fn as_validatable(&self) -> Option<&dyn Validatable> {
        None
    }

    /// Mutable validator protocol access.
    fn as_validatable_mut(&mut self) -> Option<&mut dyn Validatable> {
        None
    }
}
