#![forbid(unsafe_code)]

//! Text template substrate for Weft forms.
//!
//! # Role in Weft
//! A [`Template`] is a parsed text with named holes. Widgets and strings
//! are bound into slots, boolean conditions gate whole regions, and
//! registered functions compute text at render time. The synchronization
//! engine treats the template as the single source of truth for which
//! widget currently occupies a field's slot.
//!
//! # Syntax
//! - `${name}` renders the slot's bound widget or string.
//! - `${<name>} … ${</name>}` renders its body when the condition `name`
//!   is set true. Conditions nest.
//! - `${fn:arg1 arg2}` calls the registered function `fn`.
//! - `$$` renders a literal `$`.
//!
//! # How it fits in the system
//! `weft-view` binds form widgets into slots, flips `if:` conditions for
//! field visibility, and registers the standard `tr` / `id` / `block`
//! functions. Rendering is plain text, for inspection and tests.

pub mod parse;
pub mod template;

pub use parse::TemplateError;
pub use template::Template;
