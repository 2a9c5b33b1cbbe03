#![forbid(unsafe_code)]

//! The bound template: slots, conditions, functions, rendering.
//!
//! # Invariants
//!
//! 1. **One owner per slot**: binding transfers widget ownership to the
//!    template; rebinding or clearing a slot drops the prior content.
//!
//! 2. **Unset means false**: a condition nobody set renders as hidden.
//!
//! 3. **Rendering is read-only**: `render()` takes `&self` and never
//!    mutates bindings, so repeated renders of unchanged state are
//!    identical.

use std::fmt;
use std::rc::Rc;

use ahash::AHashMap;
use tracing::{trace, warn};

use weft_i18n::StringCatalog;
use weft_widgets::FormWidget;

use crate::parse::{self, Node, TemplateError};

enum SlotContent {
    Widget(Box<dyn FormWidget>),
    Text(String),
}

/// A parsed template with its bound state.
///
/// # Example
/// ```
/// use weft_template::Template;
/// use weft_widgets::LineEdit;
///
/// let mut template = Template::new("Name: ${name}").unwrap();
/// template.bind_widget("name", Box::new(LineEdit::new().display_width(4).value("jo")));
/// assert_eq!(template.render(), "Name: [jo  ]");
/// ```
pub struct Template {
    nodes: Vec<Node>,
    slots: AHashMap<String, SlotContent>,
    conditions: AHashMap<String, bool>,
    functions: AHashMap<String, TemplateFunction>,
    catalog: Option<Rc<StringCatalog>>,
    locale: String,
}

/// A render-time text function, `${name:arg1 arg2}`.
///
/// Functions see the template immutably, so they may look up slots,
/// conditions, and the catalog, but never rebind anything.
pub type TemplateFunction = Box<dyn Fn(&Template, &[String]) -> String>;

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut slots: Vec<&str> = self.slots.keys().map(String::as_str).collect();
        slots.sort_unstable();
        let mut functions: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        functions.sort_unstable();
        f.debug_struct("Template")
            .field("nodes", &self.nodes.len())
            .field("slots", &slots)
            .field("conditions", &self.conditions)
            .field("functions", &functions)
            .field("locale", &self.locale)
            .finish()
    }
}

impl Template {
    /// Parse template text.
    pub fn new(text: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            nodes: parse::parse(text)?,
            slots: AHashMap::new(),
            conditions: AHashMap::new(),
            functions: AHashMap::new(),
            catalog: None,
            locale: "en".to_owned(),
        })
    }

    /// Attach the catalog the `tr` and `block` functions resolve against.
    pub fn set_catalog(&mut self, catalog: Rc<StringCatalog>) {
        self.catalog = Some(catalog);
    }

    /// The attached catalog, if any.
    #[must_use]
    pub fn catalog(&self) -> Option<&Rc<StringCatalog>> {
        self.catalog.as_ref()
    }

    /// Set the locale catalog lookups use.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// The current locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Bind a widget into a slot, dropping any prior content.
    pub fn bind_widget(&mut self, slot: impl Into<String>, widget: Box<dyn FormWidget>) {
        let slot = slot.into();
        trace!(%slot, id = %widget.widget_id(), "bind widget");
        self.slots.insert(slot, SlotContent::Widget(widget));
    }

    /// Bind literal text into a slot, dropping any prior content.
    pub fn bind_string(&mut self, slot: impl Into<String>, text: impl Into<String>) {
        self.slots.insert(slot.into(), SlotContent::Text(text.into()));
    }

    /// Clear a slot, dropping any prior content.
    pub fn bind_empty(&mut self, slot: &str) {
        self.slots.remove(slot);
    }

    /// Set a condition. Regions gated on it render only while true.
    pub fn set_condition(&mut self, name: impl Into<String>, value: bool) {
        self.conditions.insert(name.into(), value);
    }

    /// Read a condition; unset conditions are false.
    #[must_use]
    pub fn condition(&self, name: &str) -> bool {
        self.conditions.get(name).copied().unwrap_or(false)
    }

    /// The widget bound in a slot, if the slot holds one.
    pub fn resolve_widget(&mut self, slot: &str) -> Option<&mut dyn FormWidget> {
        match self.slots.get_mut(slot) {
            Some(SlotContent::Widget(widget)) => Some(widget.as_mut()),
            _ => None,
        }
    }

    /// Immutable access to a slot's widget.
    #[must_use]
    pub fn widget_ref(&self, slot: &str) -> Option<&dyn FormWidget> {
        match self.slots.get(slot) {
            Some(SlotContent::Widget(widget)) => Some(widget.as_ref()),
            _ => None,
        }
    }

    /// Downcast a slot's widget to a concrete type.
    #[must_use]
    pub fn resolve<W: FormWidget + 'static>(&self, slot: &str) -> Option<&W> {
        self.widget_ref(slot)?.as_any().downcast_ref()
    }

    /// Downcast a slot's widget to a concrete type, mutably.
    pub fn resolve_mut<W: FormWidget + 'static>(&mut self, slot: &str) -> Option<&mut W> {
        self.resolve_widget(slot)?.as_any_mut().downcast_mut()
    }

    /// Register a render-time function under `name`.
    pub fn add_function(
        &mut self,
        name: impl Into<String>,
        function: impl Fn(&Template, &[String]) -> String + 'static,
    ) {
        self.functions.insert(name.into(), Box::new(function));
    }

    /// Render to plain text.
    ///
    /// Unbound slots render as nothing, false conditions skip their
    /// bodies, unknown functions render as nothing with a warning.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_nodes(&self.nodes, &mut out);
        out
    }

    fn render_nodes(&self, nodes: &[Node], out: &mut String) {
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Slot(name) => match self.slots.get(name) {
                    Some(SlotContent::Widget(widget)) => out.push_str(&widget.render_text()),
                    Some(SlotContent::Text(text)) => out.push_str(text),
                    None => {}
                },
                Node::Condition { name, children } => {
                    if self.condition(name) {
                        self.render_nodes(children, out);
                    }
                }
                Node::Function { name, args } => match self.functions.get(name) {
                    Some(function) => out.push_str(&function(self, args)),
                    None => warn!(function = %name, "unknown template function"),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_widgets::capability::TextValued;
    use weft_widgets::{CheckBox, LineEdit, Message};

    #[test]
    fn unbound_slots_render_as_nothing() {
        let template = Template::new("a ${x} b").unwrap();
        assert_eq!(template.render(), "a  b");
    }

    #[test]
    fn bound_string_renders() {
        let mut template = Template::new("Hello ${who}!").unwrap();
        template.bind_string("who", "world");
        assert_eq!(template.render(), "Hello world!");
    }

    #[test]
    fn bound_widget_renders_its_text() {
        let mut template = Template::new("${agree}").unwrap();
        template.bind_widget("agree", Box::new(CheckBox::new().caption("ok").checked(true)));
        assert_eq!(template.render(), "[x] ok");
    }

    #[test]
    fn bind_empty_clears_the_slot() {
        let mut template = Template::new("<${x}>").unwrap();
        template.bind_string("x", "y");
        template.bind_empty("x");
        assert_eq!(template.render(), "<>");
    }

    #[test]
    fn rebinding_replaces_content() {
        let mut template = Template::new("${x}").unwrap();
        template.bind_widget("x", Box::new(Message::with_text("old")));
        template.bind_string("x", "new");
        assert_eq!(template.render(), "new");
        assert!(template.widget_ref("x").is_none());
    }

    #[test]
    fn conditions_gate_their_bodies() {
        let mut template = Template::new("${<more>}extra${</more>}").unwrap();
        assert_eq!(template.render(), "");
        template.set_condition("more", true);
        assert_eq!(template.render(), "extra");
        template.set_condition("more", false);
        assert_eq!(template.render(), "");
    }

    #[test]
    fn false_outer_condition_hides_nested_content() {
        let mut template = Template::new("${<a>}1${<b>}2${</b>}${</a>}").unwrap();
        template.set_condition("b", true);
        assert_eq!(template.render(), "");
        template.set_condition("a", true);
        assert_eq!(template.render(), "12");
    }

    #[test]
    fn unknown_function_renders_as_nothing() {
        let template = Template::new("x${nope:arg}y").unwrap();
        assert_eq!(template.render(), "xy");
    }

    #[test]
    fn functions_receive_their_args() {
        let mut template = Template::new("${upper:one two}").unwrap();
        template.add_function("upper", |_, args| {
            args.iter()
                .map(|a| a.to_uppercase())
                .collect::<Vec<_>>()
                .join("+")
        });
        assert_eq!(template.render(), "ONE+TWO");
    }

    #[test]
    fn functions_can_inspect_the_template() {
        let mut template = Template::new("${peek:state}").unwrap();
        template.set_condition("state", true);
        template.add_function("peek", |t, args| t.condition(&args[0]).to_string());
        assert_eq!(template.render(), "true");
    }

    #[test]
    fn typed_resolve_downcasts() {
        let mut template = Template::new("${x}").unwrap();
        template.bind_widget("x", Box::new(LineEdit::new()));
        assert!(template.resolve::<LineEdit>("x").is_some());
        assert!(template.resolve::<CheckBox>("x").is_none());

        if let Some(edit) = template.resolve_mut::<LineEdit>("x") {
            edit.set_value_text("typed");
        }
        assert_eq!(
            template
                .resolve::<LineEdit>("x")
                .map(TextValued::value_text),
            Some("typed".to_owned())
        );
    }

    #[test]
    fn dollar_escape_renders_single_dollar() {
        let template = Template::new("$$${amount}").unwrap();
        assert_eq!(template.render(), "$");
    }

    #[test]
    fn render_is_stable_for_unchanged_state() {
        let mut template = Template::new("${<c>}${x}${</c>}").unwrap();
        template.set_condition("c", true);
        template.bind_string("x", "stable");
        assert_eq!(template.render(), template.render());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_never_panics(text in "\\PC{0,64}") {
            let _ = Template::new(&text);
        }

        #[test]
        fn accepted_templates_render_without_panicking(text in "[a-z${}<>/: ]{0,48}") {
            if let Ok(template) = Template::new(&text) {
                let _ = template.render();
            }
        }

        #[test]
        fn escaped_dollars_halve(n in 0usize..8) {
            let text = "$$".repeat(n);
            let template = Template::new(&text).unwrap();
            prop_assert_eq!(template.render(), "$".repeat(n));
        }
    }
}
