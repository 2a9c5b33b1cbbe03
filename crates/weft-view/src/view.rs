#![forbid(unsafe_code)]

//! The form view driver.
//!
//! # Invariants
//!
//! 1. **Fixed pass order**: `update_view_field` always runs visibility,
//!    widget creation, validator sync, value transfer, info widget,
//!    label, validation display, read-only, in that order. The order is
//!    observable (a custom transfer sees the validator already synced)
//!    and must not change.
//!
//! 2. **The template owns the widgets**: the view binds boxes into the
//!    template and from then on only borrows them back slot by slot.
//!
//! 3. **Full passes only**: `update_view` / `update_model` walk every
//!    field the model declares, in model order. There is no partial or
//!    dirty-tracking mode.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | No widget and the factory declines | `error!`, field skipped this pass, retried next pass |
//! | Widget has no matching capability | transfer skipped, rest of the pass proceeds |
//! | Model value absent for a toggle | rendered unchecked |
//! | Field hidden | edit and info slots emptied, condition cleared |

use std::fmt;
use std::rc::Rc;

use tracing::{error, instrument, trace};

use weft_core::{Field, ValidationResult};
use weft_i18n::StringCatalog;
use weft_model::Model;
use weft_style::{ValidationStyleFlags, class_names};
use weft_template::Template;
use weft_widgets::{BaseTheme, FormWidget, Message, Theme};

use crate::registry::{FieldBinding, FieldBindings, UpdateModelFn, UpdateViewFn};
use crate::transfer;

/// Creates widgets for fields that reach a view pass without one.
///
/// Implemented for free by any `FnMut(&Field) -> Option<Box<dyn
/// FormWidget>>` closure.
pub trait WidgetFactory {
    /// Produce a widget for `field`, or `None` for fields this factory
    /// does not know.
    fn create(&mut self, field: &Field) -> Option<Box<dyn FormWidget>>;
}

impl<F> WidgetFactory for F
where
    F: FnMut(&Field) -> Option<Box<dyn FormWidget>>,
{
    fn create(&mut self, field: &Field) -> Option<Box<dyn FormWidget>> {
        self(field)
    }
}

/// Default factory: declines every field.
struct NoFactory;

impl WidgetFactory for NoFactory {
    fn create(&mut self, _field: &Field) -> Option<Box<dyn FormWidget>> {
        None
    }
}

/// Keeps a form model and a widget template synchronized.
///
/// # Example
/// ```
/// use weft_model::{FormModel, Model};
/// use weft_template::Template;
/// use weft_view::FormView;
/// use weft_widgets::LineEdit;
///
/// let mut model = FormModel::new();
/// model.add_field("name");
/// model.set_value(&"name".into(), "Ada".into());
///
/// let template = Template::new("Name: ${name}").unwrap();
/// let mut view = FormView::new(template);
/// view.set_form_widget(&"name".into(), Box::new(LineEdit::new().display_width(4)));
///
/// view.update_view(&model);
/// assert_eq!(view.render(), "Name: [Ada ]");
/// ```
pub struct FormView {
    template: Template,
    bindings: FieldBindings,
    factory: Box<dyn WidgetFactory>,
    theme: Box<dyn Theme>,
}

impl fmt::Debug for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormView")
            .field("template", &self.template)
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

impl FormView {
    /// Wrap a template, installing the standard `tr`, `id`, and `block`
    /// template functions.
    #[must_use]
    pub fn new(mut template: Template) -> Self {
        install_standard_functions(&mut template);
        Self {
            template,
            bindings: FieldBindings::new(),
            factory: Box::new(NoFactory),
            theme: Box::new(BaseTheme),
        }
    }

    /// Like [`FormView::new`], attaching a string catalog for the `tr`
    /// and `block` functions first.
    #[must_use]
    pub fn with_catalog(mut template: Template, catalog: Rc<StringCatalog>) -> Self {
        template.set_catalog(catalog);
        Self::new(template)
    }

    /// Bind a widget into the field's slot and register the field with
    /// default transfer in both directions.
    pub fn set_form_widget(&mut self, field: &Field, widget: Box<dyn FormWidget>) {
        self.set_form_widget_with(field, widget, None, None);
    }

    /// Bind a widget and register the field with optional custom
    /// transfer functions. A custom function fully replaces default
    /// dispatch for its direction.
    pub fn set_form_widget_with(
        &mut self,
        field: &Field,
        widget: Box<dyn FormWidget>,
        update_view: Option<UpdateViewFn>,
        update_model: Option<UpdateModelFn>,
    ) {
        self.bindings
            .register_with(field.clone(), widget.widget_id(), update_view, update_model);
        self.template.bind_widget(field.as_str(), widget);
    }

    /// Install the factory consulted when a visible field has no widget.
    pub fn set_widget_factory(&mut self, factory: impl WidgetFactory + 'static) {
        self.factory = Box::new(factory);
    }

    /// Replace the theme that styles validation results.
    pub fn set_theme(&mut self, theme: Box<dyn Theme>) {
        self.theme = theme;
    }

    /// The registry entry for a field, if it was ever registered.
    #[must_use]
    pub fn field_binding(&self, field: &Field) -> Option<&FieldBinding> {
        self.bindings.lookup(field)
    }

    /// The underlying template.
    #[must_use]
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Mutable access to the underlying template.
    pub fn template_mut(&mut self) -> &mut Template {
        &mut self.template
    }

    /// Render the template.
    #[must_use]
    pub fn render(&self) -> String {
        self.template.render()
    }

    /// Synchronize one field from the model into the view.
    pub fn update_view_field(&mut self, model: &dyn Model, field: &Field) {
        let visible = model.is_visible(field);
        self.template.set_condition(field.condition(), visible);
        if !visible {
            self.template.bind_empty(field.as_str());
            self.template.bind_empty(&field.info_slot());
            return;
        }

        if self.template.resolve_widget(field.as_str()).is_none() {
            match self.factory.create(field) {
                Some(widget) => {
                    trace!(%field, id = %widget.widget_id(), "factory created widget");
                    self.template.bind_widget(field.as_str(), widget);
                }
                None => {
                    error!(%field, "no widget bound and the factory produced none");
                    return;
                }
            }
        }

        {
            let Self {
                template, bindings, ..
            } = self;
            let Some(widget) = template.resolve_widget(field.as_str()) else {
                return;
            };

            if let Some(model_validator) = model.validator(field)
                && let Some(validatable) = widget.as_validatable_mut()
            {
                let differs = validatable
                    .validator()
                    .is_none_or(|current| !Rc::ptr_eq(current, &model_validator));
                if differs {
                    trace!(%field, "installing model validator on widget");
                    validatable.set_validator(Some(model_validator));
                }
            }

            transfer::update_view_value(bindings, model, field, widget);
        }

        let info_slot = field.info_slot();
        if self.template.resolve::<Message>(&info_slot).is_none() {
            self.template.bind_widget(info_slot, Box::new(Message::new()));
        }

        self.template
            .bind_string(field.label_slot(), model.label(field));

        self.indicate_validation(field, model.is_validated(field), &model.validation(field));

        if let Some(widget) = self.template.resolve_widget(field.as_str()) {
            widget.set_disabled(model.is_read_only(field));
        }
    }

    /// Reflect a field's validation state in the view.
    ///
    /// The info message always carries the result's text. While
    /// `validated` is false the text stays but all decoration comes off:
    /// the theme runs with [`ValidationStyleFlags::NONE`] and the `error`
    /// class is forced off the message.
    pub fn indicate_validation(
        &mut self,
        field: &Field,
        validated: bool,
        validation: &ValidationResult,
    ) {
        if let Some(info) = self.template.resolve_mut::<Message>(&field.info_slot()) {
            info.set_text(validation.message());
            let show_error = validated && !validation.is_valid();
            info.class_list_mut().toggle(class_names::ERROR, show_error);
        }

        let Self {
            template, theme, ..
        } = self;
        if let Some(widget) = template.resolve_widget(field.as_str()) {
            let flags = if validated {
                ValidationStyleFlags::ALL
            } else {
                ValidationStyleFlags::NONE
            };
            theme.apply_validation_style(widget, validation, flags);
        }
    }

    /// Synchronize one field from the view into the model.
    ///
    /// A field whose slot holds no widget is skipped; there is nothing
    /// to read.
    pub fn update_model_field(&mut self, model: &mut dyn Model, field: &Field) {
        let Self {
            template, bindings, ..
        } = self;
        let Some(widget) = template.resolve_widget(field.as_str()) else {
            trace!(%field, "no widget to read");
            return;
        };
        transfer::update_model_value(bindings, model, field, widget);
    }

    /// Synchronize every model field into the view, in model order.
    #[instrument(skip_all)]
    pub fn update_view(&mut self, model: &dyn Model) {
        for field in model.fields() {
            self.update_view_field(model, &field);
        }
    }

    /// Synchronize every model field into the model, in model order.
    #[instrument(skip_all)]
    pub fn update_model(&mut self, model: &mut dyn Model) {
        for field in model.fields() {
            self.update_model_field(model, &field);
        }
    }
}

fn install_standard_functions(template: &mut Template) {
    template.add_function("tr", |t, args| {
        let Some(key) = args.first() else {
            return String::new();
        };
        match t.catalog() {
            Some(catalog) => catalog.tr(t.locale(), key).to_owned(),
            None => key.clone(),
        }
    });

    template.add_function("id", |t, args| {
        args.first()
            .and_then(|slot| t.widget_ref(slot))
            .map(|widget| widget.widget_id().to_string())
            .unwrap_or_default()
    });

    template.add_function("block", |t, args| {
        let Some(key) = args.first() else {
            return String::new();
        };
        let rest: Vec<&str> = args[1..].iter().map(String::as_str).collect();
        match t.catalog() {
            Some(catalog) => catalog
                .format_positional(t.locale(), key, &rest)
                .unwrap_or_else(|| key.clone()),
            None => key.clone(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_i18n::LocaleStrings;
    use weft_widgets::LineEdit;

    fn catalog() -> Rc<StringCatalog> {
        let mut en = LocaleStrings::new();
        en.insert("greeting", "Hello");
        en.insert("welcome", "Welcome, {1}!");
        let mut catalog = StringCatalog::new();
        catalog.add_locale("en", en);
        Rc::new(catalog)
    }

    #[test]
    fn tr_function_resolves_through_the_catalog() {
        let template = Template::new("${tr:greeting} ${tr:missing}").unwrap();
        let view = FormView::with_catalog(template, catalog());
        assert_eq!(view.render(), "Hello missing");
    }

    #[test]
    fn tr_function_without_catalog_echoes_the_key() {
        let template = Template::new("${tr:greeting}").unwrap();
        let view = FormView::new(template);
        assert_eq!(view.render(), "greeting");
    }

    #[test]
    fn id_function_names_the_bound_widget() {
        let template = Template::new("${id:name}").unwrap();
        let mut view = FormView::new(template);
        let widget = LineEdit::new();
        let id = widget.widget_id();
        view.set_form_widget(&Field::new("name"), Box::new(widget));
        assert_eq!(view.render(), format!("w{}", id.raw()));
    }

    #[test]
    fn id_function_renders_nothing_for_unbound_slots() {
        let template = Template::new("<${id:name}>").unwrap();
        let view = FormView::new(template);
        assert_eq!(view.render(), "<>");
    }

    #[test]
    fn block_function_interpolates_positional_args() {
        let template = Template::new("${block:welcome Ada}").unwrap();
        let view = FormView::with_catalog(template, catalog());
        assert_eq!(view.render(), "Welcome, Ada!");
    }
}
