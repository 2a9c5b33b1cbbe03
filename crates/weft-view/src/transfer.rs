#![forbid(unsafe_code)]

//! Per-field value transfer.
//!
//! Both directions follow the same dispatch order:
//!
//! 1. a custom transfer function registered for the direction, which
//!    overrides everything else for that field;
//! 2. the toggle protocol, mapping the model value `Bool(true)` to
//!    checked and anything else to unchecked;
//! 3. the text protocol, moving the canonical text form;
//! 4. otherwise nothing: a widget with no matching capability is left
//!    alone, and the caller learns it from the `false` return.

use tracing::trace;

use weft_core::{Field, Value};
use weft_model::Model;
use weft_widgets::FormWidget;

use crate::registry::FieldBindings;

/// Move one field's value from the model into the widget.
///
/// Returns whether any transfer happened.
pub fn update_view_value(
    bindings: &mut FieldBindings,
    model: &dyn Model,
    field: &Field,
    widget: &mut dyn FormWidget,
) -> bool {
    if let Some(binding) = bindings.lookup_mut(field)
        && let Some(custom) = binding.update_view.as_mut()
    {
        trace!(%field, "custom view transfer");
        custom(model, widget);
        return true;
    }

    if let Some(toggle) = widget.as_toggle_mut() {
        let checked = matches!(model.value(field), Value::Bool(true));
        trace!(%field, checked, "toggle view transfer");
        toggle.set_checked(checked);
        return true;
    }

    if let Some(text) = widget.as_text_valued_mut() {
        let value = model.value_text(field);
        trace!(%field, chars = value.len(), "text view transfer");
        text.set_value_text(&value);
        return true;
    }

    false
}

/// Move one field's value from the widget into the model.
///
/// Returns whether any transfer happened.
pub fn update_model_value(
    bindings: &mut FieldBindings,
    model: &mut dyn Model,
    field: &Field,
    widget: &mut dyn FormWidget,
) -> bool {
    if let Some(binding) = bindings.lookup_mut(field)
        && let Some(custom) = binding.update_model.as_mut()
    {
        trace!(%field, "custom model transfer");
        custom(model, widget);
        return true;
    }

    if let Some(toggle) = widget.as_toggle_mut() {
        let checked = toggle.is_checked();
        trace!(%field, checked, "toggle model transfer");
        model.set_value(field, Value::Bool(checked));
        return true;
    }

    if let Some(text) = widget.as_text_valued_mut() {
        let value = text.value_text();
        trace!(%field, chars = value.len(), "text model transfer");
        model.set_value(field, Value::Text(value));
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use weft_model::FormModel;
    use weft_widgets::capability::{TextValued, ToggleCapable};
    use weft_widgets::{CheckBox, LineEdit, Message, WidgetId};

    fn field(name: &str) -> Field {
        Field::new(name)
    }

    #[test]
    fn bool_true_checks_the_toggle() {
        let mut bindings = FieldBindings::new();
        let mut model = FormModel::new();
        model.add_field("agree");
        model.set_value(&field("agree"), Value::Bool(true));
        let mut check = CheckBox::new();

        assert!(update_view_value(
            &mut bindings,
            &model,
            &field("agree"),
            &mut check
        ));
        assert!(check.is_checked());
    }

    #[test]
    fn non_bool_values_uncheck_the_toggle() {
        let mut bindings = FieldBindings::new();
        let mut model = FormModel::new();
        model.add_field("agree");
        let mut check = CheckBox::new().checked(true);

        for value in [
            Value::Empty,
            Value::Bool(false),
            Value::Int(1),
            Value::Text("true".to_owned()),
        ] {
            model.set_value(&field("agree"), value);
            check.set_checked(true);
            update_view_value(&mut bindings, &model, &field("agree"), &mut check);
            assert!(!check.is_checked());
        }
    }

    #[test]
    fn toggle_state_lands_in_the_model_as_bool() {
        let mut bindings = FieldBindings::new();
        let mut model = FormModel::new();
        model.add_field("agree");
        let mut check = CheckBox::new().checked(true);

        assert!(update_model_value(
            &mut bindings,
            &mut model,
            &field("agree"),
            &mut check
        ));
        assert_eq!(model.value(&field("agree")), Value::Bool(true));
    }

    #[test]
    fn text_moves_both_ways() {
        let mut bindings = FieldBindings::new();
        let mut model = FormModel::new();
        model.add_field("name");
        model.set_value(&field("name"), Value::Int(7));
        let mut edit = LineEdit::new();

        update_view_value(&mut bindings, &model, &field("name"), &mut edit);
        assert_eq!(edit.value_text(), "7");

        edit.set_value_text("eight");
        update_model_value(&mut bindings, &mut model, &field("name"), &mut edit);
        assert_eq!(model.value(&field("name")), Value::Text("eight".to_owned()));
    }

    #[test]
    fn custom_transfer_overrides_default_dispatch() {
        let mut bindings = FieldBindings::new();
        let calls = Rc::new(Cell::new(0u32));
        let spy = calls.clone();
        bindings.register_with(
            field("name"),
            WidgetId::next(),
            Some(Box::new(move |_, _| spy.set(spy.get() + 1))),
            None,
        );

        let mut model = FormModel::new();
        model.add_field("name");
        model.set_value(&field("name"), Value::from("model text"));
        let mut edit = LineEdit::new().value("widget text");

        assert!(update_view_value(
            &mut bindings,
            &model,
            &field("name"),
            &mut edit
        ));
        assert_eq!(calls.get(), 1);
        // Default text dispatch must not have run.
        assert_eq!(edit.value_text(), "widget text");
    }

    #[test]
    fn custom_transfer_in_one_direction_leaves_the_other_default() {
        let mut bindings = FieldBindings::new();
        bindings.register_with(
            field("name"),
            WidgetId::next(),
            Some(Box::new(|_, _| {})),
            None,
        );

        let mut model = FormModel::new();
        model.add_field("name");
        let mut edit = LineEdit::new().value("typed");

        update_model_value(&mut bindings, &mut model, &field("name"), &mut edit);
        assert_eq!(model.value(&field("name")), Value::Text("typed".to_owned()));
    }

    #[test]
    fn capability_less_widgets_are_skipped() {
        let mut bindings = FieldBindings::new();
        let mut model = FormModel::new();
        model.add_field("note");
        model.set_value(&field("note"), Value::from("kept"));
        let mut message = Message::with_text("static");

        assert!(!update_view_value(
            &mut bindings,
            &model,
            &field("note"),
            &mut message
        ));
        assert!(!update_model_value(
            &mut bindings,
            &mut model,
            &field("note"),
            &mut message
        ));
        assert_eq!(message.text(), "static");
        assert_eq!(model.value(&field("note")), Value::Text("kept".to_owned()));
    }
}
