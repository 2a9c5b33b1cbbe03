#![forbid(unsafe_code)]

//! Registration form walkthrough.
//!
//! Wires a localized form end to end: a template with conditional rows
//! and translated labels, a model with stock validators, a widget
//! factory, and one custom transfer function. Simulates a user filling
//! the form, shows a failed and a successful validation round, then
//! switches the locale.
//!
//! Run with: `cargo run --package weft-demo-login`
//! Set `RUST_LOG=weft_view=trace` to watch the engine work.

use std::error::Error;
use std::rc::Rc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use weft_core::{Field, IntValidator, LengthValidator, RegexValidator, Value};
use weft_i18n::StringCatalog;
use weft_model::{FormModel, Model};
use weft_template::Template;
use weft_view::FormView;
use weft_widgets::capability::{TextValued, ToggleCapable, Validatable};
use weft_widgets::{CheckBox, FormWidget, LineEdit, TextArea};

const EN_STRINGS: &str = "
# Registration form, English
form-title   = Registration
footer-note  = Fields marked * are required ({1})
user-name    = User name *
email        = Email address *
bio          = About you
newsletter   = Newsletter
birth-year   = Year of birth
";

const DE_STRINGS: &str = "
# Registration form, German
form-title   = Registrierung
footer-note  = Mit * markierte Felder sind Pflicht ({1})
user-name    = Benutzername *
email        = E-Mail-Adresse *
bio          = Über dich
newsletter   = Newsletter
birth-year   = Geburtsjahr
";

const TEMPLATE: &str = "\
== ${tr:form-title} ==
${<if:user-name>}${user-name-label}: ${user-name} ${user-name-info}
${</if:user-name>}${<if:email>}${email-label}: ${email} ${email-info}
${</if:email>}${<if:birth-year>}${birth-year-label}: ${birth-year} ${birth-year-info}
${</if:birth-year>}${<if:bio>}${bio-label}: ${bio}
${</if:bio>}${<if:newsletter>}${newsletter-label}: ${newsletter}
${</if:newsletter>}-- ${block:footer-note 2026} --";

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("demo error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut catalog = StringCatalog::new();
    catalog.parse_locale("en", EN_STRINGS)?;
    catalog.parse_locale("de", DE_STRINGS)?;
    catalog.set_fallback_chain(vec!["en".to_owned()]);
    let catalog = Rc::new(catalog);

    let mut model = build_model(catalog.clone());
    let mut view = build_view(catalog)?;

    info!("initial view pass");
    view.update_view(&model);
    print_step("blank form", &view.render());

    info!("simulating user input");
    type_into(&mut view, "user-name", "jo");
    type_into(&mut view, "email", "ada@example.org");
    type_into(&mut view, "birth-year", "1815");
    if let Some(toggle) = view.template_mut().resolve_mut::<CheckBox>("newsletter") {
        toggle.set_checked(true);
    }

    view.update_model(&mut model);
    let valid = model.validate();
    view.update_view(&model);
    print_step(
        &format!("after first submit (valid: {valid})"),
        &view.render(),
    );

    info!("fixing the rejected field");
    type_into(&mut view, "user-name", "ada.lovelace");
    view.update_model(&mut model);
    let valid = model.validate();
    view.update_view(&model);
    print_step(
        &format!("after second submit (valid: {valid})"),
        &view.render(),
    );
    println!(
        "stored birth-year value: {:?}",
        model.value(&Field::new("birth-year"))
    );

    info!("switching locale to de");
    model.set_locale("de");
    view.template_mut().set_locale("de");
    view.update_view(&model);
    print_step("German labels", &view.render());

    Ok(())
}

fn build_model(catalog: Rc<StringCatalog>) -> FormModel {
    let mut model = FormModel::new();
    model.set_catalog(catalog);

    model.add_field("user-name");
    model.add_field("email");
    model.add_field("birth-year");
    model.add_field("bio");
    model.add_field("newsletter");

    model.set_validator(
        &Field::new("user-name"),
        Some(Rc::new(LengthValidator::new().min(4).max(32).mandatory(true))),
    );
    model.set_validator(
        &Field::new("birth-year"),
        Some(Rc::new(IntValidator::new().bottom(1000).top(2026))),
    );

    model
}

fn build_view(catalog: Rc<StringCatalog>) -> Result<FormView, Box<dyn Error>> {
    let template = Template::new(TEMPLATE)?;
    let mut view = FormView::with_catalog(template, catalog);

    view.set_form_widget(
        &Field::new("user-name"),
        Box::new(LineEdit::new().placeholder("pick a name").display_width(14)),
    );

    let email_edit = {
        let mut edit = LineEdit::new().placeholder("you@example.org").display_width(18);
        edit.set_validator(Some(Rc::new(
            RegexValidator::new(r"[^@\s]+@[^@\s]+\.[^@\s]+")?
                .mandatory(true)
                .message("that does not look like an email address"),
        )));
        edit
    };
    view.set_form_widget(&Field::new("email"), Box::new(email_edit));

    // Year of birth keeps its numeric type in the model: the default
    // dispatch would store text, so the model direction is custom.
    view.set_form_widget_with(
        &Field::new("birth-year"),
        Box::new(LineEdit::new().max_length(4).display_width(6)),
        None,
        Some(Box::new(|model, widget| {
            let Some(text) = widget.as_text_valued() else {
                return;
            };
            let raw = text.value_text();
            let value = match raw.trim().parse::<i64>() {
                Ok(year) => Value::Int(year),
                Err(_) => Value::Text(raw),
            };
            model.set_value(&Field::new("birth-year"), value);
        })),
    );

    view.set_form_widget(
        &Field::new("newsletter"),
        Box::new(CheckBox::new().caption("yes, keep me posted")),
    );

    // No widget for "bio": the factory supplies it on the first pass.
    view.set_widget_factory(|field: &Field| {
        (field.as_str() == "bio")
            .then(|| Box::new(TextArea::new().placeholder("a few words")) as Box<dyn FormWidget>)
    });

    Ok(view)
}

fn type_into(view: &mut FormView, slot: &str, text: &str) {
    if let Some(edit) = view.template_mut().resolve_mut::<LineEdit>(slot) {
        edit.set_value_text(text);
    }
}

fn print_step(title: &str, rendered: &str) {
    println!("--- {title} ---");
    println!("{rendered}");
    println!();
}
