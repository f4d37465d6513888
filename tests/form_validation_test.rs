//! Submitting a create/edit form with a required field empty must not
//! mutate the repository and must leave the validity flag false.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ranchtui::forms::ActiveForm;
use ranchtui::handlers::{self, actions};
use ranchtui::model::navigation::{GalleryMode, SystemSection, Tab};
use ranchtui::model::{Model, QuickAction};

fn key(model: &mut Model, code: KeyCode) {
    handlers::handle_key(model, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(model: &mut Model, text: &str) {
    for c in text.chars() {
        key(model, KeyCode::Char(c));
    }
}

#[test]
fn test_whitespace_category_keeps_pill_disabled_and_repo_untouched() {
    let mut model = Model::new();
    let before = model.catalog.categories.len();

    actions::apply_quick_action(&mut model, QuickAction::NewCategory);
    type_text(&mut model, "   ");
    assert!(!model.ui.form_valid, "whitespace-only name is not valid");

    // Keyboard submit is a no-op while invalid.
    key(&mut model, KeyCode::Enter);
    assert_eq!(model.catalog.categories.len(), before);
    assert_eq!(model.nav.gallery_mode, GalleryMode::CategoryCreate);
    assert!(model.form.is_some());

    // The required hint is the blank field itself.
    if let Some(ActiveForm::Category { form, .. }) = model.form.as_ref() {
        assert!(form.fields[0].missing());
    } else {
        panic!("category form expected");
    }
}

#[test]
fn test_valid_category_submits_and_returns_to_list() {
    let mut model = Model::new();
    let before = model.catalog.categories.len();

    actions::apply_quick_action(&mut model, QuickAction::NewCategory);
    type_text(&mut model, "Nuevas Instalaciones");
    assert!(model.ui.form_valid);

    key(&mut model, KeyCode::Enter);
    assert_eq!(model.catalog.categories.len(), before + 1);
    assert_eq!(model.nav.gallery_mode, GalleryMode::List);
    assert!(model.form.is_none());
    assert!(!model.ui.form_valid, "flag resets when the form unmounts");
}

#[test]
fn test_product_missing_conditional_field_blocks_submit() {
    let mut model = Model::new();
    let before = model.catalog.products.len();

    actions::apply_quick_action(&mut model, QuickAction::NewProduct);
    // Fill everything except the bird's ring number.
    if let Some(form) = model.form.as_mut() {
        let state = form.form_mut();
        state.field_mut("name").unwrap().value =
            ranchtui::forms::FieldValue::Text("Gallo Nuevo".to_string());
        state.field_mut("price").unwrap().value =
            ranchtui::forms::FieldValue::Text("7500".to_string());
        state.field_mut("image").unwrap().value =
            ranchtui::forms::FieldValue::Text("gallo.jpg".to_string());
    }
    model.sync_form_validity();
    assert!(!model.ui.form_valid);

    actions::save_active_form(&mut model);
    assert_eq!(model.catalog.products.len(), before);

    if let Some(form) = model.form.as_mut() {
        form.form_mut().field_mut("ring").unwrap().value =
            ranchtui::forms::FieldValue::Text("NV-001".to_string());
    }
    model.sync_form_validity();
    assert!(model.ui.form_valid);
    actions::save_active_form(&mut model);
    assert_eq!(model.catalog.products.len(), before + 1);
}

#[test]
fn test_media_form_requires_supported_source() {
    let mut model = Model::new();
    let before = model.catalog.media.len();

    actions::apply_quick_action(&mut model, QuickAction::NewMedia);
    if let Some(form) = model.form.as_mut() {
        let state = form.form_mut();
        state.field_mut("title").unwrap().value =
            ranchtui::forms::FieldValue::Text("Nueva Troje".to_string());
        state.field_mut("category").unwrap().value =
            ranchtui::forms::FieldValue::Text("Instalaciones".to_string());
        state.field_mut("source").unwrap().value =
            ranchtui::forms::FieldValue::Text("plano.dwg".to_string());
    }
    model.sync_form_validity();
    assert!(!model.ui.form_valid, "unsupported file type");
    actions::save_active_form(&mut model);
    assert_eq!(model.catalog.media.len(), before);
}

#[test]
fn test_user_create_requires_password_and_email_shape() {
    let mut model = Model::new();
    let before = model.catalog.users.len();

    model.nav.open_tab(Tab::System);
    actions::enter_system_section(&mut model, SystemSection::Users);
    actions::new_user(&mut model);

    if let Some(form) = model.form.as_mut() {
        let state = form.form_mut();
        state.field_mut("full_name").unwrap().value =
            ranchtui::forms::FieldValue::Text("Lucía Torres".to_string());
        state.field_mut("email").unwrap().value =
            ranchtui::forms::FieldValue::Text("lucia-sin-arroba".to_string());
        state.field_mut("username").unwrap().value =
            ranchtui::forms::FieldValue::Text("lucia".to_string());
        state.field_mut("password").unwrap().value =
            ranchtui::forms::FieldValue::Secret("segura123".to_string());
    }
    model.sync_form_validity();
    assert!(!model.ui.form_valid, "malformed email");
    actions::save_active_form(&mut model);
    assert_eq!(model.catalog.users.len(), before);

    if let Some(form) = model.form.as_mut() {
        form.form_mut().field_mut("email").unwrap().value =
            ranchtui::forms::FieldValue::Text("lucia@rancho.com".to_string());
    }
    model.sync_form_validity();
    assert!(model.ui.form_valid);
    actions::save_active_form(&mut model);
    assert_eq!(model.catalog.users.len(), before + 1);
    assert_eq!(model.catalog.users.all()[0].full_name, "Lucía Torres");
}

#[test]
fn test_charge_amount_must_parse_positive() {
    let mut model = Model::new();
    let before = model.catalog.extra_charges.len();

    actions::new_charge(&mut model);
    if let Some(form) = model.form.as_mut() {
        let state = form.form_mut();
        state.field_mut("concept").unwrap().value =
            ranchtui::forms::FieldValue::Text("Ajuste de dominio".to_string());
        state.field_mut("amount").unwrap().value =
            ranchtui::forms::FieldValue::Text("gratis".to_string());
    }
    model.sync_form_validity();
    assert!(!model.ui.form_valid);
    actions::save_active_form(&mut model);
    assert_eq!(model.catalog.extra_charges.len(), before);
}

#[test]
fn test_discard_confirmation_guards_unsaved_form() {
    let mut model = Model::new();
    actions::apply_quick_action(&mut model, QuickAction::NewMedia);
    type_text(&mut model, "Borrador");

    key(&mut model, KeyCode::Esc);
    assert!(model.ui.confirm.is_some(), "esc asks before discarding");
    assert!(model.form.is_some(), "form survives until confirmed");

    key(&mut model, KeyCode::Enter);
    assert!(model.form.is_none());
    assert_eq!(model.nav.gallery_mode, GalleryMode::List);
}
