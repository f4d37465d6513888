//! Form engine.
//!
//! A form is a focusable field list plus a derived validity flag. The root
//! holds at most one `ActiveForm` (assigned when a create/edit view mounts,
//! cleared when it leaves), and dispatches save/cancel to it; child views
//! never hand callbacks upward.
//!
//! Validity means "required fields present after trimming" plus the few
//! per-form rules (numeric fields parse, the media source maps to a
//! supported kind). The save pill is disabled while a form is invalid, and
//! submitting an invalid form is a no-op.

use crate::domain::{
    BirdAge, BirdPurpose, ItemKind, Media, PaymentChannel, Product, ProductStatus, User,
    WhatsAppChannel,
};
use crate::logic::validate;
use crate::store::Catalog;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// Rendered masked; otherwise behaves like text.
    Secret(String),
    Toggle(bool),
    Select {
        options: &'static [&'static str],
        index: usize,
    },
}

#[derive(Debug, Clone)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
    pub required: bool,
}

impl Field {
    fn text(key: &'static str, label: &'static str, value: &str, required: bool) -> Self {
        Self {
            key,
            label,
            value: FieldValue::Text(value.to_string()),
            required,
        }
    }

    fn secret(key: &'static str, label: &'static str, required: bool) -> Self {
        Self {
            key,
            label,
            value: FieldValue::Secret(String::new()),
            required,
        }
    }

    fn toggle(key: &'static str, label: &'static str, value: bool) -> Self {
        Self {
            key,
            label,
            value: FieldValue::Toggle(value),
            required: false,
        }
    }

    fn select(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
        index: usize,
    ) -> Self {
        Self {
            key,
            label,
            value: FieldValue::Select { options, index },
            required: false,
        }
    }

    /// Whether this required field is still blank.
    pub fn missing(&self) -> bool {
        if !self.required {
            return false;
        }
        match &self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => !validate::non_blank(s),
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub fields: Vec<Field>,
    pub focus: usize,
}

impl FormState {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields, focus: 0 }
    }

    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn field_mut(&mut self, key: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.key == key)
    }

    /// Text content of a text/secret field; empty for other kinds.
    pub fn text(&self, key: &str) -> &str {
        match self.field(key).map(|f| &f.value) {
            Some(FieldValue::Text(s)) | Some(FieldValue::Secret(s)) => s,
            _ => "",
        }
    }

    pub fn toggle(&self, key: &str) -> bool {
        matches!(
            self.field(key).map(|f| &f.value),
            Some(FieldValue::Toggle(true))
        )
    }

    pub fn select_index(&self, key: &str) -> usize {
        match self.field(key).map(|f| &f.value) {
            Some(FieldValue::Select { index, .. }) => *index,
            _ => 0,
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Type a character into the focused field.
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            match &mut field.value {
                FieldValue::Text(s) | FieldValue::Secret(s) => s.push(c),
                _ => {}
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            match &mut field.value {
                FieldValue::Text(s) | FieldValue::Secret(s) => {
                    s.pop();
                }
                _ => {}
            }
        }
    }

    /// Space on a toggle flips it; on a select it cycles forward.
    pub fn activate_focused(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            match &mut field.value {
                FieldValue::Toggle(v) => *v = !*v,
                FieldValue::Select { options, index } => {
                    *index = (*index + 1) % options.len();
                }
                _ => {}
            }
        }
    }

    /// All required text fields are non-blank.
    pub fn required_filled(&self) -> bool {
        self.fields.iter().all(|f| !f.missing())
    }
}

const KIND_OPTIONS: &[&str] = &["Ave", "Artículo"];
const STATUS_OPTIONS: &[&str] = &["Disponible", "Reservado", "Vendido"];
const AGE_OPTIONS: &[&str] = &["Pollo", "Polla", "Gallo", "Gallina"];
const PURPOSE_OPTIONS: &[&str] = &["Combate", "Cría"];

pub fn kind_from_index(index: usize) -> ItemKind {
    if index == 0 {
        ItemKind::Bird
    } else {
        ItemKind::Article
    }
}

pub fn status_from_index(index: usize) -> ProductStatus {
    match index {
        0 => ProductStatus::Available,
        1 => ProductStatus::Reserved,
        _ => ProductStatus::Sold,
    }
}

pub fn age_from_index(index: usize) -> BirdAge {
    match index {
        0 => BirdAge::Pollo,
        1 => BirdAge::Polla,
        2 => BirdAge::Gallo,
        _ => BirdAge::Gallina,
    }
}

pub fn purpose_from_index(index: usize) -> BirdPurpose {
    if index == 0 {
        BirdPurpose::Combat
    } else {
        BirdPurpose::Breeding
    }
}

/// The single mounted form the root dispatches save/cancel to.
#[derive(Debug, Clone)]
pub enum ActiveForm {
    Media {
        id: Option<String>,
        form: FormState,
    },
    Product {
        id: Option<String>,
        form: FormState,
    },
    Category {
        id: Option<String>,
        form: FormState,
    },
    User {
        id: Option<String>,
        form: FormState,
    },
    Charge {
        id: Option<String>,
        form: FormState,
    },
    ShippingConfig {
        form: FormState,
    },
    PaymentAccount {
        form: FormState,
    },
    PaymentChannel {
        id: String,
        form: FormState,
    },
    WhatsAppMain {
        form: FormState,
    },
    WhatsAppChannel {
        id: String,
        form: FormState,
    },
    Inventory {
        form: FormState,
    },
    Notifications {
        form: FormState,
    },
    IdentityLogo {
        form: FormState,
    },
}

impl ActiveForm {
    pub fn form(&self) -> &FormState {
        match self {
            ActiveForm::Media { form, .. }
            | ActiveForm::Product { form, .. }
            | ActiveForm::Category { form, .. }
            | ActiveForm::User { form, .. }
            | ActiveForm::Charge { form, .. }
            | ActiveForm::ShippingConfig { form }
            | ActiveForm::PaymentAccount { form }
            | ActiveForm::PaymentChannel { form, .. }
            | ActiveForm::WhatsAppMain { form }
            | ActiveForm::WhatsAppChannel { form, .. }
            | ActiveForm::Inventory { form }
            | ActiveForm::Notifications { form }
            | ActiveForm::IdentityLogo { form } => form,
        }
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        match self {
            ActiveForm::Media { form, .. }
            | ActiveForm::Product { form, .. }
            | ActiveForm::Category { form, .. }
            | ActiveForm::User { form, .. }
            | ActiveForm::Charge { form, .. }
            | ActiveForm::ShippingConfig { form }
            | ActiveForm::PaymentAccount { form }
            | ActiveForm::PaymentChannel { form, .. }
            | ActiveForm::WhatsAppMain { form }
            | ActiveForm::WhatsAppChannel { form, .. }
            | ActiveForm::Inventory { form }
            | ActiveForm::Notifications { form }
            | ActiveForm::IdentityLogo { form } => form,
        }
    }

    /// Validity flag pushed into root UI state after every edit.
    pub fn validity(&self) -> bool {
        match self {
            ActiveForm::Media { form, .. } => {
                form.required_filled()
                    && validate::media_kind_for_path(form.text("source")).is_some()
            }
            ActiveForm::Product { form, .. } => {
                let base = form.required_filled()
                    && validate::parse_cost(form.text("price")).is_some();
                let conditional = match kind_from_index(form.select_index("kind")) {
                    ItemKind::Bird => validate::non_blank(form.text("ring")),
                    ItemKind::Article => form
                        .text("stock")
                        .trim()
                        .parse::<u32>()
                        .is_ok(),
                };
                base && conditional
            }
            ActiveForm::Category { form, .. } => form.required_filled(),
            ActiveForm::User { form, .. } => {
                form.required_filled() && validate::is_valid_email(form.text("email"))
            }
            ActiveForm::Charge { form, .. } => {
                form.required_filled() && validate::parse_amount(form.text("amount")).is_some()
            }
            ActiveForm::ShippingConfig { form } => {
                validate::parse_cost(form.text("base_cost")).is_some()
                    && validate::parse_cost(form.text("cost_normal")).is_some()
                    && validate::parse_cost(form.text("cost_extended")).is_some()
            }
            ActiveForm::IdentityLogo { form } => validate::non_blank(form.text("path")),
            // Config panes validate on save with an error toast instead of
            // gating the pill.
            _ => true,
        }
    }
}

pub fn media_form(existing: Option<&Media>) -> FormState {
    FormState::new(vec![
        Field::text("title", "Título", existing.map_or("", |m| &m.title), true),
        Field::text(
            "description",
            "Descripción",
            existing.map_or("", |m| &m.description),
            false,
        ),
        Field::text(
            "category",
            "Categoría",
            existing.map_or("", |m| &m.category),
            true,
        ),
        Field::text(
            "subcategory",
            "Subcategoría",
            existing.map_or("", |m| &m.subcategory),
            false,
        ),
        Field::text(
            "source",
            "Archivo",
            existing.map_or("", |m| &m.source_ref),
            true,
        ),
    ])
}

pub fn product_form(existing: Option<&Product>) -> FormState {
    let kind_index = match existing.map(|p| p.kind) {
        Some(ItemKind::Article) => 1,
        _ => 0,
    };
    let status_index = match existing.map(|p| p.status) {
        Some(ProductStatus::Reserved) => 1,
        Some(ProductStatus::Sold) => 2,
        _ => 0,
    };
    let age_index = match existing.and_then(|p| p.age) {
        Some(BirdAge::Polla) => 1,
        Some(BirdAge::Gallo) => 2,
        Some(BirdAge::Gallina) => 3,
        _ => 0,
    };
    let purpose_index = match existing.and_then(|p| p.purpose) {
        Some(BirdPurpose::Breeding) => 1,
        _ => 0,
    };
    let price = existing.map_or(String::new(), |p| format!("{}", p.price));
    let stock = existing
        .and_then(|p| p.stock)
        .map_or(String::new(), |s| s.to_string());
    FormState::new(vec![
        Field::select("kind", "Tipo", KIND_OPTIONS, kind_index),
        Field::text("name", "Nombre", existing.map_or("", |p| &p.name), true),
        Field::text("price", "Precio", &price, true),
        Field::select("status", "Estado", STATUS_OPTIONS, status_index),
        Field::text(
            "ring",
            "Número de Anillo",
            existing.and_then(|p| p.ring_number.as_deref()).unwrap_or(""),
            false,
        ),
        Field::select("age", "Edad", AGE_OPTIONS, age_index),
        Field::select("purpose", "Propósito", PURPOSE_OPTIONS, purpose_index),
        Field::text("stock", "Stock", &stock, false),
        Field::text(
            "image",
            "Imagen de Portada",
            existing.map_or("", |p| &p.image_ref),
            true,
        ),
        Field::text(
            "description",
            "Descripción",
            existing.map_or("", |p| &p.description),
            false,
        ),
    ])
}

pub fn category_form(existing_name: Option<&str>) -> FormState {
    FormState::new(vec![Field::text(
        "name",
        "Nombre de la Categoría",
        existing_name.unwrap_or(""),
        true,
    )])
}

pub fn user_form(existing: Option<&User>) -> FormState {
    FormState::new(vec![
        Field::text(
            "full_name",
            "Nombre Completo",
            existing.map_or("", |u| &u.full_name),
            true,
        ),
        Field::text("email", "Correo", existing.map_or("", |u| &u.email), true),
        Field::text(
            "username",
            "Usuario",
            existing.map_or("", |u| &u.username),
            true,
        ),
        // Editing keeps the stored password unless a new one is typed.
        Field::secret("password", "Contraseña", existing.is_none()),
    ])
}

pub fn charge_form(existing: Option<(&str, f64)>) -> FormState {
    let amount = existing.map_or(String::new(), |(_, a)| format!("{a}"));
    FormState::new(vec![
        Field::text(
            "concept",
            "Concepto",
            existing.map_or("", |(c, _)| c),
            true,
        ),
        Field::text("amount", "Monto", &amount, true),
    ])
}

pub fn shipping_config_form(catalog: &Catalog) -> FormState {
    let cfg = &catalog.shipping;
    FormState::new(vec![
        Field::text(
            "base_cost",
            "Costo Base Artículos",
            &format!("{}", cfg.base_cost_articles),
            true,
        ),
        Field::toggle(
            "free_articles",
            "Envío Gratis en Artículos",
            cfg.free_shipping_articles,
        ),
        Field::text(
            "cost_normal",
            "Costo Zona Normal",
            &format!("{}", cfg.cost_normal_zone),
            true,
        ),
        Field::text(
            "cost_extended",
            "Costo Zona Extendida",
            &format!("{}", cfg.cost_extended_zone),
            true,
        ),
        Field::toggle(
            "free_birds",
            "Envío Gratis en Aves",
            cfg.free_shipping_birds,
        ),
    ])
}

pub fn payment_account_form(catalog: &Catalog) -> FormState {
    let acc = &catalog.payment;
    FormState::new(vec![
        Field::text("bank", "Banco", &acc.bank_name, false),
        Field::text("beneficiary", "Beneficiario", &acc.beneficiary, false),
        Field::text("clabe", "CLABE Interbancaria", &acc.clabe, false),
        Field::text("card", "Número de Tarjeta", &acc.card_number, false),
    ])
}

pub fn payment_channel_form(channel: &PaymentChannel) -> FormState {
    FormState::new(vec![
        Field::toggle("active", "Canal Activo", channel.active),
        Field::text("clabe", "CLABE del Canal", &channel.clabe, false),
    ])
}

pub fn whatsapp_main_form(catalog: &Catalog) -> FormState {
    let cfg = &catalog.whatsapp;
    FormState::new(vec![
        Field::toggle("active", "Confirmación Activa", cfg.active),
        Field::text("phone", "Número de WhatsApp", &cfg.phone_number, false),
        Field::text("template", "Plantilla de Mensaje", &cfg.template, false),
    ])
}

pub fn whatsapp_channel_form(channel: &WhatsAppChannel) -> FormState {
    FormState::new(vec![
        Field::toggle("active", "Canal Activo", channel.active),
        Field::text("phone", "Número del Canal", &channel.phone_number, false),
        Field::text("template", "Plantilla del Canal", &channel.template, false),
    ])
}

pub fn inventory_form(catalog: &Catalog) -> FormState {
    let policy = &catalog.inventory;
    FormState::new(vec![
        Field::toggle("active", "Liberación Automática", policy.active),
        Field::text("hours", "Horas Límite", &policy.hours.to_string(), false),
    ])
}

pub fn notifications_form(catalog: &Catalog) -> FormState {
    let cfg = &catalog.notifications;
    FormState::new(vec![
        Field::toggle("active", "Alertas por Correo", cfg.active),
        Field::text("email", "Correo de Alertas", &cfg.email, false),
    ])
}

pub fn identity_logo_form() -> FormState {
    FormState::new(vec![Field::text("path", "Archivo del Logo", "", true)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_form_blank_name_is_invalid() {
        let form = ActiveForm::Category {
            id: None,
            form: category_form(None),
        };
        assert!(!form.validity());
    }

    #[test]
    fn test_category_form_whitespace_name_is_invalid() {
        let mut state = category_form(None);
        for c in "   ".chars() {
            state.input_char(c);
        }
        let form = ActiveForm::Category {
            id: None,
            form: state,
        };
        assert!(!form.validity());
    }

    #[test]
    fn test_category_form_becomes_valid_with_name() {
        let mut state = category_form(None);
        for c in "Temporada de Cosecha".chars() {
            state.input_char(c);
        }
        let form = ActiveForm::Category {
            id: None,
            form: state,
        };
        assert!(form.validity());
    }

    #[test]
    fn test_product_bird_requires_ring() {
        let mut state = product_form(None);
        state.field_mut("name").unwrap().value = FieldValue::Text("Gallo Kelso".to_string());
        state.field_mut("price").unwrap().value = FieldValue::Text("9500".to_string());
        state.field_mut("image").unwrap().value = FieldValue::Text("gallo.jpg".to_string());
        let form = ActiveForm::Product {
            id: None,
            form: state.clone(),
        };
        assert!(!form.validity());

        state.field_mut("ring").unwrap().value = FieldValue::Text("KL-010".to_string());
        let form = ActiveForm::Product {
            id: None,
            form: state,
        };
        assert!(form.validity());
    }

    #[test]
    fn test_product_article_requires_stock() {
        let mut state = product_form(None);
        state.field_mut("kind").unwrap().value = FieldValue::Select {
            options: KIND_OPTIONS,
            index: 1,
        };
        state.field_mut("name").unwrap().value = FieldValue::Text("Botas".to_string());
        state.field_mut("price").unwrap().value = FieldValue::Text("3200".to_string());
        state.field_mut("image").unwrap().value = FieldValue::Text("botas.jpg".to_string());
        let form = ActiveForm::Product {
            id: None,
            form: state.clone(),
        };
        assert!(!form.validity());

        state.field_mut("stock").unwrap().value = FieldValue::Text("5".to_string());
        let form = ActiveForm::Product {
            id: None,
            form: state,
        };
        assert!(form.validity());
    }

    #[test]
    fn test_media_form_rejects_unsupported_source() {
        let mut state = media_form(None);
        state.field_mut("title").unwrap().value = FieldValue::Text("Atardecer".to_string());
        state.field_mut("category").unwrap().value = FieldValue::Text("Paisajes".to_string());
        state.field_mut("source").unwrap().value = FieldValue::Text("nota.pdf".to_string());
        let form = ActiveForm::Media {
            id: None,
            form: state.clone(),
        };
        assert!(!form.validity());

        state.field_mut("source").unwrap().value = FieldValue::Text("atardecer.jpg".to_string());
        let form = ActiveForm::Media {
            id: None,
            form: state,
        };
        assert!(form.validity());
    }

    #[test]
    fn test_user_form_password_required_only_on_create() {
        let mut create = user_form(None);
        create.field_mut("full_name").unwrap().value = FieldValue::Text("Ana".to_string());
        create.field_mut("email").unwrap().value = FieldValue::Text("ana@rancho.com".to_string());
        create.field_mut("username").unwrap().value = FieldValue::Text("ana".to_string());
        let form = ActiveForm::User {
            id: None,
            form: create.clone(),
        };
        assert!(!form.validity(), "password empty on create");

        let existing = User {
            id: "USR-009".to_string(),
            full_name: "Ana".to_string(),
            email: "ana@rancho.com".to_string(),
            username: "ana".to_string(),
            password: None,
            active: true,
            created_at: chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        };
        let edit = ActiveForm::User {
            id: Some(existing.id.clone()),
            form: user_form(Some(&existing)),
        };
        assert!(edit.validity(), "password optional on edit");
    }

    #[test]
    fn test_user_form_checks_email_shape() {
        let mut state = user_form(None);
        state.field_mut("full_name").unwrap().value = FieldValue::Text("Ana".to_string());
        state.field_mut("email").unwrap().value = FieldValue::Text("ana-arroba".to_string());
        state.field_mut("username").unwrap().value = FieldValue::Text("ana".to_string());
        state.field_mut("password").unwrap().value = FieldValue::Secret("secreta".to_string());
        let form = ActiveForm::User {
            id: None,
            form: state,
        };
        assert!(!form.validity());
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut form = category_form(None);
        assert_eq!(form.focus, 0);
        form.focus_next();
        assert_eq!(form.focus, 0, "single field wraps onto itself");
        let mut form = media_form(None);
        form.focus_prev();
        assert_eq!(form.focus, form.fields.len() - 1);
    }

    #[test]
    fn test_select_cycles_on_activate() {
        let mut form = product_form(None);
        form.focus = 0; // kind select
        assert_eq!(form.select_index("kind"), 0);
        form.activate_focused();
        assert_eq!(form.select_index("kind"), 1);
        form.activate_focused();
        assert_eq!(form.select_index("kind"), 0);
    }
}
