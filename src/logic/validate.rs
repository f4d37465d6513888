//! Validation rules for forms and config saves.
//!
//! Every failure maps to a human-readable Spanish message surfaced as an
//! error toast. There is no other error channel: an invalid save is simply
//! refused.

use crate::domain::MediaKind;

/// Required-field check: non-empty after trimming.
pub fn non_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Loose email shape check: something@something.tld, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Positive integer hours for the inventory release window.
pub fn parse_hours(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(hours) if hours > 0 => Some(hours),
        _ => None,
    }
}

/// Positive money amount for billing charges.
pub fn parse_amount(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount > 0.0 && amount.is_finite() => Some(amount),
        _ => None,
    }
}

/// Non-negative money amount for shipping cost fields.
pub fn parse_cost(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(cost) if cost >= 0.0 && cost.is_finite() => Some(cost),
        _ => None,
    }
}

fn extension_of(path: &str) -> Option<String> {
    path.trim()
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

/// Media kind implied by a source path, mirroring the accepted image/* and
/// video/* families. None means the file type is unsupported.
pub fn media_kind_for_path(path: &str) -> Option<MediaKind> {
    match extension_of(path)?.as_str() {
        "jpg" | "jpeg" | "png" | "gif" | "webp" => Some(MediaKind::Image),
        "mp4" | "mov" | "webm" => Some(MediaKind::Video),
        _ => None,
    }
}

/// Logo uploads accept PNG, JPG and SVG only.
pub fn is_valid_logo_path(path: &str) -> bool {
    matches!(
        extension_of(path).as_deref(),
        Some("png") | Some("jpg") | Some("jpeg") | Some("svg")
    )
}

/// Payment account save rule: bank and beneficiary are required, and at
/// least one of CLABE or card number must be present.
pub fn payment_account_error(
    bank_name: &str,
    beneficiary: &str,
    clabe: &str,
    card_number: &str,
) -> Option<&'static str> {
    if !non_blank(bank_name) || !non_blank(beneficiary) {
        return Some("Por favor completa el banco y el beneficiario.");
    }
    if !non_blank(clabe) && !non_blank(card_number) {
        return Some("Por favor ingresa al menos la CLABE o el número de tarjeta.");
    }
    None
}

/// Main WhatsApp config requires a phone number.
pub fn whatsapp_config_error(phone_number: &str) -> Option<&'static str> {
    if !non_blank(phone_number) {
        return Some("Por favor ingresa un número de teléfono válido.");
    }
    None
}

/// Inventory release policy: hours must be a positive number while active.
pub fn inventory_policy_error(active: bool, hours_raw: &str) -> Option<&'static str> {
    if active && parse_hours(hours_raw).is_none() {
        return Some("Por favor ingresa un número de horas válido mayor a 0.");
    }
    None
}

/// Notification alerts: email must be well-formed while active.
pub fn notification_config_error(active: bool, email: &str) -> Option<&'static str> {
    if active && !is_valid_email(email) {
        return Some("Por favor ingresa un correo electrónico válido.");
    }
    None
}
