//! Field rules for the opinion form.
//!
//! Each validator returns the message to show next to the field, or `None`
//! when the value is acceptable. The same functions back the blur endpoint
//! and the submit path, so both always agree.

use super::choices::{self, Choice};
use super::types::{FieldError, NewOpinion, OpinionForm};

pub const NAME_REQUIRED: &str = "Merci de renseigner votre nom";
pub const EMAIL_INVALID: &str = "Email invalide";
pub const BUILDING_REQUIRED: &str = "Merci de renseigner votre bâtiment";
pub const STATUS_REQUIRED: &str = "Merci de renseigner votre statut";
pub const WILLING_REQUIRED: &str = "Merci de renseigner votre souhait de changement de syndic";

pub fn validate_name(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some(NAME_REQUIRED);
    }
    None
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    if is_valid_email(email) {
        None
    } else {
        Some(EMAIL_INVALID)
    }
}

/// Accept only a value from `allowed`; labels are not values.
pub fn validate_choice(
    allowed: &[Choice],
    value: &str,
    message: &'static str,
) -> Option<&'static str> {
    if choices::is_allowed(allowed, value) {
        None
    } else {
        Some(message)
    }
}

/// Checkbox coercion: absent or blank is false, common "off" spellings are false,
/// anything else is true.
pub fn parse_checkbox(raw: Option<&str>) -> bool {
    match raw.map(|s| s.trim().to_ascii_lowercase()) {
        None => false,
        Some(v) => !matches!(v.as_str(), "" | "false" | "0" | "off" | "no"),
    }
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.')
}

/// ASCII-only address: local part of `[A-Za-z0-9_'+-.]` with no leading dot,
/// no `..` and a last character in `[A-Za-z0-9_+-]`; dotted domain whose TLD
/// is at least two letters.
fn is_valid_email(email: &str) -> bool {
    if email.len() > 254 {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if !local.chars().all(is_local_char) || local.starts_with('.') || local.contains("..") {
        return false;
    }
    if !local
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'))
    {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));
    labels_ok && tld_ok
}

/// Run every field rule and collect the failures in form order.
pub fn validate_opinion(form: &OpinionForm) -> Vec<FieldError> {
    let checks = [
        ("name", validate_name(&form.name)),
        ("email", validate_email(&form.email)),
        (
            "building",
            validate_choice(choices::BUILDINGS, &form.building, BUILDING_REQUIRED),
        ),
        (
            "status",
            validate_choice(choices::STATUSES, &form.status, STATUS_REQUIRED),
        ),
        (
            "willing_to_change",
            validate_choice(choices::WILLING_TO_CHANGE, &form.willing_to_change, WILLING_REQUIRED),
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(field, err)| err.map(|message| FieldError { field, message }))
        .collect()
}

/// Validate and convert the form into an insert payload.
/// Values are stored exactly as submitted; an empty message stays `Some("")`.
pub fn to_new_opinion(form: &OpinionForm) -> Result<NewOpinion, Vec<FieldError>> {
    let errors = validate_opinion(form);
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewOpinion {
        name: form.name.clone(),
        email: form.email.clone(),
        is_anonymous: parse_checkbox(form.is_anonymous.as_deref()),
        building: form.building.clone(),
        status: form.status.clone(),
        willing_to_change: form.willing_to_change.clone(),
        message: Some(form.message.clone()),
    })
}
