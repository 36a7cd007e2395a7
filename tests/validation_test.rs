//! Validation tests: per-field rules, record-level composition, checkbox
//! coercion and the label/value split of enumerated fields.

mod common;

use syndic_survey::models::opinion::choices;
use syndic_survey::models::opinion::validate::{self, *};
use syndic_survey::models::opinion::{FieldError, OpinionForm};
use common::{valid_form, valid_new_opinion};

fn messages(errors: &[FieldError]) -> Vec<(&'static str, &'static str)> {
    errors.iter().map(|e| (e.field, e.message)).collect()
}

#[test]
fn test_valid_form_has_no_errors() {
    assert!(validate_opinion(&valid_form()).is_empty());
}

#[test]
fn test_empty_form_reports_every_required_field_in_order() {
    let errors = validate_opinion(&OpinionForm::default());
    assert_eq!(
        messages(&errors),
        vec![
            ("name", NAME_REQUIRED),
            ("email", EMAIL_INVALID),
            ("building", BUILDING_REQUIRED),
            ("status", STATUS_REQUIRED),
            ("willing_to_change", WILLING_REQUIRED),
        ]
    );
}

#[test]
fn test_each_missing_field_yields_only_its_message() {
    let cases = [
        ("name", "Merci de renseigner votre nom"),
        ("email", "Email invalide"),
        ("building", "Merci de renseigner votre bâtiment"),
        ("status", "Merci de renseigner votre statut"),
        ("willing_to_change", "Merci de renseigner votre souhait de changement de syndic"),
    ];

    for (field, expected) in cases {
        let mut form = valid_form();
        match field {
            "name" => form.name.clear(),
            "email" => form.email.clear(),
            "building" => form.building.clear(),
            "status" => form.status.clear(),
            _ => form.willing_to_change.clear(),
        }
        let errors = validate_opinion(&form);
        assert_eq!(messages(&errors), vec![(field, expected)], "field {field}");
        assert!(to_new_opinion(&form).is_err(), "field {field} must block submission");
    }
}

#[test]
fn test_whitespace_only_name_is_rejected() {
    assert_eq!(validate_name("   "), Some(NAME_REQUIRED));
    assert_eq!(validate_name("Bob"), None);
}

#[test]
fn test_invalid_emails() {
    for email in [
        "not-an-email",
        "",
        "@example.com",
        "a@",
        "a@example",
        "a@@example.com",
        "a b@example.com",
        "a@exa mple.com",
        "a@-example.com",
        "a@example.c",
        "a@example..com",
        ".a@example.com",
        "a.@example.com",
        "a@b.12",
        "a@example.c0m",
        "é@x.com",
        "a@exämple.com",
        "a\"b@example.com",
        "  padded@example.com  ",
    ] {
        assert_eq!(validate_email(email), Some(EMAIL_INVALID), "{email:?} should be rejected");
    }
}

#[test]
fn test_valid_emails() {
    for email in [
        "a@example.com",
        "jean.dupont@mail.example.fr",
        "x+tag@sub-domain.example.org",
        "o'brien@example.ie",
        "under_score-@example.com",
    ] {
        assert_eq!(validate_email(email), None, "{email:?} should be accepted");
    }
}

#[test]
fn test_choice_accepts_values_not_labels() {
    assert_eq!(validate_choice(choices::BUILDINGS, "entry-b", BUILDING_REQUIRED), None);
    assert_eq!(
        validate_choice(choices::BUILDINGS, "Entrée B", BUILDING_REQUIRED),
        Some(BUILDING_REQUIRED)
    );
    assert_eq!(
        validate_choice(choices::STATUSES, "landlord", STATUS_REQUIRED),
        Some(STATUS_REQUIRED)
    );
}

#[test]
fn test_labels_map_to_values() {
    assert_eq!(choices::label_for(choices::BUILDINGS, "entry-b"), Some("Entrée B"));
    assert_eq!(choices::label_for(choices::STATUSES, "tenant"), Some("Locataire"));
    assert_eq!(choices::label_for(choices::WILLING_TO_CHANGE, "undecided"), Some("Indécis"));
    assert_eq!(choices::label_for(choices::BUILDINGS, "entry-z"), None);
}

#[test]
fn test_checkbox_coercion() {
    assert!(!parse_checkbox(None));
    assert!(!parse_checkbox(Some("")));
    assert!(!parse_checkbox(Some("false")));
    assert!(!parse_checkbox(Some("OFF")));
    assert!(!parse_checkbox(Some("0")));
    assert!(parse_checkbox(Some("true")));
    assert!(parse_checkbox(Some("on")));
    assert!(parse_checkbox(Some("1")));
}

#[test]
fn test_to_new_opinion_keeps_payload() {
    let new = to_new_opinion(&valid_form()).unwrap();
    assert_eq!(new, valid_new_opinion());
}

#[test]
fn test_to_new_opinion_stores_values_as_submitted() {
    let mut form = valid_form();
    form.name = "  Alice  ".to_string();
    form.is_anonymous = Some("on".to_string());
    form.building = "entry-b".to_string();
    form.message = " Trop de charges. ".to_string();

    let new = validate::to_new_opinion(&form).unwrap();
    assert_eq!(new.name, "  Alice  ");
    assert!(new.is_anonymous);
    assert_eq!(new.building, "entry-b");
    assert_eq!(new.message.as_deref(), Some(" Trop de charges. "));
}

#[test]
fn test_empty_message_is_kept_as_empty_string() {
    let new = to_new_opinion(&valid_form()).unwrap();
    assert_eq!(new.message, Some(String::new()));
}
