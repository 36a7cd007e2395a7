use actix_web::http::StatusCode;
use askama::Template;

use crate::models::opinion::choices::{self, Choice};
use crate::models::opinion::validate;
use crate::models::opinion::{FieldError, OpinionForm};
use super::PageContext;

/// Where the form is in its lifecycle for this response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Invalid,
    /// Validation passed but the write failed; values are kept for a retry.
    Failed,
    Submitted,
}

impl FormState {
    pub fn status_code(self) -> StatusCode {
        match self {
            FormState::Editing | FormState::Submitted => StatusCode::OK,
            FormState::Invalid => StatusCode::UNPROCESSABLE_ENTITY,
            FormState::Failed => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FormState::Failed)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, FormState::Submitted)
    }
}

/// Per-field messages, looked up by the template.
#[derive(Debug, Default)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub building: Option<&'static str>,
    pub status: Option<&'static str>,
    pub willing_to_change: Option<&'static str>,
}

impl From<&[FieldError]> for FormErrors {
    fn from(errors: &[FieldError]) -> Self {
        let mut out = FormErrors::default();
        for e in errors {
            let slot = match e.field {
                "name" => &mut out.name,
                "email" => &mut out.email,
                "building" => &mut out.building,
                "status" => &mut out.status,
                "willing_to_change" => &mut out.willing_to_change,
                _ => continue,
            };
            slot.get_or_insert(e.message);
        }
        out
    }
}

pub struct PickerOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// A searchable picker: placeholder when nothing is selected, values submitted, labels shown.
pub struct Picker {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Label of the current value, shown on the picker in place of the placeholder.
    pub selected_label: Option<&'static str>,
    pub options: Vec<PickerOption>,
    pub error: Option<&'static str>,
}

impl Picker {
    fn new(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        table: &[Choice],
        current: &str,
        error: Option<&'static str>,
    ) -> Self {
        let options = table
            .iter()
            .map(|c| PickerOption { value: c.value, label: c.label, selected: c.value == current })
            .collect();
        let selected_label = choices::label_for(table, current);
        Self { name, label, placeholder, selected_label, options, error }
    }

    pub fn has_selection(&self) -> bool {
        self.selected_label.is_some()
    }
}

#[derive(Template)]
#[template(path = "opinion/page.html")]
pub struct OpinionPageTemplate {
    pub ctx: PageContext,
    pub state: FormState,
    /// Count shown in the results link; `None` hides the link (no opinions yet,
    /// or no count could ever be loaded).
    pub results_link: Option<i64>,
    pub name: String,
    pub email: String,
    pub is_anonymous: bool,
    pub message: String,
    pub building: Picker,
    pub status: Picker,
    pub willing_to_change: Picker,
    pub errors: FormErrors,
}

impl OpinionPageTemplate {
    pub fn new(
        ctx: PageContext,
        state: FormState,
        results_count: Option<i64>,
        form: &OpinionForm,
        errors: &[FieldError],
    ) -> Self {
        let errors = FormErrors::from(errors);
        Self {
            ctx,
            state,
            results_link: results_count.filter(|n| *n > 0),
            name: form.name.clone(),
            email: form.email.clone(),
            is_anonymous: validate::parse_checkbox(form.is_anonymous.as_deref()),
            message: form.message.clone(),
            building: Picker::new(
                "building",
                "Bâtiment",
                "Sélectionnez un bâtiment",
                choices::BUILDINGS,
                &form.building,
                errors.building,
            ),
            status: Picker::new(
                "status",
                "Statut",
                "Sélectionnez un statut",
                choices::STATUSES,
                &form.status,
                errors.status,
            ),
            willing_to_change: Picker::new(
                "willing_to_change",
                "Souhait de changer de Syndic",
                "Sélectionnez un choix",
                choices::WILLING_TO_CHANGE,
                &form.willing_to_change,
                errors.willing_to_change,
            ),
            errors,
        }
    }
}
