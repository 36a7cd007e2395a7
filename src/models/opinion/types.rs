use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored opinion row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Opinion {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_anonymous: bool,
    pub building: String,
    pub status: String,
    pub willing_to_change: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload: an opinion without the storage-generated `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOpinion {
    pub name: String,
    pub email: String,
    pub is_anonymous: bool,
    pub building: String,
    pub status: String,
    pub willing_to_change: String,
    pub message: Option<String>,
}

/// Raw form input. Every field defaults to empty so that a missing field
/// surfaces as a validation message instead of a 400 from the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OpinionForm {
    pub name: String,
    pub email: String,
    pub is_anonymous: Option<String>,
    pub building: String,
    pub status: String,
    pub willing_to_change: String,
    pub message: String,
    pub csrf_token: String,
}

/// A single failed rule, keyed by form field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}
