use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::dto::ContactInput;

/// A contact-form submission. Immutable after creation except for deletion;
/// `created_at` is stamped by the storage layer, never by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Contact {
    pub fn new(id: i64, input: ContactInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            subject: input.subject,
            message: input.message,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
