use serde::{Deserialize, Serialize};

/// A stored account. No route creates, updates, or lists users; the only
/// creation path is startup seeding, which must leave at least one admin so
/// the admin routes are reachable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
}

/// Storage-level insert shape for a user; the password arrives already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}
