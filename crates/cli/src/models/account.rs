//! Account document type.
//!
//! This is the shape of the documents in the `users` collection. Field names
//! are camelCase on the wire to stay compatible with the documents the
//! application writes.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use marlin_core::{AccountRole, AccountStatus, Email};

/// An account document.
///
/// The bootstrap workflow looks accounts up by `email` only; the store's own
/// `_id` is never consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Display name.
    pub name: String,
    /// Email address; the sole lookup key.
    pub email: Email,
    /// Argon2id PHC hash of the password. Never the plaintext.
    pub password_hash: String,
    /// Account role.
    pub role: AccountRole,
    /// Account lifecycle status.
    pub status: AccountStatus,
    /// When the account was created. Absent on documents that predate
    /// timestamp tracking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    /// When the account was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl Account {
    /// Build a fresh active admin account.
    #[must_use]
    pub fn admin(name: impl Into<String>, email: Email, password_hash: String) -> Self {
        let now = DateTime::now();
        Self {
            name: name.into(),
            email,
            password_hash,
            role: AccountRole::Admin,
            status: AccountStatus::Active,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
