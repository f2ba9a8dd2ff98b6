//! User entity representing a registered VoiceInvoice account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique across the system
    pub email: String,

    /// bcrypt hash of the password; never serialized to clients
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Whether the email address has been verified
    pub is_verified: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new unverified user
    pub fn new(email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the email address as verified
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }
}
