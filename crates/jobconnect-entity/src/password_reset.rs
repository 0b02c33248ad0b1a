//! Password reset token entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::account::AccountType;

/// A single-use password reset token.
///
/// At most one active token exists per email; issuing a new one replaces
/// any prior row. Tokens expire one hour after issue and are deleted on use.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PasswordReset {
    /// Unique row identifier.
    pub id: Uuid,
    /// Email the reset was requested for.
    pub email: String,
    /// Which account table the email belongs to.
    pub account_type: AccountType,
    /// Random reset token (64 hex chars).
    pub token: String,
    /// When the token was issued.
    pub created_at: DateTime<Utc>,
    /// When the token stops being usable.
    pub expires_at: DateTime<Utc>,
}

impl PasswordReset {
    /// Check if the token has expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
