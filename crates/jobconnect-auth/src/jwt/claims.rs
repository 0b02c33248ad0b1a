//! JWT claims structure used in access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jobconnect_entity::account::AccountType;

/// JWT claims payload embedded in every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the account ID.
    pub sub: Uuid,
    /// Which account table the subject lives in.
    pub account_type: AccountType,
    /// Login email for convenience.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// JWT ID.
    pub jti: Uuid,
    /// Token type: "access" or "refresh".
    pub token_type: TokenType,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived access token for API requests.
    Access,
    /// Long-lived refresh token for obtaining new access tokens.
    Refresh,
}

impl Claims {
    /// Returns the account ID from the subject claim.
    pub fn account_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
