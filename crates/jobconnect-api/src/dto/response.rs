//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jobconnect_auth::jwt::TokenPair;
use jobconnect_service::auth::{AccountSummary, LoginResult};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Account summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    /// Account ID.
    pub id: Uuid,
    /// Account kind.
    pub account_type: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<AccountSummary> for AccountResponse {
    fn from(summary: AccountSummary) -> Self {
        Self {
            id: summary.id,
            account_type: summary.account_type.to_string(),
            name: summary.name,
            email: summary.email,
            created_at: summary.created_at,
        }
    }
}

/// Login / registration / refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
    /// Account info.
    pub account: AccountResponse,
}

impl AuthResponse {
    /// Builds the response from a service login result.
    pub fn from_result(result: LoginResult) -> Self {
        let LoginResult { account, tokens } = result;
        let TokenPair {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
        } = tokens;
        Self {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
            account: account.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
    /// Document storage status.
    pub storage: String,
}

/// Fixed taxonomy lists served to posting and filter forms.
#[derive(Debug, Clone, Serialize)]
pub struct JobAttributesResponse {
    /// Category slugs.
    pub categories: Vec<&'static str>,
    /// Employment type slugs.
    pub employment_types: Vec<&'static str>,
    /// Experience level slugs.
    pub experience_levels: Vec<&'static str>,
    /// Education level slugs.
    pub education_levels: Vec<&'static str>,
    /// Salary period slugs.
    pub salary_periods: Vec<&'static str>,
    /// Application status slugs.
    pub application_statuses: Vec<&'static str>,
}
