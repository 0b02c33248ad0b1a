//! JWT token creation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use jobconnect_core::config::auth::AuthConfig;
use jobconnect_core::error::AppError;
use jobconnect_entity::account::AccountType;

use super::claims::{Claims, TokenType};

/// Creates signed JWT access and refresh tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in hours.
    refresh_ttl_hours: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_hours", &self.refresh_ttl_hours)
            .finish()
    }
}

/// Result of a successful token pair generation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: chrono::DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: chrono::DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl_minutes: config.jwt_access_ttl_minutes as i64,
            refresh_ttl_hours: config.jwt_refresh_ttl_hours as i64,
        }
    }

    /// Generates a new access + refresh token pair for the given account.
    pub fn generate_token_pair(
        &self,
        account_id: Uuid,
        account_type: AccountType,
        email: &str,
    ) -> Result<TokenPair, AppError> {
        let now = Utc::now();
        let access_exp = now + chrono::Duration::minutes(self.access_ttl_minutes);
        let refresh_exp = now + chrono::Duration::hours(self.refresh_ttl_hours);

        let access_claims = Claims {
            sub: account_id,
            account_type,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: access_exp.timestamp(),
            jti: Uuid::new_v4(),
            token_type: TokenType::Access,
        };

        let refresh_claims = Claims {
            sub: account_id,
            account_type,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: refresh_exp.timestamp(),
            jti: Uuid::new_v4(),
            token_type: TokenType::Refresh,
        };

        let access_token = encode(&Header::default(), &access_claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        let refresh_token = encode(&Header::default(), &refresh_claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode refresh token: {e}")))?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at: access_exp,
            refresh_expires_at: refresh_exp,
        })
    }
}
