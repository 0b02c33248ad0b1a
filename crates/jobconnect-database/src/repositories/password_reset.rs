//! Password reset token repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use jobconnect_core::error::{AppError, ErrorKind};
use jobconnect_core::result::AppResult;
use jobconnect_entity::account::AccountType;
use jobconnect_entity::password_reset::PasswordReset;

/// Repository for password reset tokens.
#[derive(Debug, Clone)]
pub struct PasswordResetRepository {
    pool: PgPool,
}

impl PasswordResetRepository {
    /// Create a new password reset repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Delete any existing reset tokens for an email.
    pub async fn delete_for_email(&self, email: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM password_resets WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete reset tokens", e)
            })?;
        Ok(())
    }

    /// Issue a new reset token row.
    pub async fn create(
        &self,
        email: &str,
        account_type: AccountType,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<PasswordReset> {
        sqlx::query_as::<_, PasswordReset>(
            "INSERT INTO password_resets (email, account_type, token, expires_at) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(email)
        .bind(account_type)
        .bind(token)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create reset token", e))
    }

    /// Find an unexpired token row matching both token and email.
    pub async fn find_valid(&self, token: &str, email: &str) -> AppResult<Option<PasswordReset>> {
        sqlx::query_as::<_, PasswordReset>(
            "SELECT * FROM password_resets \
             WHERE token = $1 AND LOWER(email) = LOWER($2) AND expires_at > NOW()",
        )
        .bind(token)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to look up reset token", e))
    }

    /// Delete a used token.
    pub async fn delete_by_token(&self, token: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM password_resets WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete reset token", e)
            })?;
        Ok(())
    }
}
