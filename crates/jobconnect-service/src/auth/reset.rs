//! Password reset flows: request a token, redeem it.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};

use jobconnect_auth::password::{PasswordHasher, PasswordValidator};
use jobconnect_auth::reset::generate_reset_token;
use jobconnect_core::error::AppError;
use jobconnect_database::repositories::employer::EmployerRepository;
use jobconnect_database::repositories::jobseeker::JobSeekerRepository;
use jobconnect_database::repositories::password_reset::PasswordResetRepository;
use jobconnect_entity::account::AccountType;

/// Handles forgot-password token issue and redemption.
#[derive(Debug, Clone)]
pub struct PasswordResetService {
    /// Employer repository.
    employer_repo: Arc<EmployerRepository>,
    /// Job seeker repository.
    jobseeker_repo: Arc<JobSeekerRepository>,
    /// Reset token repository.
    reset_repo: Arc<PasswordResetRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// Token lifetime in minutes.
    token_ttl_minutes: i64,
}

impl PasswordResetService {
    /// Creates a new password reset service.
    pub fn new(
        employer_repo: Arc<EmployerRepository>,
        jobseeker_repo: Arc<JobSeekerRepository>,
        reset_repo: Arc<PasswordResetRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        token_ttl_minutes: i64,
    ) -> Self {
        Self {
            employer_repo,
            jobseeker_repo,
            reset_repo,
            hasher,
            validator,
            token_ttl_minutes,
        }
    }

    /// Issues a reset token for the email if an account exists.
    ///
    /// Always succeeds from the caller's perspective so the endpoint cannot
    /// be used to enumerate registered emails. Any previous token for the
    /// email is replaced.
    pub async fn request_reset(&self, email: &str) -> Result<(), AppError> {
        let email = email.trim().to_lowercase();

        let account_type = if self.employer_repo.find_by_email(&email).await?.is_some() {
            Some(AccountType::Employer)
        } else if self.jobseeker_repo.find_by_email(&email).await?.is_some() {
            Some(AccountType::Jobseeker)
        } else {
            None
        };

        let Some(account_type) = account_type else {
            warn!(email = %email, "Password reset requested for unknown email");
            return Ok(());
        };

        self.reset_repo.delete_for_email(&email).await?;

        let token = generate_reset_token();
        let expires_at = Utc::now() + Duration::minutes(self.token_ttl_minutes);
        self.reset_repo
            .create(&email, account_type, &token, expires_at)
            .await?;

        // No mailer is wired up; the token is surfaced through the log for
        // the operator to deliver out of band.
        info!(email = %email, token = %token, "Password reset token issued");

        Ok(())
    }

    /// Redeems a reset token, setting a new password on the matching account.
    pub async fn reset_password(
        &self,
        token: &str,
        email: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<(), AppError> {
        if new_password != confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }
        self.validator.validate(new_password)?;

        let reset = self
            .reset_repo
            .find_valid(token, email)
            .await?
            .ok_or_else(|| {
                AppError::validation(
                    "Invalid or expired token. Please request a new password reset link.",
                )
            })?;

        let password_hash = self.hasher.hash_password(new_password)?;

        match reset.account_type {
            AccountType::Employer => {
                self.employer_repo
                    .update_password_by_email(&reset.email, &password_hash)
                    .await?
            }
            AccountType::Jobseeker => {
                self.jobseeker_repo
                    .update_password_by_email(&reset.email, &password_hash)
                    .await?
            }
        }

        self.reset_repo.delete_by_token(token).await?;

        info!(email = %reset.email, "Password reset completed");
        Ok(())
    }
}
