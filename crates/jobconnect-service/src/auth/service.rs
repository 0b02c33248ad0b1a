//! Registration, login, token refresh, and password change.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use jobconnect_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use jobconnect_auth::password::{PasswordHasher, PasswordValidator};
use jobconnect_core::error::AppError;
use jobconnect_database::repositories::employer::EmployerRepository;
use jobconnect_database::repositories::jobseeker::JobSeekerRepository;
use jobconnect_entity::account::AccountType;
use jobconnect_entity::employer::CreateEmployer;
use jobconnect_entity::jobseeker::CreateJobSeeker;

use crate::context::RequestContext;

/// Handles account registration, login, and token refresh.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Employer repository.
    employer_repo: Arc<EmployerRepository>,
    /// Job seeker repository.
    jobseeker_repo: Arc<JobSeekerRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// JWT encoder.
    encoder: Arc<JwtEncoder>,
    /// JWT decoder.
    decoder: Arc<JwtDecoder>,
}

/// Data for a new account registration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterData {
    /// Company name for employers, "First Last" for job seekers.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Repeated password.
    pub confirm_password: String,
    /// Which kind of account to create.
    pub account_type: AccountType,
}

/// Unified public view over either account kind.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AccountSummary {
    /// Account ID.
    pub id: uuid::Uuid,
    /// Account kind.
    pub account_type: AccountType,
    /// Display name (company name or full name).
    pub name: String,
    /// Login email.
    pub email: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Result of a successful login or registration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginResult {
    /// The authenticated account.
    pub account: AccountSummary,
    /// Fresh token pair.
    pub tokens: TokenPair,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        employer_repo: Arc<EmployerRepository>,
        jobseeker_repo: Arc<JobSeekerRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            employer_repo,
            jobseeker_repo,
            hasher,
            validator,
            encoder,
            decoder,
        }
    }

    /// Registers a new account and logs it in.
    pub async fn register(&self, data: RegisterData) -> Result<LoginResult, AppError> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }

        let email = data.email.trim().to_lowercase();
        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }

        if data.password != data.confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }
        self.validator.validate(&data.password)?;

        // Email must be unique across both account tables.
        if self.email_in_use(&email).await? {
            return Err(AppError::conflict(
                "Email already in use. Please use a different email or login to your existing account.",
            ));
        }

        let password_hash = self.hasher.hash_password(&data.password)?;

        let account = match data.account_type {
            AccountType::Employer => {
                let employer = self
                    .employer_repo
                    .create(&CreateEmployer {
                        company_name: name.to_string(),
                        email: email.clone(),
                        password_hash,
                    })
                    .await?;
                AccountSummary {
                    id: employer.id,
                    account_type: AccountType::Employer,
                    name: employer.company_name,
                    email: employer.email,
                    created_at: employer.created_at,
                }
            }
            AccountType::Jobseeker => {
                let (first_name, last_name) = split_name(name);
                let seeker = self
                    .jobseeker_repo
                    .create(&CreateJobSeeker {
                        first_name,
                        last_name,
                        email: email.clone(),
                        password_hash,
                    })
                    .await?;
                AccountSummary {
                    id: seeker.id,
                    account_type: AccountType::Jobseeker,
                    name: seeker.full_name(),
                    email: seeker.email,
                    created_at: seeker.created_at,
                }
            }
        };

        let tokens =
            self.encoder
                .generate_token_pair(account.id, account.account_type, &account.email)?;

        info!(account_id = %account.id, account_type = %account.account_type, "Account registered");

        Ok(LoginResult { account, tokens })
    }

    /// Logs in with email and password.
    ///
    /// The email is looked up in the employers table first, then in the
    /// jobseekers table. Failures return a generic message so callers
    /// cannot distinguish a wrong password from an unknown email.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let account = self
            .lookup_account(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        let valid = self
            .hasher
            .verify_password(password, &account.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Invalid email or password"));
        }

        let tokens = self.encoder.generate_token_pair(
            account.summary.id,
            account.summary.account_type,
            &account.summary.email,
        )?;

        info!(account_id = %account.summary.id, "Login successful");

        Ok(LoginResult {
            account: account.summary,
            tokens,
        })
    }

    /// Exchanges a refresh token for a new token pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<LoginResult, AppError> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;

        // The account may have been deleted since the token was issued.
        let summary = self
            .summary_for(claims.account_id(), claims.account_type)
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))?;

        let tokens =
            self.encoder
                .generate_token_pair(summary.id, summary.account_type, &summary.email)?;

        Ok(LoginResult {
            account: summary,
            tokens,
        })
    }

    /// Returns the current account's summary.
    pub async fn me(&self, ctx: &RequestContext) -> Result<AccountSummary, AppError> {
        self.summary_for(ctx.account_id, ctx.account_type)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))
    }

    /// Changes the current account's password.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let password_hash = match ctx.account_type {
            AccountType::Employer => {
                self.employer_repo
                    .find_by_id(ctx.account_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Account not found"))?
                    .password_hash
            }
            AccountType::Jobseeker => {
                self.jobseeker_repo
                    .find_by_id(ctx.account_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Account not found"))?
                    .password_hash
            }
        };

        let valid = self.hasher.verify_password(current_password, &password_hash)?;
        if !valid {
            return Err(AppError::authentication("Current password is incorrect"));
        }

        self.validator.validate(new_password)?;
        self.validator
            .validate_not_same(current_password, new_password)?;

        let new_hash = self.hasher.hash_password(new_password)?;
        match ctx.account_type {
            AccountType::Employer => {
                self.employer_repo
                    .update_password(ctx.account_id, &new_hash)
                    .await?
            }
            AccountType::Jobseeker => {
                self.jobseeker_repo
                    .update_password(ctx.account_id, &new_hash)
                    .await?
            }
        }

        info!(account_id = %ctx.account_id, "Password changed");
        Ok(())
    }

    /// Checks both account tables for an existing email.
    async fn email_in_use(&self, email: &str) -> Result<bool, AppError> {
        Ok(self.employer_repo.find_by_email(email).await?.is_some()
            || self.jobseeker_repo.find_by_email(email).await?.is_some())
    }

    /// Looks up an account by email, employers first.
    async fn lookup_account(&self, email: &str) -> Result<Option<StoredAccount>, AppError> {
        if let Some(employer) = self.employer_repo.find_by_email(email).await? {
            return Ok(Some(StoredAccount {
                password_hash: employer.password_hash.clone(),
                summary: AccountSummary {
                    id: employer.id,
                    account_type: AccountType::Employer,
                    name: employer.company_name,
                    email: employer.email,
                    created_at: employer.created_at,
                },
            }));
        }

        if let Some(seeker) = self.jobseeker_repo.find_by_email(email).await? {
            return Ok(Some(StoredAccount {
                password_hash: seeker.password_hash.clone(),
                summary: AccountSummary {
                    id: seeker.id,
                    account_type: AccountType::Jobseeker,
                    name: seeker.full_name(),
                    email: seeker.email.clone(),
                    created_at: seeker.created_at,
                },
            }));
        }

        Ok(None)
    }

    /// Builds an account summary for a known ID and type.
    async fn summary_for(
        &self,
        account_id: uuid::Uuid,
        account_type: AccountType,
    ) -> Result<Option<AccountSummary>, AppError> {
        match account_type {
            AccountType::Employer => Ok(self.employer_repo.find_by_id(account_id).await?.map(
                |employer| AccountSummary {
                    id: employer.id,
                    account_type: AccountType::Employer,
                    name: employer.company_name,
                    email: employer.email,
                    created_at: employer.created_at,
                },
            )),
            AccountType::Jobseeker => Ok(self.jobseeker_repo.find_by_id(account_id).await?.map(
                |seeker| AccountSummary {
                    id: seeker.id,
                    account_type: AccountType::Jobseeker,
                    name: seeker.full_name(),
                    email: seeker.email.clone(),
                    created_at: seeker.created_at,
                },
            )),
        }
    }
}

/// An account row's credentials plus its public summary.
struct StoredAccount {
    password_hash: String,
    summary: AccountSummary,
}

/// Split a registration name into first and last on the first space.
fn split_name(name: &str) -> (String, String) {
    match name.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.trim().to_string()),
        None => (name.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_name() {
        assert_eq!(
            split_name("Ada Lovelace"),
            ("Ada".to_string(), "Lovelace".to_string())
        );
        assert_eq!(split_name("Cher"), ("Cher".to_string(), String::new()));
        assert_eq!(
            split_name("Mary Jane Watson"),
            ("Mary".to_string(), "Jane Watson".to_string())
        );
    }
}
