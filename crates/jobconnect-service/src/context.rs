//! Request context carrying the authenticated account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jobconnect_core::error::AppError;
use jobconnect_entity::account::AccountType;

/// Context for the current authenticated request.
///
/// Extracted from the bearer token and passed into service methods so
/// that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated account's ID.
    pub account_id: Uuid,
    /// Which account table the principal lives in.
    pub account_type: AccountType,
    /// Login email (convenience field from JWT claims).
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(account_id: Uuid, account_type: AccountType, email: String) -> Self {
        Self {
            account_id,
            account_type,
            email,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the principal is an employer.
    pub fn is_employer(&self) -> bool {
        self.account_type.is_employer()
    }

    /// Returns whether the principal is a job seeker.
    pub fn is_jobseeker(&self) -> bool {
        self.account_type.is_jobseeker()
    }

    /// Errors unless the principal is an employer.
    pub fn require_employer(&self) -> Result<(), AppError> {
        if self.is_employer() {
            Ok(())
        } else {
            Err(AppError::authorization(
                "Access denied. Employer account required.",
            ))
        }
    }

    /// Errors unless the principal is a job seeker.
    pub fn require_jobseeker(&self) -> Result<(), AppError> {
        if self.is_jobseeker() {
            Ok(())
        } else {
            Err(AppError::authorization(
                "Access denied. Job seeker account required.",
            ))
        }
    }
}
