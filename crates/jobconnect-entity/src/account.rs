//! Account type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two kinds of accounts on the platform.
///
/// Employers and job seekers live in separate tables; this enum identifies
/// which table an authenticated principal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Posts jobs and reviews applications.
    Employer,
    /// Browses jobs, saves them, and applies.
    Jobseeker,
}

impl AccountType {
    /// Return the account type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employer => "employer",
            Self::Jobseeker => "jobseeker",
        }
    }

    /// Check if this is an employer account.
    pub fn is_employer(&self) -> bool {
        matches!(self, Self::Employer)
    }

    /// Check if this is a job seeker account.
    pub fn is_jobseeker(&self) -> bool {
        matches!(self, Self::Jobseeker)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = jobconnect_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "employer" => Ok(Self::Employer),
            "jobseeker" => Ok(Self::Jobseeker),
            _ => Err(jobconnect_core::AppError::validation(format!(
                "Invalid account type: '{s}'. Expected 'employer' or 'jobseeker'"
            ))),
        }
    }
}
