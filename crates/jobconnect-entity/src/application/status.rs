//! Application status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status of a job application.
///
/// This is a flat workflow: the employer may set any status at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Submitted, not yet looked at.
    Pending,
    /// Reviewed by the employer.
    Reviewed,
    /// Shortlisted for further consideration.
    Shortlisted,
    /// Candidate was interviewed.
    Interviewed,
    /// An offer was extended.
    Offered,
    /// Candidate was hired.
    Hired,
    /// Application was rejected.
    Rejected,
}

impl ApplicationStatus {
    /// Check if the application reached a terminal outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Hired | Self::Rejected)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Shortlisted => "shortlisted",
            Self::Interviewed => "interviewed",
            Self::Offered => "offered",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
        }
    }

    /// All statuses, in workflow order.
    pub fn all() -> &'static [ApplicationStatus] {
        &[
            Self::Pending,
            Self::Reviewed,
            Self::Shortlisted,
            Self::Interviewed,
            Self::Offered,
            Self::Hired,
            Self::Rejected,
        ]
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = jobconnect_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "reviewed" => Ok(Self::Reviewed),
            "shortlisted" => Ok(Self::Shortlisted),
            "interviewed" => Ok(Self::Interviewed),
            "offered" => Ok(Self::Offered),
            "hired" => Ok(Self::Hired),
            "rejected" => Ok(Self::Rejected),
            _ => Err(jobconnect_core::AppError::validation(format!(
                "Invalid application status: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(ApplicationStatus::Hired.is_terminal());
        assert!(ApplicationStatus::Rejected.is_terminal());
        assert!(!ApplicationStatus::Offered.is_terminal());
        assert!(!ApplicationStatus::Pending.is_terminal());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "shortlisted".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::Shortlisted
        );
        assert!("ghosted".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn test_all_covers_every_status() {
        assert_eq!(ApplicationStatus::all().len(), 7);
    }
}
