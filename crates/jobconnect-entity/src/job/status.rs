//! Job posting status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Published and accepting applications.
    Active,
    /// Position was filled.
    Filled,
    /// Closed by the employer without being filled.
    Closed,
    /// Saved but not yet published.
    Draft,
}

impl JobStatus {
    /// Check if the posting accepts applications.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Filled => "filled",
            Self::Closed => "closed",
            Self::Draft => "draft",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = jobconnect_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "filled" => Ok(Self::Filled),
            "closed" => Ok(Self::Closed),
            "draft" => Ok(Self::Draft),
            _ => Err(jobconnect_core::AppError::validation(format!(
                "Invalid job status: '{s}'. Expected one of: active, filled, closed, draft"
            ))),
        }
    }
}
