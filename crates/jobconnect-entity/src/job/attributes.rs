//! Job attribute enumerations and fixed taxonomy lists.
//!
//! Employment type and salary period are database enums. Categories,
//! experience levels, and education levels are open text columns validated
//! against the fixed lists below.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Employment type of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "employment_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Standard full-time employment.
    FullTime,
    /// Part-time employment.
    PartTime,
    /// Fixed-term contract.
    Contract,
    /// Temporary position.
    Temporary,
    /// Internship.
    Internship,
    /// Fully remote position.
    Remote,
    /// Freelance engagement.
    Freelance,
}

impl EmploymentType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
            Self::Contract => "contract",
            Self::Temporary => "temporary",
            Self::Internship => "internship",
            Self::Remote => "remote",
            Self::Freelance => "freelance",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmploymentType {
    type Err = jobconnect_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "full_time" => Ok(Self::FullTime),
            "part_time" => Ok(Self::PartTime),
            "contract" => Ok(Self::Contract),
            "temporary" => Ok(Self::Temporary),
            "internship" => Ok(Self::Internship),
            "remote" => Ok(Self::Remote),
            "freelance" => Ok(Self::Freelance),
            _ => Err(jobconnect_core::AppError::validation(format!(
                "Invalid employment type: '{s}'"
            ))),
        }
    }
}

/// Period a salary range is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "salary_period", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SalaryPeriod {
    /// Per hour.
    Hourly,
    /// Per day.
    Daily,
    /// Per week.
    Weekly,
    /// Per month.
    Monthly,
    /// Per year.
    Yearly,
}

impl SalaryPeriod {
    /// Return the period as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for SalaryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Job categories available for posting and filtering.
pub const JOB_CATEGORIES: &[&str] = &[
    "technology",
    "healthcare",
    "education",
    "finance",
    "marketing",
    "engineering",
    "creative",
    "hospitality",
    "legal",
    "administrative",
    "retail",
    "manufacturing",
    "transport",
    "hr",
    "other",
];

/// Experience levels available for posting and filtering.
pub const EXPERIENCE_LEVELS: &[&str] = &[
    "intermediate",
    "experienced",
    "manager",
    "director",
    "executive",
];

/// Education levels available for posting.
pub const EDUCATION_LEVELS: &[&str] = &[
    "high_school",
    "associate",
    "bachelor",
    "master",
    "doctorate",
    "professional",
    "any",
];

/// Check whether a category value is one of the known categories.
pub fn is_valid_category(value: &str) -> bool {
    JOB_CATEGORIES.contains(&value)
}

/// Check whether an experience level is one of the known levels.
pub fn is_valid_experience_level(value: &str) -> bool {
    EXPERIENCE_LEVELS.contains(&value)
}

/// Check whether an education level is one of the known levels.
pub fn is_valid_education_level(value: &str) -> bool {
    EDUCATION_LEVELS.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employment_type_from_str() {
        assert_eq!(
            "full_time".parse::<EmploymentType>().unwrap(),
            EmploymentType::FullTime
        );
        // Hyphenated form accepted for compatibility with older clients.
        assert_eq!(
            "full-time".parse::<EmploymentType>().unwrap(),
            EmploymentType::FullTime
        );
        assert!("gig".parse::<EmploymentType>().is_err());
    }

    #[test]
    fn test_taxonomy_lists() {
        assert!(is_valid_category("technology"));
        assert!(!is_valid_category("astrology"));
        assert!(is_valid_experience_level("manager"));
        assert!(is_valid_education_level("any"));
        assert!(!is_valid_education_level("kindergarten"));
    }
}
