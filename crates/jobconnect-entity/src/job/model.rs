//! Job posting entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::attributes::{EmploymentType, SalaryPeriod};
use super::status::JobStatus;

/// A job posting.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    /// Unique job identifier.
    pub id: Uuid,
    /// Owning employer.
    pub employer_id: Uuid,
    /// Job title.
    pub title: String,
    /// Job description.
    pub description: String,
    /// Responsibilities section.
    pub responsibilities: Option<String>,
    /// Requirements section.
    pub requirements: Option<String>,
    /// Benefits section.
    pub benefits: Option<String>,
    /// Work location.
    pub location: Option<String>,
    /// Lower bound of the salary range.
    pub salary_min: Option<f64>,
    /// Upper bound of the salary range.
    pub salary_max: Option<f64>,
    /// Period the salary range is expressed in.
    pub salary_period: Option<SalaryPeriod>,
    /// Employment type.
    pub job_type: EmploymentType,
    /// Category slug from the fixed taxonomy.
    pub category: String,
    /// Experience level slug.
    pub experience_level: Option<String>,
    /// Education level slug.
    pub education_level: Option<String>,
    /// Posting lifecycle status.
    pub status: JobStatus,
    /// Whether the posting is featured in browse results.
    pub featured: bool,
    /// Number of times the detail page was viewed.
    pub views: i64,
    /// Number of applications received.
    pub application_count: i64,
    /// When the posting was created.
    pub created_at: DateTime<Utc>,
    /// When the posting was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the posting stops accepting applications.
    pub expires_at: DateTime<Utc>,
}

impl Job {
    /// Check if the posting currently accepts applications.
    pub fn is_accepting_applications(&self, now: DateTime<Utc>) -> bool {
        self.status.is_open() && self.expires_at > now
    }
}

/// Data required to create a job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJob {
    /// Owning employer.
    pub employer_id: Uuid,
    /// Job title.
    pub title: String,
    /// Job description.
    pub description: String,
    /// Responsibilities section.
    pub responsibilities: Option<String>,
    /// Requirements section.
    pub requirements: Option<String>,
    /// Benefits section.
    pub benefits: Option<String>,
    /// Work location.
    pub location: Option<String>,
    /// Lower bound of the salary range.
    pub salary_min: Option<f64>,
    /// Upper bound of the salary range.
    pub salary_max: Option<f64>,
    /// Salary period.
    pub salary_period: Option<SalaryPeriod>,
    /// Employment type.
    pub job_type: EmploymentType,
    /// Category slug.
    pub category: String,
    /// Experience level slug.
    pub experience_level: Option<String>,
    /// Education level slug.
    pub education_level: Option<String>,
    /// Initial status (active, or draft when saved unpublished).
    pub status: JobStatus,
    /// Featured flag.
    pub featured: bool,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

/// Data for a partial update of a job posting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateJob {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New responsibilities section.
    pub responsibilities: Option<String>,
    /// New requirements section.
    pub requirements: Option<String>,
    /// New benefits section.
    pub benefits: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New salary lower bound.
    pub salary_min: Option<f64>,
    /// New salary upper bound.
    pub salary_max: Option<f64>,
    /// New salary period.
    pub salary_period: Option<SalaryPeriod>,
    /// New employment type.
    pub job_type: Option<EmploymentType>,
    /// New category slug.
    pub category: Option<String>,
    /// New experience level slug.
    pub experience_level: Option<String>,
    /// New education level slug.
    pub education_level: Option<String>,
    /// New featured flag.
    pub featured: Option<bool>,
}

/// A job joined with the posting company's public fields.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobWithCompany {
    /// The job posting.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub job: Job,
    /// Posting company name.
    pub company_name: String,
    /// Posting company logo filename.
    pub company_logo: Option<String>,
}
