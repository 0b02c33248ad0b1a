//! Job application entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ApplicationStatus;

/// An application submitted by a job seeker for a posting.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    /// Unique application identifier.
    pub id: Uuid,
    /// The job applied to.
    pub job_id: Uuid,
    /// The applying job seeker.
    pub jobseeker_id: Uuid,
    /// Stored resume filename snapshot taken at application time.
    pub resume: Option<String>,
    /// Cover letter text.
    pub cover_letter: String,
    /// Review status.
    pub status: ApplicationStatus,
    /// When the application was submitted.
    pub created_at: DateTime<Utc>,
    /// When the application was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to submit an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewApplication {
    /// The job applied to.
    pub job_id: Uuid,
    /// The applying job seeker.
    pub jobseeker_id: Uuid,
    /// Resume filename snapshot.
    pub resume: Option<String>,
    /// Cover letter text.
    pub cover_letter: String,
}

/// An application joined with its job and company, for the applicant's view.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationWithJob {
    /// The application.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub application: Application,
    /// Title of the job applied to.
    pub job_title: String,
    /// Status of the job posting.
    pub job_status: crate::job::JobStatus,
    /// Posting company name.
    pub company_name: String,
    /// Posting company logo filename.
    pub company_logo: Option<String>,
}

/// An application joined with job and applicant info, for the employer's view.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationDetail {
    /// The application.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub application: Application,
    /// Title of the job applied to.
    pub job_title: String,
    /// Employer owning the job.
    pub employer_id: Uuid,
    /// Applicant first name.
    pub first_name: String,
    /// Applicant last name.
    pub last_name: String,
    /// Applicant email.
    pub email: String,
    /// Applicant headline.
    pub headline: Option<String>,
    /// Applicant location.
    pub applicant_location: Option<String>,
    /// Applicant phone number.
    pub phone: Option<String>,
}
