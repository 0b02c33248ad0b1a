//! Job seeker entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered job seeker account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobSeeker {
    /// Unique job seeker identifier.
    pub id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name (may be empty when the registration name had no surname).
    pub last_name: String,
    /// Login email, unique across both account tables.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Professional headline.
    pub headline: Option<String>,
    /// Profile summary.
    pub summary: Option<String>,
    /// Current location.
    pub location: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Comma-separated skills list.
    pub skills: Option<String>,
    /// Work experience description.
    pub experience: Option<String>,
    /// Education description.
    pub education: Option<String>,
    /// Stored filename of the profile photo.
    pub profile_image: Option<String>,
    /// Stored filename of the current resume.
    pub resume: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl JobSeeker {
    /// Full display name.
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Data required to create a new job seeker account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobSeeker {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Login email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// Data for updating a job seeker's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateJobSeekerProfile {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New professional headline.
    pub headline: Option<String>,
    /// New profile summary.
    pub summary: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New skills list.
    pub skills: Option<String>,
    /// New experience description.
    pub experience: Option<String>,
    /// New education description.
    pub education: Option<String>,
}
