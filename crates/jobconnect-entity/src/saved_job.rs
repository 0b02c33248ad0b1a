//! Saved (bookmarked) job entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job bookmarked by a job seeker.
///
/// One row per (jobseeker, job) pair, enforced by a unique constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedJob {
    /// Unique row identifier.
    pub id: Uuid,
    /// The bookmarking job seeker.
    pub jobseeker_id: Uuid,
    /// The bookmarked job.
    pub job_id: Uuid,
    /// When the job was saved.
    pub created_at: DateTime<Utc>,
}
