//! Saved job repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use jobconnect_core::error::{AppError, ErrorKind};
use jobconnect_core::result::AppResult;
use jobconnect_core::types::pagination::{PageRequest, PageResponse};
use jobconnect_entity::job::JobWithCompany;
use jobconnect_entity::saved_job::SavedJob;

/// Repository for job bookmarks.
#[derive(Debug, Clone)]
pub struct SavedJobRepository {
    pool: PgPool,
}

impl SavedJobRepository {
    /// Create a new saved job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Bookmark a job for a seeker.
    pub async fn save(&self, jobseeker_id: Uuid, job_id: Uuid) -> AppResult<SavedJob> {
        sqlx::query_as::<_, SavedJob>(
            "INSERT INTO saved_jobs (jobseeker_id, job_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(jobseeker_id)
        .bind(job_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("saved_jobs_jobseeker_job_key") =>
            {
                AppError::conflict("Job is already saved".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to save job", e),
        })
    }

    /// Remove a bookmark.
    pub async fn remove(&self, jobseeker_id: Uuid, job_id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM saved_jobs WHERE jobseeker_id = $1 AND job_id = $2")
                .bind(jobseeker_id)
                .bind(job_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to remove saved job", e)
                })?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether a seeker has bookmarked a job.
    pub async fn exists(&self, jobseeker_id: Uuid, job_id: Uuid) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM saved_jobs WHERE jobseeker_id = $1 AND job_id = $2",
        )
        .bind(jobseeker_id)
        .bind(job_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check saved job", e)
        })?;
        Ok(count > 0)
    }

    /// List one seeker's bookmarked jobs with company info, newest first.
    pub async fn find_by_jobseeker(
        &self,
        jobseeker_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<JobWithCompany>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM saved_jobs WHERE jobseeker_id = $1")
                .bind(jobseeker_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count saved jobs", e)
                })?;

        let jobs = sqlx::query_as::<_, JobWithCompany>(
            "SELECT j.*, e.company_name, e.logo AS company_logo \
             FROM saved_jobs sj \
             JOIN jobs j ON sj.job_id = j.id \
             JOIN employers e ON j.employer_id = e.id \
             WHERE sj.jobseeker_id = $1 \
             ORDER BY sj.created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(jobseeker_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list saved jobs", e))?;

        Ok(PageResponse::new(
            jobs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count one seeker's bookmarks.
    pub async fn count_for_jobseeker(&self, jobseeker_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM saved_jobs WHERE jobseeker_id = $1")
            .bind(jobseeker_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count saved jobs", e)
            })
    }
}
