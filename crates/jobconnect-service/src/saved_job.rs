//! Saving and unsaving jobs (bookmarks).

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use jobconnect_core::error::AppError;
use jobconnect_core::types::pagination::{PageRequest, PageResponse};
use jobconnect_database::repositories::job::JobRepository;
use jobconnect_database::repositories::saved_job::SavedJobRepository;
use jobconnect_entity::job::JobWithCompany;
use jobconnect_entity::saved_job::SavedJob;

use crate::context::RequestContext;

/// Handles job bookmarks for job seekers.
#[derive(Debug, Clone)]
pub struct SavedJobService {
    /// Saved job repository.
    saved_job_repo: Arc<SavedJobRepository>,
    /// Job repository.
    job_repo: Arc<JobRepository>,
}

impl SavedJobService {
    /// Creates a new saved job service.
    pub fn new(saved_job_repo: Arc<SavedJobRepository>, job_repo: Arc<JobRepository>) -> Self {
        Self {
            saved_job_repo,
            job_repo,
        }
    }

    /// Bookmarks a live job for the caller.
    pub async fn save(&self, ctx: &RequestContext, job_id: Uuid) -> Result<SavedJob, AppError> {
        ctx.require_jobseeker()?;

        let job = self
            .job_repo
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found or no longer active"))?;
        if !job.is_accepting_applications(Utc::now()) {
            return Err(AppError::not_found("Job not found or no longer active"));
        }

        let saved = self.saved_job_repo.save(ctx.account_id, job_id).await?;
        info!(job_id = %job_id, jobseeker_id = %ctx.account_id, "Job saved");
        Ok(saved)
    }

    /// Removes a bookmark.
    pub async fn unsave(&self, ctx: &RequestContext, job_id: Uuid) -> Result<(), AppError> {
        ctx.require_jobseeker()?;

        let removed = self.saved_job_repo.remove(ctx.account_id, job_id).await?;
        if !removed {
            return Err(AppError::not_found("Job is not in your saved list"));
        }
        Ok(())
    }

    /// Lists the caller's bookmarked jobs.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> Result<PageResponse<JobWithCompany>, AppError> {
        ctx.require_jobseeker()?;
        self.saved_job_repo
            .find_by_jobseeker(ctx.account_id, page)
            .await
    }
}
