//! Posting, updating, browsing, and managing jobs.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use jobconnect_core::error::AppError;
use jobconnect_core::types::pagination::{PageRequest, PageResponse};
use jobconnect_database::repositories::job::{
    JobBrowseFilter, JobRepository, JobStatusCounts,
};
use jobconnect_entity::job::attributes::{
    is_valid_category, is_valid_education_level, is_valid_experience_level,
};
use jobconnect_entity::job::{
    CreateJob, EmploymentType, Job, JobStatus, JobWithCompany, SalaryPeriod, UpdateJob,
};

use crate::context::RequestContext;

/// Handles job posting lifecycle and browse queries.
#[derive(Debug, Clone)]
pub struct JobService {
    /// Job repository.
    job_repo: Arc<JobRepository>,
    /// Days a posting stays live before expiring.
    posting_ttl_days: i64,
}

/// Data for a new job posting.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PostJobData {
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
    /// Salary range lower bound.
    pub salary_min: Option<f64>,
    /// Salary range upper bound.
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
    /// Featured flag.
    pub featured: bool,
    /// Save as an unpublished draft instead of going live.
    pub save_as_draft: bool,
}

/// An employer's job listing plus per-status counts.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EmployerJobList {
    /// The requested page of jobs.
    pub jobs: PageResponse<Job>,
    /// Counts per posting status across all the employer's jobs.
    pub status_counts: JobStatusCounts,
}

impl JobService {
    /// Creates a new job service.
    pub fn new(job_repo: Arc<JobRepository>, posting_ttl_days: i64) -> Self {
        Self {
            job_repo,
            posting_ttl_days,
        }
    }

    /// Posts a new job (or saves a draft).
    pub async fn post(&self, ctx: &RequestContext, data: PostJobData) -> Result<Job, AppError> {
        ctx.require_employer()?;

        if data.title.trim().is_empty() {
            return Err(AppError::validation("Job title is required"));
        }
        if data.description.trim().is_empty() {
            return Err(AppError::validation("Job description is required"));
        }
        validate_taxonomy(
            &data.category,
            data.experience_level.as_deref(),
            data.education_level.as_deref(),
        )?;
        validate_salary_range(data.salary_min, data.salary_max)?;

        let status = if data.save_as_draft {
            JobStatus::Draft
        } else {
            JobStatus::Active
        };

        let job = self
            .job_repo
            .create(&CreateJob {
                employer_id: ctx.account_id,
                title: data.title.trim().to_string(),
                description: data.description,
                responsibilities: data.responsibilities,
                requirements: data.requirements,
                benefits: data.benefits,
                location: data.location,
                salary_min: data.salary_min,
                salary_max: data.salary_max,
                salary_period: data.salary_period,
                job_type: data.job_type,
                category: data.category,
                experience_level: data.experience_level,
                education_level: data.education_level,
                status,
                featured: data.featured,
                expires_at: Utc::now() + Duration::days(self.posting_ttl_days),
            })
            .await?;

        info!(job_id = %job.id, employer_id = %ctx.account_id, status = %job.status, "Job posted");
        Ok(job)
    }

    /// Partially updates a posting owned by the caller.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        job_id: Uuid,
        data: UpdateJob,
    ) -> Result<Job, AppError> {
        let job = self.owned_job(ctx, job_id).await?;

        if let Some(title) = &data.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("Job title is required"));
            }
        }
        validate_taxonomy(
            data.category.as_deref().unwrap_or(&job.category),
            data.experience_level
                .as_deref()
                .or(job.experience_level.as_deref()),
            data.education_level
                .as_deref()
                .or(job.education_level.as_deref()),
        )?;
        validate_salary_range(
            data.salary_min.or(job.salary_min),
            data.salary_max.or(job.salary_max),
        )?;

        self.job_repo.update(job_id, &data).await
    }

    /// Changes the status of a posting owned by the caller.
    ///
    /// Re-activating a posting gives it a fresh expiration window.
    pub async fn change_status(
        &self,
        ctx: &RequestContext,
        job_id: Uuid,
        status: JobStatus,
    ) -> Result<Job, AppError> {
        let job = self.owned_job(ctx, job_id).await?;

        let new_expiry = if status == JobStatus::Active && job.status != JobStatus::Active {
            Some(Utc::now() + Duration::days(self.posting_ttl_days))
        } else {
            None
        };

        let job = self.job_repo.update_status(job_id, status, new_expiry).await?;
        info!(job_id = %job_id, status = %status, "Job status changed");
        Ok(job)
    }

    /// Deletes a posting owned by the caller.
    pub async fn delete(&self, ctx: &RequestContext, job_id: Uuid) -> Result<(), AppError> {
        self.owned_job(ctx, job_id).await?;
        self.job_repo.delete(job_id).await?;
        info!(job_id = %job_id, employer_id = %ctx.account_id, "Job deleted");
        Ok(())
    }

    /// Public browse over active, unexpired postings.
    pub async fn browse(
        &self,
        filter: &JobBrowseFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<JobWithCompany>, AppError> {
        self.job_repo.browse(filter, page).await
    }

    /// Public job detail.
    ///
    /// Postings that are not live are only visible to the owning employer.
    /// Live views bump the view counter; counter failures never fail the
    /// request.
    pub async fn detail(
        &self,
        viewer: Option<&RequestContext>,
        job_id: Uuid,
    ) -> Result<JobWithCompany, AppError> {
        let job = self
            .job_repo
            .find_with_company(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found or no longer active"))?;

        let live = job.job.is_accepting_applications(Utc::now());
        if !live {
            let is_owner = viewer
                .map(|ctx| ctx.is_employer() && ctx.account_id == job.job.employer_id)
                .unwrap_or(false);
            if !is_owner {
                return Err(AppError::not_found("Job not found or no longer active"));
            }
        } else if let Err(e) = self.job_repo.increment_views(job_id).await {
            warn!(job_id = %job_id, error = %e, "Failed to increment view counter");
        }

        Ok(job)
    }

    /// The caller's own postings with optional filters and status counts.
    pub async fn employer_jobs(
        &self,
        ctx: &RequestContext,
        status: Option<JobStatus>,
        keyword: Option<&str>,
        page: &PageRequest,
    ) -> Result<EmployerJobList, AppError> {
        ctx.require_employer()?;

        let jobs = self
            .job_repo
            .find_by_employer(ctx.account_id, status, keyword, page)
            .await?;
        let status_counts = self.job_repo.status_counts(ctx.account_id).await?;

        Ok(EmployerJobList { jobs, status_counts })
    }

    /// Fetches a job and checks the caller owns it.
    async fn owned_job(&self, ctx: &RequestContext, job_id: Uuid) -> Result<Job, AppError> {
        ctx.require_employer()?;

        let job = self
            .job_repo
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))?;

        if job.employer_id != ctx.account_id {
            return Err(AppError::authorization(
                "You don't have permission to manage this job",
            ));
        }
        Ok(job)
    }
}

/// Validate category/experience/education values against the fixed lists.
fn validate_taxonomy(
    category: &str,
    experience_level: Option<&str>,
    education_level: Option<&str>,
) -> Result<(), AppError> {
    if !is_valid_category(category) {
        return Err(AppError::validation(format!(
            "Invalid job category: '{category}'"
        )));
    }
    if let Some(level) = experience_level {
        if !is_valid_experience_level(level) {
            return Err(AppError::validation(format!(
                "Invalid experience level: '{level}'"
            )));
        }
    }
    if let Some(level) = education_level {
        if !is_valid_education_level(level) {
            return Err(AppError::validation(format!(
                "Invalid education level: '{level}'"
            )));
        }
    }
    Ok(())
}

/// Reject inverted salary ranges.
fn validate_salary_range(min: Option<f64>, max: Option<f64>) -> Result<(), AppError> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(AppError::validation(
                "Minimum salary cannot be greater than maximum salary",
            ));
        }
    }
    Ok(())
}
