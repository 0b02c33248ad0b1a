//! Submitting, reviewing, and withdrawing applications.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use jobconnect_core::error::AppError;
use jobconnect_core::types::pagination::{PageRequest, PageResponse};
use jobconnect_database::repositories::application::{
    ApplicationRepository, ApplicationStatusCounts,
};
use jobconnect_database::repositories::job::JobRepository;
use jobconnect_database::repositories::jobseeker::JobSeekerRepository;
use jobconnect_entity::application::{
    Application, ApplicationDetail, ApplicationStatus, ApplicationWithJob, NewApplication,
};
use jobconnect_storage::{DocumentKind, DocumentStore};

use crate::context::RequestContext;

/// A freshly uploaded resume file.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    /// Client-supplied filename (used for extension validation only).
    pub filename: String,
    /// File contents.
    pub data: Bytes,
}

/// Data for submitting an application.
#[derive(Debug, Clone)]
pub struct ApplyData {
    /// Cover letter text (required).
    pub cover_letter: String,
    /// Freshly uploaded resume, if any.
    pub resume: Option<ResumeUpload>,
    /// Snapshot the profile resume instead of uploading a new one.
    pub use_existing_resume: bool,
}

/// A seeker's application listing plus per-status counts.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct JobSeekerApplicationList {
    /// The requested page of applications.
    pub applications: PageResponse<ApplicationWithJob>,
    /// Counts per review status across all the seeker's applications.
    pub status_counts: ApplicationStatusCounts,
}

/// Handles the application lifecycle on both sides of the board.
#[derive(Debug, Clone)]
pub struct ApplicationService {
    /// Application repository.
    application_repo: Arc<ApplicationRepository>,
    /// Job repository.
    job_repo: Arc<JobRepository>,
    /// Job seeker repository.
    jobseeker_repo: Arc<JobSeekerRepository>,
    /// Document store for resume files.
    store: Arc<DocumentStore>,
}

impl ApplicationService {
    /// Creates a new application service.
    pub fn new(
        application_repo: Arc<ApplicationRepository>,
        job_repo: Arc<JobRepository>,
        jobseeker_repo: Arc<JobSeekerRepository>,
        store: Arc<DocumentStore>,
    ) -> Self {
        Self {
            application_repo,
            job_repo,
            jobseeker_repo,
            store,
        }
    }

    /// Submits an application for a live job.
    pub async fn apply(
        &self,
        ctx: &RequestContext,
        job_id: Uuid,
        data: ApplyData,
    ) -> Result<Application, AppError> {
        ctx.require_jobseeker()?;

        if data.cover_letter.trim().is_empty() {
            return Err(AppError::validation("Cover letter is required"));
        }

        let job = self
            .job_repo
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found or no longer active"))?;
        if !job.is_accepting_applications(Utc::now()) {
            return Err(AppError::not_found("Job not found or no longer active"));
        }

        if self.application_repo.exists(job_id, ctx.account_id).await? {
            return Err(AppError::conflict("You have already applied for this job"));
        }

        let resume = self.resolve_resume(ctx, &data).await?;

        let application = self
            .application_repo
            .create(&NewApplication {
                job_id,
                jobseeker_id: ctx.account_id,
                resume,
                cover_letter: data.cover_letter,
            })
            .await?;

        if let Err(e) = self.job_repo.adjust_application_count(job_id, 1).await {
            warn!(job_id = %job_id, error = %e, "Failed to bump application counter");
        }

        info!(
            application_id = %application.id,
            job_id = %job_id,
            jobseeker_id = %ctx.account_id,
            "Application submitted"
        );
        Ok(application)
    }

    /// The seeker's own applications with per-status counts.
    pub async fn jobseeker_applications(
        &self,
        ctx: &RequestContext,
        status: Option<ApplicationStatus>,
        page: &PageRequest,
    ) -> Result<JobSeekerApplicationList, AppError> {
        ctx.require_jobseeker()?;

        let applications = self
            .application_repo
            .find_by_jobseeker(ctx.account_id, status, page)
            .await?;
        let status_counts = self
            .application_repo
            .status_counts_for_jobseeker(ctx.account_id)
            .await?;

        Ok(JobSeekerApplicationList {
            applications,
            status_counts,
        })
    }

    /// Applications across the employer's jobs.
    pub async fn employer_applications(
        &self,
        ctx: &RequestContext,
        job_id: Option<Uuid>,
        status: Option<ApplicationStatus>,
        page: &PageRequest,
    ) -> Result<PageResponse<ApplicationDetail>, AppError> {
        ctx.require_employer()?;

        if let Some(job_id) = job_id {
            // Filtering by a job only makes sense for the caller's own job.
            let job = self
                .job_repo
                .find_by_id(job_id)
                .await?
                .ok_or_else(|| AppError::not_found("Job not found"))?;
            if job.employer_id != ctx.account_id {
                return Err(AppError::authorization(
                    "You don't have permission to view applications for this job",
                ));
            }
        }

        self.application_repo
            .find_by_employer(ctx.account_id, job_id, status, page)
            .await
    }

    /// Full application detail, visible to the applicant and the employer
    /// who owns the job.
    pub async fn detail(
        &self,
        ctx: &RequestContext,
        application_id: Uuid,
    ) -> Result<ApplicationDetail, AppError> {
        let detail = self
            .application_repo
            .find_detail(application_id)
            .await?
            .ok_or_else(|| AppError::not_found("Application not found"))?;

        self.check_visibility(ctx, &detail)?;
        Ok(detail)
    }

    /// Sets the review status. Only the employer owning the job may do this;
    /// any status may be set at any time.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        application_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Application, AppError> {
        ctx.require_employer()?;

        let detail = self
            .application_repo
            .find_detail(application_id)
            .await?
            .ok_or_else(|| AppError::not_found("Application not found"))?;

        if detail.employer_id != ctx.account_id {
            return Err(AppError::authorization(
                "You don't have permission to update this application",
            ));
        }

        let application = self
            .application_repo
            .update_status(application_id, status)
            .await?;

        info!(application_id = %application_id, status = %status, "Application status updated");
        Ok(application)
    }

    /// Reads the resume file attached to an application.
    pub async fn resume(
        &self,
        ctx: &RequestContext,
        application_id: Uuid,
    ) -> Result<(String, Bytes), AppError> {
        let detail = self
            .application_repo
            .find_detail(application_id)
            .await?
            .ok_or_else(|| AppError::not_found("Application not found"))?;

        self.check_visibility(ctx, &detail)?;

        let filename = detail
            .application
            .resume
            .ok_or_else(|| AppError::not_found("No resume attached to this application"))?;
        let data = self.store.read(DocumentKind::Resume, &filename).await?;
        Ok((filename, data))
    }

    /// Withdraws the caller's own application.
    pub async fn withdraw(
        &self,
        ctx: &RequestContext,
        application_id: Uuid,
    ) -> Result<(), AppError> {
        ctx.require_jobseeker()?;

        let application = self
            .application_repo
            .find_by_id(application_id)
            .await?
            .ok_or_else(|| AppError::not_found("Application not found"))?;

        if application.jobseeker_id != ctx.account_id {
            return Err(AppError::authorization(
                "You don't have permission to withdraw this application",
            ));
        }

        self.application_repo.delete(application_id).await?;

        if let Err(e) = self
            .job_repo
            .adjust_application_count(application.job_id, -1)
            .await
        {
            warn!(job_id = %application.job_id, error = %e, "Failed to decrement application counter");
        }

        info!(application_id = %application_id, "Application withdrawn");
        Ok(())
    }

    /// Resolves the resume snapshot: fresh upload, or the profile resume.
    async fn resolve_resume(
        &self,
        ctx: &RequestContext,
        data: &ApplyData,
    ) -> Result<Option<String>, AppError> {
        if data.use_existing_resume {
            let seeker = self
                .jobseeker_repo
                .find_by_id(ctx.account_id)
                .await?
                .ok_or_else(|| AppError::not_found("Account not found"))?;
            return match seeker.resume {
                Some(resume) => Ok(Some(resume)),
                None => Err(AppError::validation(
                    "You don't have an existing resume. Please upload one.",
                )),
            };
        }

        match &data.resume {
            Some(upload) => {
                let filename = self
                    .store
                    .store(DocumentKind::Resume, &upload.filename, upload.data.clone())
                    .await?;
                Ok(Some(filename))
            }
            None => Err(AppError::validation("Resume is required")),
        }
    }

    /// Allows the applicant and the job's employer through.
    fn check_visibility(
        &self,
        ctx: &RequestContext,
        detail: &ApplicationDetail,
    ) -> Result<(), AppError> {
        let is_applicant = ctx.is_jobseeker() && ctx.account_id == detail.application.jobseeker_id;
        let is_owner = ctx.is_employer() && ctx.account_id == detail.employer_id;
        if is_applicant || is_owner {
            Ok(())
        } else {
            Err(AppError::authorization(
                "You don't have permission to view this application",
            ))
        }
    }
}
