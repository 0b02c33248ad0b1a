//! Dashboard aggregates for both account kinds.

use std::sync::Arc;

use jobconnect_core::error::AppError;
use jobconnect_database::repositories::application::{
    ApplicationRepository, ApplicationStatusCounts,
};
use jobconnect_database::repositories::job::{JobRepository, JobStatusCounts};
use jobconnect_database::repositories::saved_job::SavedJobRepository;
use jobconnect_entity::application::{ApplicationDetail, ApplicationWithJob};
use jobconnect_entity::job::{Job, JobWithCompany};

use crate::context::RequestContext;

/// Employer dashboard payload.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EmployerDashboard {
    /// Posting counts per status.
    pub job_counts: JobStatusCounts,
    /// Total detail-page views across all postings.
    pub total_views: i64,
    /// Total applications received.
    pub total_applications: i64,
    /// Latest applications across all postings.
    pub recent_applications: Vec<ApplicationDetail>,
    /// Latest postings.
    pub recent_jobs: Vec<Job>,
}

/// Job seeker dashboard payload.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct JobSeekerDashboard {
    /// Application counts per review status.
    pub application_counts: ApplicationStatusCounts,
    /// Number of saved jobs.
    pub saved_jobs: i64,
    /// Latest applications.
    pub recent_applications: Vec<ApplicationWithJob>,
    /// Live jobs in categories the seeker has applied to.
    pub recommended_jobs: Vec<JobWithCompany>,
}

/// Builds dashboard aggregates.
#[derive(Debug, Clone)]
pub struct DashboardService {
    /// Job repository.
    job_repo: Arc<JobRepository>,
    /// Application repository.
    application_repo: Arc<ApplicationRepository>,
    /// Saved job repository.
    saved_job_repo: Arc<SavedJobRepository>,
    /// Number of recent items per section.
    recent_limit: i64,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(
        job_repo: Arc<JobRepository>,
        application_repo: Arc<ApplicationRepository>,
        saved_job_repo: Arc<SavedJobRepository>,
        recent_limit: i64,
    ) -> Self {
        Self {
            job_repo,
            application_repo,
            saved_job_repo,
            recent_limit,
        }
    }

    /// The employer's dashboard.
    pub async fn employer_dashboard(
        &self,
        ctx: &RequestContext,
    ) -> Result<EmployerDashboard, AppError> {
        ctx.require_employer()?;

        let job_counts = self.job_repo.status_counts(ctx.account_id).await?;
        let total_views = self.job_repo.total_views(ctx.account_id).await?;
        let total_applications = self
            .application_repo
            .count_for_employer(ctx.account_id)
            .await?;
        let recent_applications = self
            .application_repo
            .recent_for_employer(ctx.account_id, self.recent_limit)
            .await?;
        let recent_jobs = self
            .job_repo
            .recent_by_employer(ctx.account_id, self.recent_limit)
            .await?;

        Ok(EmployerDashboard {
            job_counts,
            total_views,
            total_applications,
            recent_applications,
            recent_jobs,
        })
    }

    /// The job seeker's dashboard.
    pub async fn jobseeker_dashboard(
        &self,
        ctx: &RequestContext,
    ) -> Result<JobSeekerDashboard, AppError> {
        ctx.require_jobseeker()?;

        let application_counts = self
            .application_repo
            .status_counts_for_jobseeker(ctx.account_id)
            .await?;
        let saved_jobs = self
            .saved_job_repo
            .count_for_jobseeker(ctx.account_id)
            .await?;
        let recent_applications = self
            .application_repo
            .recent_for_jobseeker(ctx.account_id, self.recent_limit)
            .await?;
        let recommended_jobs = self
            .job_repo
            .recommended_for_seeker(ctx.account_id, self.recent_limit)
            .await?;

        Ok(JobSeekerDashboard {
            application_counts,
            saved_jobs,
            recent_applications,
            recommended_jobs,
        })
    }
}
