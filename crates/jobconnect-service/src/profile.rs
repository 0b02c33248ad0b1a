//! Profile viewing, editing, and document uploads for both account kinds.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use jobconnect_core::error::AppError;
use jobconnect_database::repositories::employer::EmployerRepository;
use jobconnect_database::repositories::jobseeker::JobSeekerRepository;
use jobconnect_entity::employer::{Employer, UpdateEmployerProfile};
use jobconnect_entity::jobseeker::{JobSeeker, UpdateJobSeekerProfile};
use jobconnect_storage::{DocumentKind, DocumentStore};

use crate::context::RequestContext;

/// Handles profile reads/updates and profile document uploads.
#[derive(Debug, Clone)]
pub struct ProfileService {
    /// Employer repository.
    employer_repo: Arc<EmployerRepository>,
    /// Job seeker repository.
    jobseeker_repo: Arc<JobSeekerRepository>,
    /// Document store.
    store: Arc<DocumentStore>,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(
        employer_repo: Arc<EmployerRepository>,
        jobseeker_repo: Arc<JobSeekerRepository>,
        store: Arc<DocumentStore>,
    ) -> Self {
        Self {
            employer_repo,
            jobseeker_repo,
            store,
        }
    }

    /// The caller's job seeker profile.
    pub async fn jobseeker_profile(&self, ctx: &RequestContext) -> Result<JobSeeker, AppError> {
        ctx.require_jobseeker()?;
        self.jobseeker_repo
            .find_by_id(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))
    }

    /// Updates the caller's job seeker profile fields.
    pub async fn update_jobseeker_profile(
        &self,
        ctx: &RequestContext,
        data: UpdateJobSeekerProfile,
    ) -> Result<JobSeeker, AppError> {
        ctx.require_jobseeker()?;

        if let Some(first_name) = &data.first_name {
            if first_name.trim().is_empty() {
                return Err(AppError::validation("First name cannot be empty"));
            }
        }

        let seeker = self
            .jobseeker_repo
            .update_profile(ctx.account_id, &data)
            .await?;
        info!(jobseeker_id = %ctx.account_id, "Profile updated");
        Ok(seeker)
    }

    /// Stores a new resume for the caller, replacing the previous one.
    pub async fn upload_resume(
        &self,
        ctx: &RequestContext,
        original_name: &str,
        data: Bytes,
    ) -> Result<String, AppError> {
        ctx.require_jobseeker()?;

        let previous = self
            .jobseeker_repo
            .find_by_id(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))?
            .resume;

        let filename = self
            .store
            .store(DocumentKind::Resume, original_name, data)
            .await?;
        self.jobseeker_repo
            .update_resume(ctx.account_id, &filename)
            .await?;

        if let Some(previous) = previous {
            self.store.delete(DocumentKind::Resume, &previous).await?;
        }

        info!(jobseeker_id = %ctx.account_id, filename = %filename, "Resume uploaded");
        Ok(filename)
    }

    /// Reads the caller's own resume back.
    pub async fn download_resume(&self, ctx: &RequestContext) -> Result<(String, Bytes), AppError> {
        let seeker = self.jobseeker_profile(ctx).await?;
        let filename = seeker
            .resume
            .ok_or_else(|| AppError::not_found("No resume uploaded yet"))?;
        let data = self.store.read(DocumentKind::Resume, &filename).await?;
        Ok((filename, data))
    }

    /// Stores a new profile photo for the caller.
    pub async fn upload_photo(
        &self,
        ctx: &RequestContext,
        original_name: &str,
        data: Bytes,
    ) -> Result<String, AppError> {
        ctx.require_jobseeker()?;

        let previous = self
            .jobseeker_repo
            .find_by_id(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))?
            .profile_image;

        let filename = self
            .store
            .store(DocumentKind::ProfilePhoto, original_name, data)
            .await?;
        self.jobseeker_repo
            .update_profile_image(ctx.account_id, &filename)
            .await?;

        if let Some(previous) = previous {
            self.store
                .delete(DocumentKind::ProfilePhoto, &previous)
                .await?;
        }

        Ok(filename)
    }

    /// The caller's employer profile.
    pub async fn employer_profile(&self, ctx: &RequestContext) -> Result<Employer, AppError> {
        ctx.require_employer()?;
        self.employer_repo
            .find_by_id(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))
    }

    /// Updates the caller's employer company profile.
    pub async fn update_employer_profile(
        &self,
        ctx: &RequestContext,
        data: UpdateEmployerProfile,
    ) -> Result<Employer, AppError> {
        ctx.require_employer()?;

        if let Some(company_name) = &data.company_name {
            if company_name.trim().is_empty() {
                return Err(AppError::validation("Company name cannot be empty"));
            }
        }

        let employer = self
            .employer_repo
            .update_profile(ctx.account_id, &data)
            .await?;
        info!(employer_id = %ctx.account_id, "Company profile updated");
        Ok(employer)
    }

    /// Stores a new company logo for the caller.
    pub async fn upload_logo(
        &self,
        ctx: &RequestContext,
        original_name: &str,
        data: Bytes,
    ) -> Result<String, AppError> {
        ctx.require_employer()?;

        let previous = self
            .employer_repo
            .find_by_id(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))?
            .logo;

        let filename = self
            .store
            .store(DocumentKind::Logo, original_name, data)
            .await?;
        self.employer_repo
            .update_logo(ctx.account_id, &filename)
            .await?;

        if let Some(previous) = previous {
            self.store.delete(DocumentKind::Logo, &previous).await?;
        }

        Ok(filename)
    }
}
