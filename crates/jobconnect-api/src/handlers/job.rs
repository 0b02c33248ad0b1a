//! Job posting handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use std::str::FromStr;
use uuid::Uuid;

use jobconnect_core::error::AppError;
use jobconnect_core::types::pagination::PageResponse;
use jobconnect_database::repositories::job::{JobBrowseFilter, JobSort};
use jobconnect_entity::application::ApplicationStatus;
use jobconnect_entity::job::attributes::{
    EDUCATION_LEVELS, EXPERIENCE_LEVELS, JOB_CATEGORIES,
};
use jobconnect_entity::job::{
    EmploymentType, Job, JobStatus, JobWithCompany, SalaryPeriod, UpdateJob,
};
use jobconnect_service::job::{EmployerJobList, PostJobData};

use crate::dto::request::{
    BrowseJobsQuery, ChangeJobStatusRequest, EmployerJobsQuery, PostJobRequest, UpdateJobRequest,
};
use crate::dto::response::{ApiResponse, JobAttributesResponse, MessageResponse};
use crate::dto::validate;
use crate::error::ApiError;
use crate::extractors::{AuthEmployer, OptionalAuthAccount, PaginationParams};
use crate::state::AppState;

/// GET /api/jobs
pub async fn browse_jobs(
    State(state): State<AppState>,
    Query(query): Query<BrowseJobsQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<JobWithCompany>>>, ApiError> {
    let sort = match query.sort.as_deref() {
        Some(sort) => JobSort::from_str(sort)?,
        None => JobSort::default(),
    };

    let filter = JobBrowseFilter {
        keyword: query.keyword,
        category: query.category,
        job_type: query.job_type,
        experience_level: query.experience_level,
        location: query.location,
        featured: matches!(query.featured.as_deref(), Some("1") | Some("true")),
        sort,
    };

    let jobs = state
        .job_service
        .browse(&filter, &pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(jobs)))
}

/// GET /api/jobs/attributes
pub async fn job_attributes() -> Json<ApiResponse<JobAttributesResponse>> {
    Json(ApiResponse::ok(JobAttributesResponse {
        categories: JOB_CATEGORIES.to_vec(),
        employment_types: vec![
            EmploymentType::FullTime.as_str(),
            EmploymentType::PartTime.as_str(),
            EmploymentType::Contract.as_str(),
            EmploymentType::Temporary.as_str(),
            EmploymentType::Internship.as_str(),
            EmploymentType::Remote.as_str(),
            EmploymentType::Freelance.as_str(),
        ],
        experience_levels: EXPERIENCE_LEVELS.to_vec(),
        education_levels: EDUCATION_LEVELS.to_vec(),
        salary_periods: vec![
            SalaryPeriod::Hourly.as_str(),
            SalaryPeriod::Daily.as_str(),
            SalaryPeriod::Weekly.as_str(),
            SalaryPeriod::Monthly.as_str(),
            SalaryPeriod::Yearly.as_str(),
        ],
        application_statuses: ApplicationStatus::all().iter().map(|s| s.as_str()).collect(),
    }))
}

/// GET /api/jobs/{id}
pub async fn job_detail(
    State(state): State<AppState>,
    viewer: OptionalAuthAccount,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<JobWithCompany>>, ApiError> {
    let job = state.job_service.detail(viewer.0.as_ref(), id).await?;
    Ok(Json(ApiResponse::ok(job)))
}

/// POST /api/jobs
pub async fn post_job(
    State(state): State<AppState>,
    auth: AuthEmployer,
    Json(req): Json<PostJobRequest>,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    validate(&req)?;

    let job = state
        .job_service
        .post(
            &auth,
            PostJobData {
                title: req.title,
                description: req.description,
                responsibilities: req.responsibilities,
                requirements: req.requirements,
                benefits: req.benefits,
                location: req.location,
                salary_min: req.salary_min,
                salary_max: req.salary_max,
                salary_period: parse_salary_period(req.salary_period.as_deref())?,
                job_type: EmploymentType::from_str(&req.job_type)?,
                category: req.category,
                experience_level: req.experience_level,
                education_level: req.education_level,
                featured: req.featured,
                save_as_draft: req.save_as_draft,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(job)))
}

/// PUT /api/jobs/{id}
pub async fn update_job(
    State(state): State<AppState>,
    auth: AuthEmployer,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJobRequest>,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    let update = UpdateJob {
        title: req.title,
        description: req.description,
        responsibilities: req.responsibilities,
        requirements: req.requirements,
        benefits: req.benefits,
        location: req.location,
        salary_min: req.salary_min,
        salary_max: req.salary_max,
        salary_period: parse_salary_period(req.salary_period.as_deref())?,
        job_type: req
            .job_type
            .as_deref()
            .map(EmploymentType::from_str)
            .transpose()?,
        category: req.category,
        experience_level: req.experience_level,
        education_level: req.education_level,
        featured: req.featured,
    };

    let job = state.job_service.update(&auth, id, update).await?;
    Ok(Json(ApiResponse::ok(job)))
}

/// PUT /api/jobs/{id}/status
pub async fn change_job_status(
    State(state): State<AppState>,
    auth: AuthEmployer,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeJobStatusRequest>,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    let status = JobStatus::from_str(&req.status)?;
    let job = state.job_service.change_status(&auth, id, status).await?;
    Ok(Json(ApiResponse::ok(job)))
}

/// DELETE /api/jobs/{id}
pub async fn delete_job(
    State(state): State<AppState>,
    auth: AuthEmployer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.job_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Job deleted"))))
}

/// GET /api/employer/jobs
pub async fn employer_jobs(
    State(state): State<AppState>,
    auth: AuthEmployer,
    Query(query): Query<EmployerJobsQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<EmployerJobList>>, ApiError> {
    let status = query
        .status
        .as_deref()
        .map(JobStatus::from_str)
        .transpose()?;

    let list = state
        .job_service
        .employer_jobs(
            &auth,
            status,
            query.keyword.as_deref(),
            &pagination.into_page_request(),
        )
        .await?;
    Ok(Json(ApiResponse::ok(list)))
}

/// Parse an optional salary period slug.
fn parse_salary_period(value: Option<&str>) -> Result<Option<SalaryPeriod>, AppError> {
    match value {
        None => Ok(None),
        Some("hourly") => Ok(Some(SalaryPeriod::Hourly)),
        Some("daily") => Ok(Some(SalaryPeriod::Daily)),
        Some("weekly") => Ok(Some(SalaryPeriod::Weekly)),
        Some("monthly") => Ok(Some(SalaryPeriod::Monthly)),
        Some("yearly") => Ok(Some(SalaryPeriod::Yearly)),
        Some(other) => Err(AppError::validation(format!(
            "Invalid salary period: '{other}'"
        ))),
    }
}
