//! Application handlers — apply, review, withdraw, resume export.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use std::str::FromStr;
use uuid::Uuid;

use jobconnect_core::error::AppError;
use jobconnect_core::types::pagination::PageResponse;
use jobconnect_entity::application::{Application, ApplicationDetail, ApplicationStatus};
use jobconnect_service::application::{ApplyData, JobSeekerApplicationList, ResumeUpload};

use crate::dto::request::{ApplicationsQuery, ChangeApplicationStatusRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthAccount, AuthEmployer, AuthJobSeeker, PaginationParams};
use crate::state::AppState;

/// POST /api/jobs/{id}/apply
///
/// Multipart form: `cover_letter` (text, required), `resume` (file) or
/// `use_existing_resume=true`.
pub async fn apply(
    State(state): State<AppState>,
    auth: AuthJobSeeker,
    Path(job_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<Application>>, ApiError> {
    let mut cover_letter = String::new();
    let mut resume = None;
    let mut use_existing_resume = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("cover_letter") => {
                cover_letter = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Invalid cover letter: {e}")))?;
            }
            Some("use_existing_resume") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Invalid form field: {e}")))?;
                use_existing_resume = matches!(value.as_str(), "1" | "true" | "on");
            }
            Some("resume") => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| AppError::validation("Missing resume filename"))?
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read resume: {e}")))?;
                resume = Some(ResumeUpload { filename, data });
            }
            _ => {}
        }
    }

    let application = state
        .application_service
        .apply(
            &auth,
            job_id,
            ApplyData {
                cover_letter,
                resume,
                use_existing_resume,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(application)))
}

/// GET /api/jobseeker/applications
pub async fn jobseeker_applications(
    State(state): State<AppState>,
    auth: AuthJobSeeker,
    Query(query): Query<ApplicationsQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<JobSeekerApplicationList>>, ApiError> {
    let status = query
        .status
        .as_deref()
        .map(ApplicationStatus::from_str)
        .transpose()?;

    let list = state
        .application_service
        .jobseeker_applications(&auth, status, &pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(list)))
}

/// GET /api/employer/applications
pub async fn employer_applications(
    State(state): State<AppState>,
    auth: AuthEmployer,
    Query(query): Query<ApplicationsQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<ApplicationDetail>>>, ApiError> {
    let status = query
        .status
        .as_deref()
        .map(ApplicationStatus::from_str)
        .transpose()?;

    let applications = state
        .application_service
        .employer_applications(&auth, query.job_id, status, &pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(applications)))
}

/// GET /api/applications/{id}
pub async fn application_detail(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ApplicationDetail>>, ApiError> {
    let detail = state.application_service.detail(&auth, id).await?;
    Ok(Json(ApiResponse::ok(detail)))
}

/// PUT /api/applications/{id}/status
pub async fn change_application_status(
    State(state): State<AppState>,
    auth: AuthEmployer,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeApplicationStatusRequest>,
) -> Result<Json<ApiResponse<Application>>, ApiError> {
    let status = ApplicationStatus::from_str(&req.status)?;
    let application = state
        .application_service
        .update_status(&auth, id, status)
        .await?;
    Ok(Json(ApiResponse::ok(application)))
}

/// GET /api/applications/{id}/resume
pub async fn application_resume(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let (filename, data) = state.application_service.resume(&auth, id).await?;

    let headers = [
        (header::CONTENT_TYPE, "application/octet-stream".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, data).into_response())
}

/// DELETE /api/applications/{id}
pub async fn withdraw_application(
    State(state): State<AppState>,
    auth: AuthJobSeeker,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.application_service.withdraw(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Application withdrawn",
    ))))
}
