//! Saved job handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use jobconnect_core::types::pagination::PageResponse;
use jobconnect_entity::job::JobWithCompany;
use jobconnect_entity::saved_job::SavedJob;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::{AuthJobSeeker, PaginationParams};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/jobs/{id}/save
pub async fn save_job(
    State(state): State<AppState>,
    auth: AuthJobSeeker,
    Path(job_id): Path<Uuid>,
) -> Result<Json<ApiResponse<SavedJob>>, ApiError> {
    let saved = state.saved_job_service.save(&auth, job_id).await?;
    Ok(Json(ApiResponse::ok(saved)))
}

/// DELETE /api/jobs/{id}/save
pub async fn unsave_job(
    State(state): State<AppState>,
    auth: AuthJobSeeker,
    Path(job_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.saved_job_service.unsave(&auth, job_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Job removed from saved list",
    ))))
}

/// GET /api/jobseeker/saved-jobs
pub async fn saved_jobs(
    State(state): State<AppState>,
    auth: AuthJobSeeker,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<JobWithCompany>>>, ApiError> {
    let jobs = state
        .saved_job_service
        .list(&auth, &pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(jobs)))
}
