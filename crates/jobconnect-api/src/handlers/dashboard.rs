//! Dashboard handlers.

use axum::Json;
use axum::extract::State;

use jobconnect_service::dashboard::{EmployerDashboard, JobSeekerDashboard};

use crate::dto::response::ApiResponse;
use crate::extractors::{AuthEmployer, AuthJobSeeker};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/employer/dashboard
pub async fn employer_dashboard(
    State(state): State<AppState>,
    auth: AuthEmployer,
) -> Result<Json<ApiResponse<EmployerDashboard>>, ApiError> {
    let dashboard = state.dashboard_service.employer_dashboard(&auth).await?;
    Ok(Json(ApiResponse::ok(dashboard)))
}

/// GET /api/jobseeker/dashboard
pub async fn jobseeker_dashboard(
    State(state): State<AppState>,
    auth: AuthJobSeeker,
) -> Result<Json<ApiResponse<JobSeekerDashboard>>, ApiError> {
    let dashboard = state.dashboard_service.jobseeker_dashboard(&auth).await?;
    Ok(Json(ApiResponse::ok(dashboard)))
}
