//! Profile handlers for both account kinds.

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use jobconnect_entity::employer::{Employer, UpdateEmployerProfile};
use jobconnect_entity::jobseeker::{JobSeeker, UpdateJobSeekerProfile};

use crate::dto::request::{UpdateEmployerProfileRequest, UpdateJobSeekerProfileRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::{AuthEmployer, AuthJobSeeker};
use crate::handlers::multipart::single_file;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/jobseeker/profile
pub async fn jobseeker_profile(
    State(state): State<AppState>,
    auth: AuthJobSeeker,
) -> Result<Json<ApiResponse<JobSeeker>>, ApiError> {
    let profile = state.profile_service.jobseeker_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// PUT /api/jobseeker/profile
pub async fn update_jobseeker_profile(
    State(state): State<AppState>,
    auth: AuthJobSeeker,
    Json(req): Json<UpdateJobSeekerProfileRequest>,
) -> Result<Json<ApiResponse<JobSeeker>>, ApiError> {
    let profile = state
        .profile_service
        .update_jobseeker_profile(
            &auth,
            UpdateJobSeekerProfile {
                first_name: req.first_name,
                last_name: req.last_name,
                headline: req.headline,
                summary: req.summary,
                location: req.location,
                phone: req.phone,
                skills: req.skills,
                experience: req.experience,
                education: req.education,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// POST /api/jobseeker/resume
pub async fn upload_resume(
    State(state): State<AppState>,
    auth: AuthJobSeeker,
    multipart: Multipart,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let (filename, data) = single_file(multipart, "resume").await?;
    state
        .profile_service
        .upload_resume(&auth, &filename, data)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Resume uploaded",
    ))))
}

/// GET /api/jobseeker/resume
pub async fn download_resume(
    State(state): State<AppState>,
    auth: AuthJobSeeker,
) -> Result<Response, ApiError> {
    let (filename, data) = state.profile_service.download_resume(&auth).await?;

    let headers = [
        (header::CONTENT_TYPE, "application/octet-stream".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, data).into_response())
}

/// POST /api/jobseeker/photo
pub async fn upload_photo(
    State(state): State<AppState>,
    auth: AuthJobSeeker,
    multipart: Multipart,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let (filename, data) = single_file(multipart, "photo").await?;
    state
        .profile_service
        .upload_photo(&auth, &filename, data)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Profile photo uploaded",
    ))))
}

/// GET /api/employer/profile
pub async fn employer_profile(
    State(state): State<AppState>,
    auth: AuthEmployer,
) -> Result<Json<ApiResponse<Employer>>, ApiError> {
    let profile = state.profile_service.employer_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// PUT /api/employer/profile
pub async fn update_employer_profile(
    State(state): State<AppState>,
    auth: AuthEmployer,
    Json(req): Json<UpdateEmployerProfileRequest>,
) -> Result<Json<ApiResponse<Employer>>, ApiError> {
    let profile = state
        .profile_service
        .update_employer_profile(
            &auth,
            UpdateEmployerProfile {
                company_name: req.company_name,
                website: req.website,
                industry: req.industry,
                company_size: req.company_size,
                description: req.description,
                location: req.location,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// POST /api/employer/logo
pub async fn upload_logo(
    State(state): State<AppState>,
    auth: AuthEmployer,
    multipart: Multipart,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let (filename, data) = single_file(multipart, "logo").await?;
    state
        .profile_service
        .upload_logo(&auth, &filename, data)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Logo uploaded"))))
}
