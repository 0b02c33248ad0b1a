//! Auth handlers — register, login, refresh, me, password flows.

use axum::Json;
use axum::extract::State;
use std::str::FromStr;

use jobconnect_entity::account::AccountType;
use jobconnect_service::auth::RegisterData;

use crate::dto::request::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RefreshRequest, RegisterRequest,
    ResetPasswordRequest,
};
use crate::dto::response::{AccountResponse, ApiResponse, AuthResponse, MessageResponse};
use crate::dto::validate;
use crate::extractors::AuthAccount;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    validate(&req)?;
    let account_type = AccountType::from_str(&req.account_type)?;

    let result = state
        .auth_service
        .register(RegisterData {
            name: req.name,
            email: req.email,
            password: req.password,
            confirm_password: req.confirm_password,
            account_type,
        })
        .await?;

    Ok(Json(ApiResponse::ok(AuthResponse::from_result(result))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    validate(&req)?;

    let result = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(AuthResponse::from_result(result))))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    let result = state.auth_service.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(AuthResponse::from_result(result))))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthAccount,
) -> Result<Json<ApiResponse<AccountResponse>>, ApiError> {
    let summary = state.auth_service.me(&auth).await?;
    Ok(Json(ApiResponse::ok(summary.into())))
}

/// POST /api/auth/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate(&req)?;

    state.password_reset_service.request_reset(&req.email).await?;

    // Same response whether or not the email exists.
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "If an account with that email exists, a password reset link has been sent.",
    ))))
}

/// POST /api/auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate(&req)?;

    state
        .password_reset_service
        .reset_password(&req.token, &req.email, &req.new_password, &req.confirm_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Your password has been reset. You can now log in with your new password.",
    ))))
}

/// PUT /api/account/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthAccount,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate(&req)?;

    state
        .auth_service
        .change_password(&auth, &req.current_password, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Password changed successfully",
    ))))
}
