//! Route definitions for the JobConnect HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(account_routes())
        .merge(job_routes())
        .merge(application_routes())
        .merge(employer_routes())
        .merge(jobseeker_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, refresh, me, password reset
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
        .route(
            "/auth/forgot-password",
            post(handlers::auth::forgot_password),
        )
        .route("/auth/reset-password", post(handlers::auth::reset_password))
}

/// Account self-service endpoints
fn account_routes() -> Router<AppState> {
    Router::new().route("/account/password", put(handlers::auth::change_password))
}

/// Public browse plus employer-side posting management
fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(handlers::job::browse_jobs))
        .route("/jobs", post(handlers::job::post_job))
        .route("/jobs/attributes", get(handlers::job::job_attributes))
        .route("/jobs/{id}", get(handlers::job::job_detail))
        .route("/jobs/{id}", put(handlers::job::update_job))
        .route("/jobs/{id}", delete(handlers::job::delete_job))
        .route("/jobs/{id}/status", put(handlers::job::change_job_status))
        .route("/jobs/{id}/apply", post(handlers::application::apply))
        .route("/jobs/{id}/save", post(handlers::saved_job::save_job))
        .route("/jobs/{id}/save", delete(handlers::saved_job::unsave_job))
}

/// Application detail, review, resume export, withdrawal
fn application_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/applications/{id}",
            get(handlers::application::application_detail),
        )
        .route(
            "/applications/{id}",
            delete(handlers::application::withdraw_application),
        )
        .route(
            "/applications/{id}/status",
            put(handlers::application::change_application_status),
        )
        .route(
            "/applications/{id}/resume",
            get(handlers::application::application_resume),
        )
}

/// Employer-side listings, profile, and dashboard
fn employer_routes() -> Router<AppState> {
    Router::new()
        .route("/employer/jobs", get(handlers::job::employer_jobs))
        .route(
            "/employer/applications",
            get(handlers::application::employer_applications),
        )
        .route(
            "/employer/dashboard",
            get(handlers::dashboard::employer_dashboard),
        )
        .route("/employer/profile", get(handlers::profile::employer_profile))
        .route(
            "/employer/profile",
            put(handlers::profile::update_employer_profile),
        )
        .route("/employer/logo", post(handlers::profile::upload_logo))
}

/// Job-seeker-side listings, profile, documents, and dashboard
fn jobseeker_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/jobseeker/applications",
            get(handlers::application::jobseeker_applications),
        )
        .route("/jobseeker/saved-jobs", get(handlers::saved_job::saved_jobs))
        .route(
            "/jobseeker/dashboard",
            get(handlers::dashboard::jobseeker_dashboard),
        )
        .route(
            "/jobseeker/profile",
            get(handlers::profile::jobseeker_profile),
        )
        .route(
            "/jobseeker/profile",
            put(handlers::profile::update_jobseeker_profile),
        )
        .route("/jobseeker/resume", post(handlers::profile::upload_resume))
        .route("/jobseeker/resume", get(handlers::profile::download_resume))
        .route("/jobseeker/photo", post(handlers::profile::upload_photo))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health))
}
