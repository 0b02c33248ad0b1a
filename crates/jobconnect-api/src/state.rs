//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use jobconnect_auth::jwt::{JwtDecoder, JwtEncoder};
use jobconnect_auth::password::{PasswordHasher, PasswordValidator};
use jobconnect_core::config::AppConfig;
use jobconnect_storage::DocumentStore;

use jobconnect_database::repositories::application::ApplicationRepository;
use jobconnect_database::repositories::employer::EmployerRepository;
use jobconnect_database::repositories::job::JobRepository;
use jobconnect_database::repositories::jobseeker::JobSeekerRepository;
use jobconnect_database::repositories::password_reset::PasswordResetRepository;
use jobconnect_database::repositories::saved_job::SavedJobRepository;

use jobconnect_service::application::ApplicationService;
use jobconnect_service::auth::{AuthService, PasswordResetService};
use jobconnect_service::dashboard::DashboardService;
use jobconnect_service::job::JobService;
use jobconnect_service::profile::ProfileService;
use jobconnect_service::saved_job::SavedJobService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Uploaded document store
    pub store: Arc<DocumentStore>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Password policy validator
    pub password_validator: Arc<PasswordValidator>,

    // ── Repositories ─────────────────────────────────────────
    /// Employer repository
    pub employer_repo: Arc<EmployerRepository>,
    /// Job seeker repository
    pub jobseeker_repo: Arc<JobSeekerRepository>,
    /// Job repository
    pub job_repo: Arc<JobRepository>,
    /// Application repository
    pub application_repo: Arc<ApplicationRepository>,
    /// Saved job repository
    pub saved_job_repo: Arc<SavedJobRepository>,
    /// Password reset repository
    pub password_reset_repo: Arc<PasswordResetRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Auth service
    pub auth_service: Arc<AuthService>,
    /// Password reset service
    pub password_reset_service: Arc<PasswordResetService>,
    /// Job service
    pub job_service: Arc<JobService>,
    /// Application service
    pub application_service: Arc<ApplicationService>,
    /// Saved job service
    pub saved_job_service: Arc<SavedJobService>,
    /// Profile service
    pub profile_service: Arc<ProfileService>,
    /// Dashboard service
    pub dashboard_service: Arc<DashboardService>,
}
