//! JobConnect Server — job board backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use jobconnect_core::config::AppConfig;
use jobconnect_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("JOBCONNECT_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting JobConnect v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db_pool = jobconnect_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    jobconnect_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Initialize document storage ──────────────────────
    tracing::info!("Initializing document storage...");
    let store = Arc::new(jobconnect_storage::DocumentStore::new(&config.storage.data_root).await?);
    tracing::info!("Document storage initialized");

    // ── Step 3: Initialize repositories ──────────────────────────
    let employer_repo = Arc::new(
        jobconnect_database::repositories::employer::EmployerRepository::new(db_pool.clone()),
    );
    let jobseeker_repo = Arc::new(
        jobconnect_database::repositories::jobseeker::JobSeekerRepository::new(db_pool.clone()),
    );
    let job_repo = Arc::new(jobconnect_database::repositories::job::JobRepository::new(
        db_pool.clone(),
    ));
    let application_repo = Arc::new(
        jobconnect_database::repositories::application::ApplicationRepository::new(db_pool.clone()),
    );
    let saved_job_repo = Arc::new(
        jobconnect_database::repositories::saved_job::SavedJobRepository::new(db_pool.clone()),
    );
    let password_reset_repo = Arc::new(
        jobconnect_database::repositories::password_reset::PasswordResetRepository::new(
            db_pool.clone(),
        ),
    );

    // ── Step 4: Initialize auth primitives ───────────────────────
    tracing::info!("Initializing authentication...");
    let password_hasher = Arc::new(jobconnect_auth::password::hasher::PasswordHasher::new());
    let password_validator = Arc::new(jobconnect_auth::password::validator::PasswordValidator::new(
        &config.auth,
    ));
    let jwt_encoder = Arc::new(jobconnect_auth::jwt::encoder::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(jobconnect_auth::jwt::decoder::JwtDecoder::new(&config.auth));

    // ── Step 5: Initialize services ──────────────────────────────
    tracing::info!("Initializing services...");
    let auth_service = Arc::new(jobconnect_service::auth::AuthService::new(
        Arc::clone(&employer_repo),
        Arc::clone(&jobseeker_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
    ));
    let password_reset_service = Arc::new(jobconnect_service::auth::PasswordResetService::new(
        Arc::clone(&employer_repo),
        Arc::clone(&jobseeker_repo),
        Arc::clone(&password_reset_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        config.auth.reset_token_ttl_minutes as i64,
    ));
    let job_service = Arc::new(jobconnect_service::job::JobService::new(
        Arc::clone(&job_repo),
        config.jobs.posting_ttl_days,
    ));
    let application_service = Arc::new(jobconnect_service::application::ApplicationService::new(
        Arc::clone(&application_repo),
        Arc::clone(&job_repo),
        Arc::clone(&jobseeker_repo),
        Arc::clone(&store),
    ));
    let saved_job_service = Arc::new(jobconnect_service::saved_job::SavedJobService::new(
        Arc::clone(&saved_job_repo),
        Arc::clone(&job_repo),
    ));
    let profile_service = Arc::new(jobconnect_service::profile::ProfileService::new(
        Arc::clone(&employer_repo),
        Arc::clone(&jobseeker_repo),
        Arc::clone(&store),
    ));
    let dashboard_service = Arc::new(jobconnect_service::dashboard::DashboardService::new(
        Arc::clone(&job_repo),
        Arc::clone(&application_repo),
        Arc::clone(&saved_job_repo),
        config.jobs.dashboard_recent_limit,
    ));
    tracing::info!("Services initialized");

    // ── Step 6: Build and start HTTP server ──────────────────────
    let app_state = jobconnect_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        store,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        password_validator,
        employer_repo,
        jobseeker_repo,
        job_repo,
        application_repo,
        saved_job_repo,
        password_reset_repo,
        auth_service,
        password_reset_service,
        job_service,
        application_service,
        saved_job_service,
        profile_service,
        dashboard_service,
    };

    let app = jobconnect_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("JobConnect server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("JobConnect server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
