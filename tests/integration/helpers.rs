//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use jobconnect_core::config::AppConfig;

/// A password that satisfies the full policy (length, classes, entropy).
pub const STRONG_PASSWORD: &str = "Vast-Harbor-Quilt-42";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application wired exactly like the server binary.
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = jobconnect_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        jobconnect_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let store = Arc::new(
            jobconnect_storage::DocumentStore::new(&config.storage.data_root)
                .await
                .expect("Failed to init document store"),
        );

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
            jobconnect_database::repositories::application::ApplicationRepository::new(
                db_pool.clone(),
            ),
        );
        let saved_job_repo = Arc::new(
            jobconnect_database::repositories::saved_job::SavedJobRepository::new(db_pool.clone()),
        );
        let password_reset_repo = Arc::new(
            jobconnect_database::repositories::password_reset::PasswordResetRepository::new(
                db_pool.clone(),
            ),
        );

        let password_hasher = Arc::new(jobconnect_auth::password::hasher::PasswordHasher::new());
        let password_validator = Arc::new(
            jobconnect_auth::password::validator::PasswordValidator::new(&config.auth),
        );
        let jwt_encoder = Arc::new(jobconnect_auth::jwt::encoder::JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(jobconnect_auth::jwt::decoder::JwtDecoder::new(&config.auth));

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
        let application_service =
            Arc::new(jobconnect_service::application::ApplicationService::new(
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

        let router = jobconnect_api::router::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Register an account through the API, returning the access token.
    pub async fn register(&self, name: &str, email: &str, account_type: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "name": name,
                    "email": email,
                    "password": STRONG_PASSWORD,
                    "confirm_password": STRONG_PASSWORD,
                    "account_type": account_type,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Registration failed: {:?}",
            response.body
        );

        response.body["data"]["access_token"]
            .as_str()
            .expect("No access_token in register response")
            .to_string()
    }

    /// Login and return JWT access token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string()
    }

    /// Post a job as the given employer and return its ID.
    pub async fn post_job(&self, token: &str, title: &str) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/jobs",
                Some(serde_json::json!({
                    "title": title,
                    "description": "A role with real responsibilities.",
                    "job_type": "full_time",
                    "category": "technology",
                    "location": "Remote",
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Job posting failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("No job id in response")
    }

    /// Make a JSON HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a multipart/form-data request to the test app
    pub async fn multipart_request(
        &self,
        method: &str,
        path: &str,
        form: MultipartForm,
        token: Option<&str>,
    ) -> TestResponse {
        let (content_type, body) = form.finish();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", content_type);

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 10 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            raw: body_bytes.to_vec(),
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (Null for non-JSON responses)
    pub body: Value,
    /// Raw response bytes
    pub raw: Vec<u8>,
}

/// Builder for multipart/form-data request bodies.
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    /// Start a new form.
    pub fn new() -> Self {
        Self {
            boundary: format!("----jobconnect-test-{}", Uuid::new_v4().simple()),
            body: Vec::new(),
        }
    }

    /// Add a text field.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                self.boundary, name, value
            )
            .as_bytes(),
        );
        self
    }

    /// Add a file field.
    pub fn file(mut self, name: &str, filename: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n",
                self.boundary, name, filename
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Close the form, returning the Content-Type header value and body.
    pub fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (
            format!("multipart/form-data; boundary={}", self.boundary),
            self.body,
        )
    }
}

/// A unique email for this test run.
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@test.example", prefix, Uuid::new_v4().simple())
}

/// A unique keyword to scope browse assertions to this test's data.
pub fn unique_keyword() -> String {
    format!("kw{}", Uuid::new_v4().simple())
}
