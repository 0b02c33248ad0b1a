//! Integration tests for registration, login, and password flows.

use http::StatusCode;

use crate::helpers::{self, STRONG_PASSWORD, TestApp, unique_email};

#[tokio::test]
async fn test_register_employer_and_login() {
    let app = TestApp::new().await;
    let email = unique_email("employer");

    app.register("Acme Corp", &email, "employer").await;

    let token = app.login(&email, STRONG_PASSWORD).await;
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Acme Corp");
    assert_eq!(response.body["data"]["account_type"], "employer");
}

#[tokio::test]
async fn test_register_jobseeker_splits_name() {
    let app = TestApp::new().await;
    let email = unique_email("seeker");

    let token = app.register("Ada Lovelace", &email, "jobseeker").await;

    let response = app
        .request("GET", "/api/jobseeker/profile", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["first_name"], "Ada");
    assert_eq!(response.body["data"]["last_name"], "Lovelace");
}

#[tokio::test]
async fn test_register_duplicate_email_across_account_types() {
    let app = TestApp::new().await;
    let email = unique_email("dup");

    app.register("First Corp", &email, "employer").await;

    // Same email as a jobseeker must also be rejected.
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Dup Licate",
                "email": email,
                "password": STRONG_PASSWORD,
                "confirm_password": STRONG_PASSWORD,
                "account_type": "jobseeker",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_password_mismatch() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Mismatch Co",
                "email": unique_email("mismatch"),
                "password": STRONG_PASSWORD,
                "confirm_password": "Different-Pass-99",
                "account_type": "employer",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_weak_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Weak Co",
                "email": unique_email("weak"),
                "password": "password123",
                "confirm_password": "password123",
                "account_type": "employer",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    let email = unique_email("wrongpw");
    app.register("Wrong PW", &email, "jobseeker").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": email,
                "password": "Not-The-Password-7",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": unique_email("nobody"),
                "password": STRONG_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_unauthenticated() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_token() {
    let app = TestApp::new().await;
    let email = unique_email("refresh");

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Refresh Co",
                "email": email,
                "password": STRONG_PASSWORD,
                "confirm_password": STRONG_PASSWORD,
                "account_type": "employer",
            })),
            None,
        )
        .await;
    let refresh_token = response.body["data"]["refresh_token"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["access_token"].is_string());
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = TestApp::new().await;
    let email = unique_email("refresh-access");
    let access_token = app.register("Refresh Co", &email, "employer").await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": access_token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_change_password() {
    let app = TestApp::new().await;
    let email = unique_email("changepw");
    let token = app.register("Change Pw", &email, "jobseeker").await;

    let new_password = "Brisk-Meadow-Lantern-8";
    let response = app
        .request(
            "PUT",
            "/api/account/password",
            Some(serde_json::json!({
                "current_password": STRONG_PASSWORD,
                "new_password": new_password,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    // Old password no longer works, new one does.
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": email, "password": STRONG_PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    app.login(&email, new_password).await;
}

#[tokio::test]
async fn test_forgot_password_is_generic_for_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/forgot-password",
            Some(serde_json::json!({ "email": unique_email("ghost") })),
            None,
        )
        .await;

    // Unknown emails get the same response as known ones.
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_password_reset_flow() {
    let app = TestApp::new().await;
    let email = unique_email("reset");
    app.register("Reset Me", &email, "jobseeker").await;

    let response = app
        .request(
            "POST",
            "/api/auth/forgot-password",
            Some(serde_json::json!({ "email": email })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // No mailer in the stack; fish the token out of the database the way
    // an operator would deliver it out of band.
    let (token,): (String,) =
        sqlx::query_as("SELECT token FROM password_resets WHERE email = $1")
            .bind(&email)
            .fetch_one(&app.db_pool)
            .await
            .expect("reset token row should exist");

    let new_password = "Quiet-Orchard-Signal-3";
    let response = app
        .request(
            "POST",
            "/api/auth/reset-password",
            Some(serde_json::json!({
                "token": token,
                "email": email,
                "new_password": new_password,
                "confirm_password": new_password,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    app.login(&email, new_password).await;

    // Token is single-use.
    let response = app
        .request(
            "POST",
            "/api/auth/reset-password",
            Some(serde_json::json!({
                "token": token,
                "email": email,
                "new_password": "Another-Strong-Pass-5",
                "confirm_password": "Another-Strong-Pass-5",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reset_with_bogus_token() {
    let app = TestApp::new().await;
    let email = unique_email("bogus");
    app.register("Bogus Token", &email, "jobseeker").await;

    let response = app
        .request(
            "POST",
            "/api/auth/reset-password",
            Some(serde_json::json!({
                "token": "deadbeef".repeat(8),
                "email": email,
                "new_password": helpers::STRONG_PASSWORD,
                "confirm_password": helpers::STRONG_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
