//! Integration tests for profile management and document uploads.

use http::StatusCode;

use crate::helpers::{MultipartForm, TestApp, unique_email};

#[tokio::test]
async fn test_update_jobseeker_profile() {
    let app = TestApp::new().await;
    let token = app
        .register("Pro File", &unique_email("jsprofile"), "jobseeker")
        .await;

    let response = app
        .request(
            "PUT",
            "/api/jobseeker/profile",
            Some(serde_json::json!({
                "headline": "Senior Rust Engineer",
                "location": "Berlin",
                "skills": "rust, sql, distributed systems",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["headline"], "Senior Rust Engineer");
    // Untouched fields survive partial updates.
    assert_eq!(response.body["data"]["first_name"], "Pro");

    let response = app
        .request("GET", "/api/jobseeker/profile", None, Some(&token))
        .await;
    assert_eq!(response.body["data"]["location"], "Berlin");
}

#[tokio::test]
async fn test_profile_never_leaks_password_hash() {
    let app = TestApp::new().await;
    let token = app
        .register("Hash Hidden", &unique_email("hash"), "jobseeker")
        .await;

    let response = app
        .request("GET", "/api/jobseeker/profile", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_resume_upload_and_download() {
    let app = TestApp::new().await;
    let token = app
        .register("Cv Haver", &unique_email("cv"), "jobseeker")
        .await;

    let content = b"%PDF-1.4 profile resume";
    let form = MultipartForm::new().file("resume", "cv.pdf", content);
    let response = app
        .multipart_request("POST", "/api/jobseeker/resume", form, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let response = app
        .request("GET", "/api/jobseeker/resume", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.raw, content);
}

#[tokio::test]
async fn test_resume_upload_rejects_bad_extension() {
    let app = TestApp::new().await;
    let token = app
        .register("Bad Upload", &unique_email("badext"), "jobseeker")
        .await;

    let form = MultipartForm::new().file("resume", "cv.exe", b"MZ");
    let response = app
        .multipart_request("POST", "/api/jobseeker/resume", form, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_employer_profile_and_logo() {
    let app = TestApp::new().await;
    let token = app
        .register("Logo Corp", &unique_email("logo"), "employer")
        .await;

    let response = app
        .request(
            "PUT",
            "/api/employer/profile",
            Some(serde_json::json!({
                "website": "https://logo.example",
                "industry": "technology",
                "company_size": "11-50",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["website"], "https://logo.example");

    let form = MultipartForm::new().file("logo", "logo.png", b"\x89PNG fake image");
    let response = app
        .multipart_request("POST", "/api/employer/logo", form, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let response = app
        .request("GET", "/api/employer/profile", None, Some(&token))
        .await;
    assert!(response.body["data"]["logo"].is_string());
}

#[tokio::test]
async fn test_jobseeker_cannot_access_employer_profile() {
    let app = TestApp::new().await;
    let token = app
        .register("Wrong Side", &unique_email("wrongside"), "jobseeker")
        .await;

    let response = app
        .request("GET", "/api/employer/profile", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
