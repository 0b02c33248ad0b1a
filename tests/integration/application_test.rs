//! Integration tests for the application lifecycle.

use http::StatusCode;

use crate::helpers::{MultipartForm, TestApp, unique_email};

const FAKE_PDF: &[u8] = b"%PDF-1.4 fake resume content";

async fn apply(app: &TestApp, token: &str, job_id: &str) -> crate::helpers::TestResponse {
    let form = MultipartForm::new()
        .text("cover_letter", "I am a great fit for this role.")
        .file("resume", "resume.pdf", FAKE_PDF);
    app.multipart_request(
        "POST",
        &format!("/api/jobs/{job_id}/apply"),
        form,
        Some(token),
    )
    .await
}

#[tokio::test]
async fn test_apply_and_employer_review_flow() {
    let app = TestApp::new().await;
    let employer = app
        .register("Review Corp", &unique_email("review-emp"), "employer")
        .await;
    let seeker = app
        .register("App Licant", &unique_email("review-seek"), "jobseeker")
        .await;
    let job_id = app.post_job(&employer, "Reviewed Role").await.to_string();

    let response = apply(&app, &seeker, &job_id).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["status"], "pending");
    let application_id = response.body["data"]["id"].as_str().unwrap().to_string();

    // Application counter bumped on the job.
    let response = app
        .request("GET", &format!("/api/jobs/{job_id}"), None, None)
        .await;
    assert_eq!(response.body["data"]["application_count"], 1);

    // Employer sees the application with applicant info.
    let response = app
        .request("GET", "/api/employer/applications", None, Some(&employer))
        .await;
    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["first_name"], "App");
    assert_eq!(items[0]["job_title"], "Reviewed Role");

    // Employer walks the status workflow.
    for status in ["reviewed", "shortlisted", "interviewed", "offered", "hired"] {
        let response = app
            .request(
                "PUT",
                &format!("/api/applications/{application_id}/status"),
                Some(serde_json::json!({ "status": status })),
                Some(&employer),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{status}");
        assert_eq!(response.body["data"]["status"], status);
    }

    // Seeker sees the final status on their side.
    let response = app
        .request("GET", "/api/jobseeker/applications", None, Some(&seeker))
        .await;
    let items = response.body["data"]["applications"]["items"].as_array().unwrap();
    assert_eq!(items[0]["status"], "hired");
    assert_eq!(response.body["data"]["status_counts"]["hired"], 1);
}

#[tokio::test]
async fn test_duplicate_application_rejected() {
    let app = TestApp::new().await;
    let employer = app
        .register("Dup Corp", &unique_email("dup-emp"), "employer")
        .await;
    let seeker = app
        .register("Twice Applier", &unique_email("dup-seek"), "jobseeker")
        .await;
    let job_id = app.post_job(&employer, "Popular Role").await.to_string();

    assert_eq!(apply(&app, &seeker, &job_id).await.status, StatusCode::OK);
    assert_eq!(
        apply(&app, &seeker, &job_id).await.status,
        StatusCode::CONFLICT
    );
}

#[tokio::test]
async fn test_apply_requires_cover_letter_and_resume() {
    let app = TestApp::new().await;
    let employer = app
        .register("Strict Corp", &unique_email("strict-emp"), "employer")
        .await;
    let seeker = app
        .register("Hasty Applier", &unique_email("strict-seek"), "jobseeker")
        .await;
    let job_id = app.post_job(&employer, "Strict Role").await.to_string();

    // Missing cover letter.
    let form = MultipartForm::new().file("resume", "resume.pdf", FAKE_PDF);
    let response = app
        .multipart_request(
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            form,
            Some(&seeker),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Missing resume (and no profile resume to fall back on).
    let form = MultipartForm::new().text("cover_letter", "No resume attached.");
    let response = app
        .multipart_request(
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            form,
            Some(&seeker),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Wrong file type.
    let form = MultipartForm::new()
        .text("cover_letter", "Nice try.")
        .file("resume", "resume.exe", b"MZ");
    let response = app
        .multipart_request(
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            form,
            Some(&seeker),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_apply_with_existing_profile_resume() {
    let app = TestApp::new().await;
    let employer = app
        .register("Profile Corp", &unique_email("profile-emp"), "employer")
        .await;
    let seeker = app
        .register("Prepared Applier", &unique_email("profile-seek"), "jobseeker")
        .await;
    let job_id = app.post_job(&employer, "Prepared Role").await.to_string();

    // Upload a profile resume first.
    let form = MultipartForm::new().file("resume", "profile-cv.pdf", FAKE_PDF);
    let response = app
        .multipart_request("POST", "/api/jobseeker/resume", form, Some(&seeker))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    // Apply reusing it.
    let form = MultipartForm::new()
        .text("cover_letter", "Using my stored resume.")
        .text("use_existing_resume", "true");
    let response = app
        .multipart_request(
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            form,
            Some(&seeker),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert!(response.body["data"]["resume"].is_string());
}

#[tokio::test]
async fn test_apply_to_draft_job_fails() {
    let app = TestApp::new().await;
    let employer = app
        .register("Draft Apply Corp", &unique_email("da-emp"), "employer")
        .await;
    let seeker = app
        .register("Eager Applier", &unique_email("da-seek"), "jobseeker")
        .await;

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(serde_json::json!({
                "title": "Unpublished Role",
                "description": "Still a draft.",
                "job_type": "full_time",
                "category": "technology",
                "save_as_draft": true,
            })),
            Some(&employer),
        )
        .await;
    let job_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = apply(&app, &seeker, &job_id).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_employer_cannot_apply() {
    let app = TestApp::new().await;
    let employer = app
        .register("Self Corp", &unique_email("self-emp"), "employer")
        .await;
    let job_id = app.post_job(&employer, "Own Role").await.to_string();

    let response = apply(&app, &employer, &job_id).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_status_update_requires_job_ownership() {
    let app = TestApp::new().await;
    let employer = app
        .register("Owner Corp", &unique_email("own-emp"), "employer")
        .await;
    let rival = app
        .register("Rival Corp", &unique_email("rival-emp"), "employer")
        .await;
    let seeker = app
        .register("Contested Applier", &unique_email("own-seek"), "jobseeker")
        .await;
    let job_id = app.post_job(&employer, "Contested Role").await.to_string();

    let response = apply(&app, &seeker, &job_id).await;
    let application_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/applications/{application_id}/status"),
            Some(serde_json::json!({ "status": "rejected" })),
            Some(&rival),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_resume_download() {
    let app = TestApp::new().await;
    let employer = app
        .register("Export Corp", &unique_email("export-emp"), "employer")
        .await;
    let seeker = app
        .register("Exported Applier", &unique_email("export-seek"), "jobseeker")
        .await;
    let job_id = app.post_job(&employer, "Exported Role").await.to_string();

    let response = apply(&app, &seeker, &job_id).await;
    let application_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "GET",
            &format!("/api/applications/{application_id}/resume"),
            None,
            Some(&employer),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.raw, FAKE_PDF);

    // A third party gets turned away.
    let outsider = app
        .register("Outsider Corp", &unique_email("outsider"), "employer")
        .await;
    let response = app
        .request(
            "GET",
            &format!("/api/applications/{application_id}/resume"),
            None,
            Some(&outsider),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_withdraw_application() {
    let app = TestApp::new().await;
    let employer = app
        .register("Withdraw Corp", &unique_email("wd-emp"), "employer")
        .await;
    let seeker = app
        .register("Fickle Applier", &unique_email("wd-seek"), "jobseeker")
        .await;
    let job_id = app.post_job(&employer, "Withdrawn Role").await.to_string();

    let response = apply(&app, &seeker, &job_id).await;
    let application_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/applications/{application_id}"),
            None,
            Some(&seeker),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Counter back to zero, listing empty on both sides.
    let response = app
        .request("GET", &format!("/api/jobs/{job_id}"), None, None)
        .await;
    assert_eq!(response.body["data"]["application_count"], 0);

    let response = app
        .request("GET", "/api/employer/applications", None, Some(&employer))
        .await;
    assert_eq!(response.body["data"]["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_dashboards_reflect_activity() {
    let app = TestApp::new().await;
    let employer = app
        .register("Dash Corp", &unique_email("dash-emp"), "employer")
        .await;
    let seeker = app
        .register("Dash Applier", &unique_email("dash-seek"), "jobseeker")
        .await;
    let job_id = app.post_job(&employer, "Dashboard Role").await.to_string();

    apply(&app, &seeker, &job_id).await;

    let response = app
        .request("GET", "/api/employer/dashboard", None, Some(&employer))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["job_counts"]["active"], 1);
    assert_eq!(response.body["data"]["total_applications"], 1);
    assert_eq!(
        response.body["data"]["recent_applications"]
            .as_array()
            .unwrap()
            .len(),
        1
    );

    let response = app
        .request("GET", "/api/jobseeker/dashboard", None, Some(&seeker))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["application_counts"]["total"], 1);
    assert_eq!(response.body["data"]["application_counts"]["pending"], 1);
}
