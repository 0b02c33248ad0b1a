//! Integration tests for saved jobs.

use http::StatusCode;

use crate::helpers::{TestApp, unique_email};

#[tokio::test]
async fn test_save_list_unsave() {
    let app = TestApp::new().await;
    let employer = app
        .register("Save Corp", &unique_email("save-emp"), "employer")
        .await;
    let seeker = app
        .register("Book Marker", &unique_email("save-seek"), "jobseeker")
        .await;
    let job_id = app.post_job(&employer, "Saveable Role").await.to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/jobs/{job_id}/save"),
            None,
            Some(&seeker),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let response = app
        .request("GET", "/api/jobseeker/saved-jobs", None, Some(&seeker))
        .await;
    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Saveable Role");
    assert_eq!(items[0]["company_name"], "Save Corp");

    let response = app
        .request(
            "DELETE",
            &format!("/api/jobs/{job_id}/save"),
            None,
            Some(&seeker),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/jobseeker/saved-jobs", None, Some(&seeker))
        .await;
    assert_eq!(response.body["data"]["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_save_twice_conflicts() {
    let app = TestApp::new().await;
    let employer = app
        .register("Twice Corp", &unique_email("twice-emp"), "employer")
        .await;
    let seeker = app
        .register("Double Saver", &unique_email("twice-seek"), "jobseeker")
        .await;
    let job_id = app.post_job(&employer, "Twice Saved Role").await.to_string();

    let path = format!("/api/jobs/{job_id}/save");
    assert_eq!(
        app.request("POST", &path, None, Some(&seeker)).await.status,
        StatusCode::OK
    );
    assert_eq!(
        app.request("POST", &path, None, Some(&seeker)).await.status,
        StatusCode::CONFLICT
    );
}

#[tokio::test]
async fn test_unsave_missing_is_not_found() {
    let app = TestApp::new().await;
    let employer = app
        .register("Missing Corp", &unique_email("missing-emp"), "employer")
        .await;
    let seeker = app
        .register("Empty Handed", &unique_email("missing-seek"), "jobseeker")
        .await;
    let job_id = app.post_job(&employer, "Unsaved Role").await.to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/jobs/{job_id}/save"),
            None,
            Some(&seeker),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_employer_cannot_save_jobs() {
    let app = TestApp::new().await;
    let employer = app
        .register("No Save Corp", &unique_email("nosave-emp"), "employer")
        .await;
    let job_id = app.post_job(&employer, "Unsaveable Role").await.to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/jobs/{job_id}/save"),
            None,
            Some(&employer),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
