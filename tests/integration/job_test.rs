//! Integration tests for job posting and browsing.

use http::StatusCode;

use crate::helpers::{TestApp, unique_email, unique_keyword};

#[tokio::test]
async fn test_post_and_browse_job() {
    let app = TestApp::new().await;
    let token = app
        .register("Browse Co", &unique_email("browse"), "employer")
        .await;
    let keyword = unique_keyword();

    app.post_job(&token, &format!("Rust Engineer {keyword}"))
        .await;

    let response = app
        .request("GET", &format!("/api/jobs?keyword={keyword}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["company_name"], "Browse Co");
    assert_eq!(items[0]["status"], "active");
}

#[tokio::test]
async fn test_draft_job_not_browsable() {
    let app = TestApp::new().await;
    let token = app
        .register("Draft Co", &unique_email("draft"), "employer")
        .await;
    let keyword = unique_keyword();

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(serde_json::json!({
                "title": format!("Hidden Role {keyword}"),
                "description": "Not yet published.",
                "job_type": "full_time",
                "category": "technology",
                "save_as_draft": true,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "draft");

    let response = app
        .request("GET", &format!("/api/jobs?keyword={keyword}"), None, None)
        .await;
    assert_eq!(response.body["data"]["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_browse_filters_by_category_and_type() {
    let app = TestApp::new().await;
    let token = app
        .register("Filter Co", &unique_email("filter"), "employer")
        .await;
    let keyword = unique_keyword();

    app.request(
        "POST",
        "/api/jobs",
        Some(serde_json::json!({
            "title": format!("Ward Nurse {keyword}"),
            "description": "Hospital shift work.",
            "job_type": "part_time",
            "category": "healthcare",
        })),
        Some(&token),
    )
    .await;
    app.post_job(&token, &format!("Backend Developer {keyword}"))
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/jobs?keyword={keyword}&category=healthcare"),
            None,
            None,
        )
        .await;
    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["category"], "healthcare");

    let response = app
        .request(
            "GET",
            &format!("/api/jobs?keyword={keyword}&job_type=part_time"),
            None,
            None,
        )
        .await;
    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["job_type"], "part_time");
}

#[tokio::test]
async fn test_post_job_rejects_bad_salary_range() {
    let app = TestApp::new().await;
    let token = app
        .register("Salary Co", &unique_email("salary"), "employer")
        .await;

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(serde_json::json!({
                "title": "Inverted Salary",
                "description": "min > max",
                "job_type": "full_time",
                "category": "finance",
                "salary_min": 90000.0,
                "salary_max": 60000.0,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_job_rejects_unknown_category() {
    let app = TestApp::new().await;
    let token = app
        .register("Category Co", &unique_email("category"), "employer")
        .await;

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(serde_json::json!({
                "title": "Mystery Role",
                "description": "Category not in the taxonomy.",
                "job_type": "full_time",
                "category": "astrology",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_jobseeker_cannot_post_job() {
    let app = TestApp::new().await;
    let token = app
        .register("Sneaky Seeker", &unique_email("sneaky"), "jobseeker")
        .await;

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(serde_json::json!({
                "title": "Not Allowed",
                "description": "Job seekers cannot post.",
                "job_type": "full_time",
                "category": "technology",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_job_detail_increments_views() {
    let app = TestApp::new().await;
    let token = app
        .register("Views Co", &unique_email("views"), "employer")
        .await;
    let job_id = app.post_job(&token, "Viewed Role").await;

    app.request("GET", &format!("/api/jobs/{job_id}"), None, None)
        .await;
    let response = app
        .request("GET", &format!("/api/jobs/{job_id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    // Second fetch sees the first fetch's bump.
    assert_eq!(response.body["data"]["views"], 1);
}

#[tokio::test]
async fn test_update_job() {
    let app = TestApp::new().await;
    let token = app
        .register("Update Co", &unique_email("update"), "employer")
        .await;
    let job_id = app.post_job(&token, "Old Title").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/jobs/{job_id}"),
            Some(serde_json::json!({ "title": "New Title", "featured": true })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "New Title");
    assert_eq!(response.body["data"]["featured"], true);
}

#[tokio::test]
async fn test_update_job_requires_ownership() {
    let app = TestApp::new().await;
    let owner = app
        .register("Owner Co", &unique_email("owner"), "employer")
        .await;
    let other = app
        .register("Other Co", &unique_email("other"), "employer")
        .await;
    let job_id = app.post_job(&owner, "Owned Role").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/jobs/{job_id}"),
            Some(serde_json::json!({ "title": "Hijacked" })),
            Some(&other),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_close_and_reactivate_job() {
    let app = TestApp::new().await;
    let token = app
        .register("Close Co", &unique_email("close"), "employer")
        .await;
    let keyword = unique_keyword();
    let job_id = app.post_job(&token, &format!("Closable {keyword}")).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/jobs/{job_id}/status"),
            Some(serde_json::json!({ "status": "closed" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Closed jobs drop out of public browse.
    let response = app
        .request("GET", &format!("/api/jobs?keyword={keyword}"), None, None)
        .await;
    assert_eq!(response.body["data"]["items"].as_array().unwrap().len(), 0);

    // And the public detail page hides them, while the owner still sees them.
    let response = app
        .request("GET", &format!("/api/jobs/{job_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("GET", &format!("/api/jobs/{job_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Reactivation brings it back.
    app.request(
        "PUT",
        &format!("/api/jobs/{job_id}/status"),
        Some(serde_json::json!({ "status": "active" })),
        Some(&token),
    )
    .await;
    let response = app
        .request("GET", &format!("/api/jobs?keyword={keyword}"), None, None)
        .await;
    assert_eq!(response.body["data"]["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_job() {
    let app = TestApp::new().await;
    let token = app
        .register("Delete Co", &unique_email("delete"), "employer")
        .await;
    let job_id = app.post_job(&token, "Doomed Role").await;

    let response = app
        .request("DELETE", &format!("/api/jobs/{job_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/jobs/{job_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_employer_jobs_listing_with_counts() {
    let app = TestApp::new().await;
    let token = app
        .register("Counts Co", &unique_email("counts"), "employer")
        .await;

    app.post_job(&token, "Role One").await;
    app.post_job(&token, "Role Two").await;
    app.request(
        "POST",
        "/api/jobs",
        Some(serde_json::json!({
            "title": "Draft Role",
            "description": "Unpublished.",
            "job_type": "contract",
            "category": "technology",
            "save_as_draft": true,
        })),
        Some(&token),
    )
    .await;

    let response = app
        .request("GET", "/api/employer/jobs", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status_counts"]["active"], 2);
    assert_eq!(response.body["data"]["status_counts"]["draft"], 1);
    assert_eq!(
        response.body["data"]["jobs"]["items"].as_array().unwrap().len(),
        3
    );

    // Status filter narrows the listing.
    let response = app
        .request("GET", "/api/employer/jobs?status=draft", None, Some(&token))
        .await;
    assert_eq!(
        response.body["data"]["jobs"]["items"].as_array().unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_job_attributes_listing() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/jobs/attributes", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let categories = response.body["data"]["categories"].as_array().unwrap();
    assert!(categories.iter().any(|c| c == "technology"));
    assert_eq!(
        response.body["data"]["application_statuses"]
            .as_array()
            .unwrap()
            .len(),
        7
    );
}
