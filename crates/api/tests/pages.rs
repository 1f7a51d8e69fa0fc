//! Integration tests for the portfolio page endpoints: filtering rules,
//! partitioning, 404 handling, and the data-load fallback.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, get};
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Write a portfolio document to a temp file and build an app over it.
///
/// The file must outlive the test, so it is returned alongside the app.
fn app_with_document(document: serde_json::Value) -> (Router, NamedTempFile) {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{document}").unwrap();
    let app = common::build_test_app(common::test_config(file.path().to_path_buf()));
    (app, file)
}

fn sample_document() -> serde_json::Value {
    json!({
        "personal_info": {
            "name": "Jane Doe",
            "title": "Software Engineer | Backend Developer",
            "summary": "Backend engineer.",
            "email": "jane@example.com"
        },
        "skills": {
            "backend": [
                {"name": "Rust", "proficiency_level": 8, "years_experience": 3.0, "is_featured": true},
                {"name": "PostgreSQL", "proficiency_level": 7, "years_experience": 4.0}
            ],
            "data": [
                {"name": "Kafka", "proficiency_level": 6, "years_experience": 2.0}
            ],
            "devops": []
        },
        "projects": [
            {"id": 1, "title": "Alpha", "slug": "alpha", "description": "First",
             "project_type": "backend", "status": "completed"},
            {"id": 2, "title": "Beta", "slug": "beta", "description": "Second",
             "project_type": "data", "status": "in_progress", "group": "professional"},
            {"id": 3, "title": "Gamma", "slug": "gamma", "description": "Third",
             "project_type": "backend", "status": "completed", "group": "other"},
            {"id": 4, "title": "Delta", "slug": "delta", "description": "Fourth",
             "project_type": "backend", "status": "completed", "group": "personal"}
        ],
        "experience": [
            {"company": "Acme", "position": "Engineer", "start_date": "2022-09-01",
             "current": true, "technologies": ["Rust", "Kafka"]},
            {"company": "Initech", "position": "Developer", "start_date": "2019-01-15",
             "end_date": "2022-08-31"}
        ]
    })
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_returns_first_three_projects_in_order() {
    let (app, _file) = app_with_document(sample_document());
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["template"], "home.html");

    let featured = body["context"]["featured_projects"].as_array().unwrap();
    let ids: Vec<_> = featured.iter().map(|p| p["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn home_splits_title_into_roles() {
    let (app, _file) = app_with_document(sample_document());
    let body = body_json(get(app, "/").await).await;

    assert_eq!(
        body["context"]["roles"],
        json!(["Software Engineer", "Backend Developer"])
    );
}

#[tokio::test]
async fn home_picks_first_experience_as_recent() {
    let (app, _file) = app_with_document(sample_document());
    let body = body_json(get(app, "/").await).await;

    assert_eq!(body["context"]["recent_experience"]["company"], "Acme");
    // Parsed ISO date round-trips as the same string.
    assert_eq!(
        body["context"]["recent_experience"]["start_date"],
        "2022-09-01"
    );
}

#[tokio::test]
async fn home_with_no_projects_has_empty_featured_list() {
    let mut document = sample_document();
    document["projects"] = json!([]);
    document["experience"] = json!([]);

    let (app, _file) = app_with_document(document);
    let body = body_json(get(app, "/").await).await;

    assert_eq!(body["context"]["featured_projects"], json!([]));
    assert_eq!(body["context"]["recent_experience"], json!(null));
}

// ---------------------------------------------------------------------------
// Projects listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn projects_partition_by_group() {
    let (app, _file) = app_with_document(sample_document());
    let response = get(app, "/projects").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["template"], "projects.html");

    let personal: Vec<_> = body["context"]["personal_projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    let professional: Vec<_> = body["context"]["professional_projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();

    // Absent group defaults to personal; "other" (id 3) lands in neither.
    assert_eq!(personal, vec![1, 4]);
    assert_eq!(professional, vec![2]);
}

#[tokio::test]
async fn listed_projects_carry_display_labels() {
    let (app, _file) = app_with_document(sample_document());
    let body = body_json(get(app, "/projects").await).await;

    let beta = &body["context"]["professional_projects"][0];
    assert_eq!(beta["type_label"], "Data");
    assert_eq!(beta["status_label"], "In Progress");
}

// ---------------------------------------------------------------------------
// Project detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn project_detail_returns_matching_project() {
    let (app, _file) = app_with_document(sample_document());
    let response = get(app, "/projects/2").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["template"], "project_detail.html");
    assert_eq!(body["context"]["project"]["title"], "Beta");
    assert_eq!(body["context"]["project"]["slug"], "beta");
    assert_eq!(body["context"]["project"]["status_label"], "In Progress");
}

#[tokio::test]
async fn project_detail_unknown_id_returns_404() {
    let (app, _file) = app_with_document(sample_document());
    let response = get(app, "/projects/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// About / Skills / Contact
// ---------------------------------------------------------------------------

#[tokio::test]
async fn about_passes_experience_through() {
    let (app, _file) = app_with_document(sample_document());
    let body = body_json(get(app, "/about").await).await;

    assert_eq!(body["template"], "about.html");
    assert_eq!(body["context"]["experiences"].as_array().unwrap().len(), 2);
    assert_eq!(body["context"]["personal_info"]["name"], "Jane Doe");
}

#[tokio::test]
async fn skills_passes_categories_through_verbatim() {
    let (app, _file) = app_with_document(sample_document());
    let body = body_json(get(app, "/skills").await).await;

    assert_eq!(body["template"], "skills.html");
    assert_eq!(body["context"]["backend_skills"].as_array().unwrap().len(), 2);
    assert_eq!(body["context"]["data_skills"].as_array().unwrap().len(), 1);
    assert_eq!(body["context"]["devops_skills"], json!([]));
}

#[tokio::test]
async fn contact_contains_personal_info_only() {
    let (app, _file) = app_with_document(sample_document());
    let body = body_json(get(app, "/contact").await).await;

    assert_eq!(body["template"], "contact.html");
    assert_eq!(body["context"]["personal_info"]["email"], "jane@example.com");
}

// ---------------------------------------------------------------------------
// Fail-open: bad or missing data still renders
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_data_file_serves_fallback() {
    let config = common::test_config(PathBuf::from("/nonexistent/portfolio_data.json"));
    let app = common::build_test_app(config);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["context"]["personal_info"]["name"], "Error");
    assert_eq!(body["context"]["featured_projects"], json!([]));
}

#[tokio::test]
async fn corrupt_data_file_serves_fallback() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ this is not json").unwrap();

    let app = common::build_test_app(common::test_config(file.path().to_path_buf()));
    let body = body_json(get(app, "/skills").await).await;

    assert_eq!(body["context"]["personal_info"]["name"], "Error");
    assert_eq!(body["context"]["backend_skills"], json!([]));
}

#[tokio::test]
async fn malformed_experience_date_serves_fallback() {
    let mut document = sample_document();
    document["experience"][0]["start_date"] = json!("not-a-date");

    let (app, _file) = app_with_document(document);
    let body = body_json(get(app, "/about").await).await;

    assert_eq!(body["context"]["personal_info"]["name"], "Error");
    assert_eq!(body["context"]["experiences"], json!([]));
}
