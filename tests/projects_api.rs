// tests/projects_api.rs

mod test_helpers;

use axum::http::StatusCode;
use axum::Router;
use serde_json::json;
use test_helpers::{create_test_app, request};

async fn create_account(app: &Router) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/accounts",
        Some(json!({ "email": "owner@example.com", "name": "Owner" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("account id").to_string()
}

#[tokio::test]
async fn project_crud_flow() {
    let app = create_test_app().await;
    let owner_id = create_account(&app).await;

    let (status, body) = request(
        &app,
        "POST",
        "/projects",
        Some(json!({ "name": "Redesign", "description": "Website redesign", "owner_id": owner_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["owner_id"], owner_id.as_str());
    let id = body["id"].as_str().expect("project id").to_string();

    let (status, body) = request(&app, "GET", &format!("/projects/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Redesign");

    let (status, body) = request(
        &app,
        "GET",
        &format!("/projects?owner_id={owner_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["projects"][0]["id"], id.as_str());

    let (status, body) = request(
        &app,
        "PATCH",
        &format!("/projects/{id}"),
        Some(json!({ "description": "Q3 website redesign" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "Q3 website redesign");
    assert_eq!(body["name"], "Redesign");

    let (status, _) = request(&app, "DELETE", &format!("/projects/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = request(&app, "GET", &format!("/projects/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = request(
        &app,
        "GET",
        &format!("/projects?owner_id={owner_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn project_list_requires_owner_query_param() {
    let app = create_test_app().await;

    let (status, _) = request(&app, "GET", "/projects", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(&app, "GET", "/projects?owner_id=not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_project_validates_input() {
    let app = create_test_app().await;
    let owner_id = create_account(&app).await;

    let (status, _) = request(
        &app,
        "POST",
        "/projects",
        Some(json!({ "name": "", "owner_id": owner_id })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(
        &app,
        "POST",
        "/projects",
        Some(json!({ "name": "Redesign", "owner_id": "not-a-uuid" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn projects_are_scoped_to_their_owner() {
    let app = create_test_app().await;
    let owner_id = create_account(&app).await;

    let (status, body) = request(
        &app,
        "POST",
        "/accounts",
        Some(json!({ "email": "other@example.com", "name": "Other" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let other_id = body["id"].as_str().expect("account id").to_string();

    let (status, _) = request(
        &app,
        "POST",
        "/projects",
        Some(json!({ "name": "Mine", "owner_id": owner_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = request(&app, "GET", &format!("/projects?owner_id={other_id}"), None).await;
    assert_eq!(body["total"], 0);
}
