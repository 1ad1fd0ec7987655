// tests/accounts_api.rs

mod test_helpers;

use axum::http::StatusCode;
use serde_json::json;
use test_helpers::{create_test_app, request};

#[tokio::test]
async fn account_crud_flow() {
    let app = create_test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/accounts",
        Some(json!({ "email": "dan@example.com", "name": "Dan", "avatar": null })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "dan@example.com");
    assert_eq!(body["deleted"], false);
    let id = body["id"].as_str().expect("account id").to_string();

    let (status, body) = request(&app, "GET", &format!("/accounts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["name"], "Dan");

    let (status, body) = request(&app, "GET", "/accounts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["accounts"][0]["id"], id.as_str());

    // Patch only the name; email must survive
    let (status, body) = request(
        &app,
        "PATCH",
        &format!("/accounts/{id}"),
        Some(json!({ "name": "Daniel" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Daniel");
    assert_eq!(body["email"], "dan@example.com");

    let (status, _) = request(&app, "DELETE", &format!("/accounts/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Soft-deleted rows vanish from get and list
    let (status, _) = request(&app, "GET", &format!("/accounts/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = request(&app, "GET", "/accounts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn create_account_rejects_empty_required_fields() {
    let app = create_test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/accounts",
        Some(json!({ "email": "", "name": "Dan" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "BAD_REQUEST");

    let (status, _) = request(
        &app,
        "POST",
        "/accounts",
        Some(json!({ "email": "dan@example.com", "name": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn account_routes_reject_malformed_ids() {
    let app = create_test_app().await;

    let (status, _) = request(&app, "GET", "/accounts/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(
        &app,
        "PATCH",
        "/accounts/not-a-uuid",
        Some(json!({ "name": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(&app, "DELETE", "/accounts/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_account_id_is_not_found() {
    let app = create_test_app().await;
    let id = uuid::Uuid::new_v4();

    let (status, body) = request(&app, "GET", &format!("/accounts/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_code"], "NOT_FOUND");

    let (status, _) = request(
        &app,
        "PATCH",
        &format!("/accounts/{id}"),
        Some(json!({ "name": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(&app, "DELETE", &format!("/accounts/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
