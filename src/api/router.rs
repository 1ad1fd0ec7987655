// src/api/router.rs
// HTTP router composition for REST API endpoints

use axum::{
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::account::handlers::{
    create_account, delete_account, get_account, list_accounts, update_account,
};
use crate::project::handlers::{
    create_project, delete_project, get_project, list_projects, update_project,
};
use crate::state::AppState;
use crate::status::handlers::{
    create_status, delete_status, get_status, list_statuses, update_status,
};
use crate::task::handlers::{create_task, delete_task, get_task, list_tasks, update_task};

/// Main application router: one route group per entity.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(health_handler))
        // Accounts
        .route("/accounts", get(list_accounts).post(create_account))
        .route(
            "/accounts/{id}",
            get(get_account).patch(update_account).delete(delete_account),
        )
        // Projects
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).patch(update_project).delete(delete_project),
        )
        // Statuses
        .route("/statuses", get(list_statuses).post(create_status))
        .route(
            "/statuses/{id}",
            get(get_status).patch(update_status).delete(delete_status),
        )
        // Tasks
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).patch(update_task).delete(delete_task),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
