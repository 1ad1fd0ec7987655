// src/task/handlers.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::state::AppState;
use crate::task::types::{
    CreateTaskRequest, ListTasksQuery, Task, TasksResponse, UpdateTaskRequest,
};

pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListTasksQuery>,
) -> ApiResult<Json<TasksResponse>> {
    let tasks = state
        .tasks
        .list_by_project(&query.project_id, query.status_id.as_deref())
        .await?;
    Ok(Json(TasksResponse {
        total: tasks.len(),
        tasks,
    }))
}

pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Task>> {
    let task = state.tasks.get(&id).await?;
    Ok(Json(task))
}

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let task = state.tasks.create(payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    let task = state.tasks.update(&id, payload).await?;
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.tasks.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
