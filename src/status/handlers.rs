// src/status/handlers.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::state::AppState;
use crate::status::types::{
    CreateStatusRequest, ListStatusesQuery, Status, StatusesResponse, UpdateStatusRequest,
};

pub async fn list_statuses(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListStatusesQuery>,
) -> ApiResult<Json<StatusesResponse>> {
    let statuses = state.statuses.list_by_project(&query.project_id).await?;
    Ok(Json(StatusesResponse {
        total: statuses.len(),
        statuses,
    }))
}

pub async fn get_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Status>> {
    let status = state.statuses.get(&id).await?;
    Ok(Json(status))
}

pub async fn create_status(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateStatusRequest>,
) -> ApiResult<(StatusCode, Json<Status>)> {
    let status = state.statuses.create(payload).await?;
    Ok((StatusCode::CREATED, Json(status)))
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> ApiResult<Json<Status>> {
    let status = state.statuses.update(&id, payload).await?;
    Ok(Json(status))
}

pub async fn delete_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.statuses.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
