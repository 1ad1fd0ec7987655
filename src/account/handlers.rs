// src/account/handlers.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::account::types::{
    Account, AccountsResponse, CreateAccountRequest, UpdateAccountRequest,
};
use crate::api::error::ApiResult;
use crate::state::AppState;

pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AccountsResponse>> {
    let accounts = state.accounts.list().await?;
    Ok(Json(AccountsResponse {
        total: accounts.len(),
        accounts,
    }))
}

pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Account>> {
    let account = state.accounts.get(&id).await?;
    Ok(Json(account))
}

pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateAccountRequest>,
) -> ApiResult<(StatusCode, Json<Account>)> {
    let account = state.accounts.create(payload).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

pub async fn update_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAccountRequest>,
) -> ApiResult<Json<Account>> {
    let account = state.accounts.update(&id, payload).await?;
    Ok(Json(account))
}

pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.accounts.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
