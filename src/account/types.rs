// src/account/types.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Request/Response types for API

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountsResponse {
    pub accounts: Vec<Account>,
    pub total: usize,
}
