// src/status/types.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A column on a project's board (e.g. "todo", "in progress", "done").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub id: String,
    pub name: String,
    pub project_id: String,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Request/Response types for API

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateStatusRequest {
    pub name: String,
    pub project_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListStatusesQuery {
    pub project_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusesResponse {
    pub statuses: Vec<Status>,
    pub total: usize,
}
