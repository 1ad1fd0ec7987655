// src/state.rs

use crate::account::store::AccountStore;
use crate::project::store::ProjectStore;
use crate::status::store::StatusStore;
use crate::task::store::TaskStore;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountStore>,
    pub projects: Arc<ProjectStore>,
    pub statuses: Arc<StatusStore>,
    pub tasks: Arc<TaskStore>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            accounts: Arc::new(AccountStore::new(pool.clone())),
            projects: Arc::new(ProjectStore::new(pool.clone())),
            statuses: Arc::new(StatusStore::new(pool.clone())),
            tasks: Arc::new(TaskStore::new(pool)),
        }
    }
}
