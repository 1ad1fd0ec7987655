// src/task/store.rs

use crate::store::{require_uuid, StoreError, StoreResult};
use crate::task::types::{CreateTaskRequest, Task, UpdateTaskRequest};
use chrono::{NaiveDateTime, TimeZone, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct TaskStore {
    pool: SqlitePool,
}

impl TaskStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: &str) -> StoreResult<Task> {
        require_uuid(id, "task id must be a valid UUID")?;

        let row = sqlx::query(
            r#"
            SELECT id, name, project_id, status_id, start_at, end_at, deleted, created_at, updated_at
            FROM tasks
            WHERE id = ? AND deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_task).ok_or(StoreError::NotFound)
    }

    /// Tasks of a project, optionally narrowed to a single status column.
    pub async fn list_by_project(
        &self,
        project_id: &str,
        status_id: Option<&str>,
    ) -> StoreResult<Vec<Task>> {
        require_uuid(project_id, "project id must be a valid UUID")?;

        let rows = match status_id {
            Some(status_id) => {
                require_uuid(status_id, "status id must be a valid UUID")?;
                sqlx::query(
                    r#"
                    SELECT id, name, project_id, status_id, start_at, end_at, deleted, created_at, updated_at
                    FROM tasks
                    WHERE project_id = ? AND status_id = ? AND deleted = FALSE
                    ORDER BY start_at
                    "#,
                )
                .bind(project_id)
                .bind(status_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT id, name, project_id, status_id, start_at, end_at, deleted, created_at, updated_at
                    FROM tasks
                    WHERE project_id = ? AND deleted = FALSE
                    ORDER BY start_at
                    "#,
                )
                .bind(project_id)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(row_to_task).collect())
    }

    pub async fn create(&self, input: CreateTaskRequest) -> StoreResult<Task> {
        if input.name.trim().is_empty() {
            return Err(StoreError::Validation("name is required"));
        }
        require_uuid(&input.project_id, "project id must be a valid UUID")?;
        require_uuid(&input.status_id, "status id must be a valid UUID")?;
        if input.end_at < input.start_at {
            return Err(StoreError::Validation("end must not precede start"));
        }

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO tasks (id, name, project_id, status_id, start_at, end_at, deleted, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, FALSE, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&input.name)
        .bind(&input.project_id)
        .bind(&input.status_id)
        .bind(input.start_at.naive_utc())
        .bind(input.end_at.naive_utc())
        .bind(now.naive_utc())
        .bind(now.naive_utc())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() < 1 {
            return Err(StoreError::FailedInsert);
        }

        Ok(Task {
            id,
            name: input.name,
            project_id: input.project_id,
            status_id: input.status_id,
            start_at: input.start_at,
            end_at: input.end_at,
            deleted: false,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn update(&self, id: &str, patch: UpdateTaskRequest) -> StoreResult<Task> {
        // The schedule window moves as a whole.
        if patch.start_at.is_some() != patch.end_at.is_some() {
            return Err(StoreError::Validation("start and end must be updated together"));
        }

        let mut task = self.get(id).await?;

        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(StoreError::Validation("name must not be empty"));
            }
            task.name = name;
        }
        if let Some(status_id) = patch.status_id {
            require_uuid(&status_id, "status id must be a valid UUID")?;
            task.status_id = status_id;
        }
        if let (Some(start_at), Some(end_at)) = (patch.start_at, patch.end_at) {
            task.start_at = start_at;
            task.end_at = end_at;
        }
        if task.end_at < task.start_at {
            return Err(StoreError::Validation("end must not precede start"));
        }

        task.updated_at = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET name = ?, status_id = ?, start_at = ?, end_at = ?, updated_at = ?
            WHERE id = ? AND deleted = FALSE
            "#,
        )
        .bind(&task.name)
        .bind(&task.status_id)
        .bind(task.start_at.naive_utc())
        .bind(task.end_at.naive_utc())
        .bind(task.updated_at.naive_utc())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() < 1 {
            return Err(StoreError::FailedUpdate);
        }

        Ok(task)
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        require_uuid(id, "task id must be a valid UUID")?;

        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE tasks SET deleted = TRUE, updated_at = ? WHERE id = ? AND deleted = FALSE",
        )
        .bind(now.naive_utc())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() < 1 {
            return Err(StoreError::FailedUpdate);
        }

        Ok(())
    }
}

fn row_to_task(row: sqlx::sqlite::SqliteRow) -> Task {
    let start_at: NaiveDateTime = row.get("start_at");
    let end_at: NaiveDateTime = row.get("end_at");
    let created_at: NaiveDateTime = row.get("created_at");
    let updated_at: NaiveDateTime = row.get("updated_at");

    Task {
        id: row.get("id"),
        name: row.get("name"),
        project_id: row.get("project_id"),
        status_id: row.get("status_id"),
        start_at: Utc.from_utc_datetime(&start_at),
        end_at: Utc.from_utc_datetime(&end_at),
        deleted: row.get("deleted"),
        created_at: Utc.from_utc_datetime(&created_at),
        updated_at: Utc.from_utc_datetime(&updated_at),
    }
}
