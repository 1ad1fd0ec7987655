// src/status/store.rs

use crate::status::types::{CreateStatusRequest, Status, UpdateStatusRequest};
use crate::store::{require_uuid, StoreError, StoreResult};
use chrono::{NaiveDateTime, TimeZone, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct StatusStore {
    pool: SqlitePool,
}

impl StatusStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: &str) -> StoreResult<Status> {
        require_uuid(id, "status id must be a valid UUID")?;

        let row = sqlx::query(
            r#"
            SELECT id, name, project_id, deleted, created_at, updated_at
            FROM statuses
            WHERE id = ? AND deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_status).ok_or(StoreError::NotFound)
    }

    pub async fn list_by_project(&self, project_id: &str) -> StoreResult<Vec<Status>> {
        require_uuid(project_id, "project id must be a valid UUID")?;

        let rows = sqlx::query(
            r#"
            SELECT id, name, project_id, deleted, created_at, updated_at
            FROM statuses
            WHERE project_id = ? AND deleted = FALSE
            ORDER BY created_at
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_status).collect())
    }

    pub async fn create(&self, input: CreateStatusRequest) -> StoreResult<Status> {
        if input.name.trim().is_empty() {
            return Err(StoreError::Validation("name is required"));
        }
        require_uuid(&input.project_id, "project id must be a valid UUID")?;

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO statuses (id, name, project_id, deleted, created_at, updated_at)
            VALUES (?, ?, ?, FALSE, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&input.name)
        .bind(&input.project_id)
        .bind(now.naive_utc())
        .bind(now.naive_utc())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() < 1 {
            return Err(StoreError::FailedInsert);
        }

        Ok(Status {
            id,
            name: input.name,
            project_id: input.project_id,
            deleted: false,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn update(&self, id: &str, patch: UpdateStatusRequest) -> StoreResult<Status> {
        let mut status = self.get(id).await?;

        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(StoreError::Validation("name must not be empty"));
            }
            status.name = name;
        }

        status.updated_at = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE statuses
            SET name = ?, updated_at = ?
            WHERE id = ? AND deleted = FALSE
            "#,
        )
        .bind(&status.name)
        .bind(status.updated_at.naive_utc())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() < 1 {
            return Err(StoreError::FailedUpdate);
        }

        Ok(status)
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        require_uuid(id, "status id must be a valid UUID")?;

        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE statuses SET deleted = TRUE, updated_at = ? WHERE id = ? AND deleted = FALSE",
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

fn row_to_status(row: sqlx::sqlite::SqliteRow) -> Status {
    let created_at: NaiveDateTime = row.get("created_at");
    let updated_at: NaiveDateTime = row.get("updated_at");

    Status {
        id: row.get("id"),
        name: row.get("name"),
        project_id: row.get("project_id"),
        deleted: row.get("deleted"),
        created_at: Utc.from_utc_datetime(&created_at),
        updated_at: Utc.from_utc_datetime(&updated_at),
    }
}
