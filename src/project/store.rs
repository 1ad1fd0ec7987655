// src/project/store.rs

use crate::project::types::{CreateProjectRequest, Project, UpdateProjectRequest};
use crate::store::{require_uuid, StoreError, StoreResult};
use chrono::{NaiveDateTime, TimeZone, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ProjectStore {
    pool: SqlitePool,
}

impl ProjectStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: &str) -> StoreResult<Project> {
        require_uuid(id, "project id must be a valid UUID")?;

        let row = sqlx::query(
            r#"
            SELECT id, name, description, owner_id, deleted, created_at, updated_at
            FROM projects
            WHERE id = ? AND deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_project).ok_or(StoreError::NotFound)
    }

    pub async fn list_by_owner(&self, owner_id: &str) -> StoreResult<Vec<Project>> {
        require_uuid(owner_id, "owner id must be a valid UUID")?;

        let rows = sqlx::query(
            r#"
            SELECT id, name, description, owner_id, deleted, created_at, updated_at
            FROM projects
            WHERE owner_id = ? AND deleted = FALSE
            ORDER BY updated_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_project).collect())
    }

    pub async fn create(&self, input: CreateProjectRequest) -> StoreResult<Project> {
        if input.name.trim().is_empty() {
            return Err(StoreError::Validation("name is required"));
        }
        require_uuid(&input.owner_id, "owner id must be a valid UUID")?;

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO projects (id, name, description, owner_id, deleted, created_at, updated_at)
            VALUES (?, ?, ?, ?, FALSE, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.owner_id)
        .bind(now.naive_utc())
        .bind(now.naive_utc())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() < 1 {
            return Err(StoreError::FailedInsert);
        }

        Ok(Project {
            id,
            name: input.name,
            description: input.description,
            owner_id: input.owner_id,
            deleted: false,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn update(&self, id: &str, patch: UpdateProjectRequest) -> StoreResult<Project> {
        let mut project = self.get(id).await?;

        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(StoreError::Validation("name must not be empty"));
            }
            project.name = name;
        }
        if let Some(description) = patch.description {
            project.description = description;
        }

        project.updated_at = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE projects
            SET name = ?, description = ?, updated_at = ?
            WHERE id = ? AND deleted = FALSE
            "#,
        )
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.updated_at.naive_utc())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() < 1 {
            return Err(StoreError::FailedUpdate);
        }

        Ok(project)
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        require_uuid(id, "project id must be a valid UUID")?;

        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE projects SET deleted = TRUE, updated_at = ? WHERE id = ? AND deleted = FALSE",
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

fn row_to_project(row: sqlx::sqlite::SqliteRow) -> Project {
    let created_at: NaiveDateTime = row.get("created_at");
    let updated_at: NaiveDateTime = row.get("updated_at");

    Project {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        owner_id: row.get("owner_id"),
        deleted: row.get("deleted"),
        created_at: Utc.from_utc_datetime(&created_at),
        updated_at: Utc.from_utc_datetime(&updated_at),
    }
}
