// src/account/store.rs

use crate::account::types::{Account, CreateAccountRequest, UpdateAccountRequest};
use crate::store::{require_uuid, StoreError, StoreResult};
use chrono::{NaiveDateTime, TimeZone, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct AccountStore {
    pool: SqlitePool,
}

impl AccountStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: &str) -> StoreResult<Account> {
        require_uuid(id, "account id must be a valid UUID")?;

        let row = sqlx::query(
            r#"
            SELECT id, email, name, avatar, deleted, created_at, updated_at
            FROM accounts
            WHERE id = ? AND deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_account).ok_or(StoreError::NotFound)
    }

    pub async fn list(&self) -> StoreResult<Vec<Account>> {
        let rows = sqlx::query(
            r#"
            SELECT id, email, name, avatar, deleted, created_at, updated_at
            FROM accounts
            WHERE deleted = FALSE
            ORDER BY updated_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_account).collect())
    }

    pub async fn create(&self, input: CreateAccountRequest) -> StoreResult<Account> {
        if input.email.trim().is_empty() {
            return Err(StoreError::Validation("email is required"));
        }
        if input.name.trim().is_empty() {
            return Err(StoreError::Validation("name is required"));
        }

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO accounts (id, email, name, avatar, deleted, created_at, updated_at)
            VALUES (?, ?, ?, ?, FALSE, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&input.email)
        .bind(&input.name)
        .bind(&input.avatar)
        .bind(now.naive_utc())
        .bind(now.naive_utc())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() < 1 {
            return Err(StoreError::FailedInsert);
        }

        Ok(Account {
            id,
            email: input.email,
            name: input.name,
            avatar: input.avatar,
            deleted: false,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn update(&self, id: &str, patch: UpdateAccountRequest) -> StoreResult<Account> {
        let mut account = self.get(id).await?;

        if let Some(email) = patch.email {
            if email.trim().is_empty() {
                return Err(StoreError::Validation("email must not be empty"));
            }
            account.email = email;
        }
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(StoreError::Validation("name must not be empty"));
            }
            account.name = name;
        }
        if patch.avatar.is_some() {
            account.avatar = patch.avatar;
        }

        account.updated_at = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET email = ?, name = ?, avatar = ?, updated_at = ?
            WHERE id = ? AND deleted = FALSE
            "#,
        )
        .bind(&account.email)
        .bind(&account.name)
        .bind(&account.avatar)
        .bind(account.updated_at.naive_utc())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() < 1 {
            return Err(StoreError::FailedUpdate);
        }

        Ok(account)
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        require_uuid(id, "account id must be a valid UUID")?;

        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE accounts SET deleted = TRUE, updated_at = ? WHERE id = ? AND deleted = FALSE",
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

fn row_to_account(row: sqlx::sqlite::SqliteRow) -> Account {
    let created_at: NaiveDateTime = row.get("created_at");
    let updated_at: NaiveDateTime = row.get("updated_at");

    Account {
        id: row.get("id"),
        email: row.get("email"),
        name: row.get("name"),
        avatar: row.get("avatar"),
        deleted: row.get("deleted"),
        created_at: Utc.from_utc_datetime(&created_at),
        updated_at: Utc.from_utc_datetime(&updated_at),
    }
}
