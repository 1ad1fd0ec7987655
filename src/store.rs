//! Store-layer error kinds shared by every entity store.
//!
//! Each store operation maps its outcome onto one of these sentinels so the
//! HTTP layer can translate them to status codes in a single place.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed validation: {0}")]
    Validation(&'static str),
    #[error("not found")]
    NotFound,
    #[error("failed to insert data")]
    FailedInsert,
    #[error("failed to update data")]
    FailedUpdate,
    #[error("internal store error: {0}")]
    Internal(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Reject anything that is not a well-formed UUID before it reaches SQL.
pub(crate) fn require_uuid(raw: &str, msg: &'static str) -> Result<(), StoreError> {
    Uuid::parse_str(raw)
        .map(|_| ())
        .map_err(|_| StoreError::Validation(msg))
}
