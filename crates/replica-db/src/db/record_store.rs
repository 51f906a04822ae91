//! Record store client contract.
//!
//! Failures carry the backing store's own classification code (PostgreSQL
//! SQLSTATE) next to its message, so callers can map known codes to their own
//! wording without parsing messages.

use async_trait::async_trait;
use replica_core::models::{InsertedSubmission, SubmissionRecord};

/// Table the submission form writes to.
pub const SUBMISSIONS_TABLE: &str = "submissions";

/// SQLSTATE codes the form distinguishes.
pub mod codes {
    pub const UNIQUE_VIOLATION: &str = "23505";
    pub const NOT_NULL_VIOLATION: &str = "23502";
    pub const UNDEFINED_TABLE: &str = "42P01";
    pub const UNDEFINED_COLUMN: &str = "42703";
    pub const INVALID_NAME: &str = "42602";
}

/// A classified record store failure.
///
/// `code` is empty when the failure never reached the database (pool timeout,
/// connection loss).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (code: {code})")]
pub struct RecordStoreError {
    pub code: String,
    pub message: String,
}

impl RecordStoreError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for RecordStoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => RecordStoreError {
                code: db_err.code().map(|c| c.into_owned()).unwrap_or_default(),
                message: db_err.message().to_string(),
            },
            other => RecordStoreError {
                code: String::new(),
                message: other.to_string(),
            },
        }
    }
}

pub type RecordStoreResult<T> = Result<T, RecordStoreError>;

/// Record store abstraction
///
/// Inserts one record into `table` and returns the rows the store reports as
/// inserted.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(
        &self,
        table: &str,
        record: &SubmissionRecord,
    ) -> RecordStoreResult<Vec<InsertedSubmission>>;
}
