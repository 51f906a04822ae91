//! Submission error taxonomy.
//!
//! Every failure of a submit attempt is one of three kinds. The user only ever
//! sees `client_message()`; upload causes stay in the logs.

use replica_core::{ErrorMetadata, LogLevel, ValidationError};
use replica_db::{codes, RecordStoreError};
use replica_storage::StorageError;

/// Message shown for any object storage failure.
pub const UPLOAD_FAILED_MESSAGE: &str = "failed to upload image";

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Image upload failed: {0}")]
    UploadFailed(#[source] StorageError),

    #[error("Insert failed: {0}")]
    InsertFailed(#[source] RecordStoreError),
}

/// Map a record store failure to the message the form shows.
pub fn insert_failure_message(err: &RecordStoreError) -> String {
    match err.code.as_str() {
        codes::UNIQUE_VIOLATION => "This submission already exists".to_string(),
        codes::UNDEFINED_TABLE => "Table not found. Please check your database setup".to_string(),
        codes::UNDEFINED_COLUMN => "Invalid column name. Please check the form fields".to_string(),
        codes::NOT_NULL_VIOLATION => "Required field missing".to_string(),
        _ => format!("Database error: {}", err.message),
    }
}

impl ErrorMetadata for SubmissionError {
    fn error_code(&self) -> &'static str {
        match self {
            SubmissionError::Validation(err) => err.error_code(),
            SubmissionError::UploadFailed(_) => "UPLOAD_FAILED",
            SubmissionError::InsertFailed(_) => "INSERT_FAILED",
        }
    }

    fn client_message(&self) -> String {
        match self {
            SubmissionError::Validation(err) => err.client_message(),
            SubmissionError::UploadFailed(_) => UPLOAD_FAILED_MESSAGE.to_string(),
            SubmissionError::InsertFailed(err) => insert_failure_message(err),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            SubmissionError::Validation(_) => LogLevel::Debug,
            SubmissionError::UploadFailed(_) => LogLevel::Error,
            SubmissionError::InsertFailed(_) => LogLevel::Warn,
        }
    }
}
