//! Replica Services Layer
//!
//! This crate is the submission pipeline: it resolves the product image,
//! classifies failures into user-facing messages, and runs the form's
//! submit state machine on top of the storage and record store clients.
//! Front ends (the CLI) depend on this crate only.

pub mod error;
pub mod form;
pub mod image_resolver;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use error::{insert_failure_message, SubmissionError, UPLOAD_FAILED_MESSAGE};
pub use form::{SubmissionForm, SubmitOutcome, ACKNOWLEDGMENT};
pub use image_resolver::ImageResolver;
pub use replica_db::{RecordStore, RecordStoreError, SubmissionRepository};
pub use replica_storage::{create_storage, Storage, StorageError};
