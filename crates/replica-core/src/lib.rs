//! Replica Core Library
//!
//! This crate provides the domain models, field validation, configuration and
//! error metadata shared by every Replica component.

pub mod config;
pub mod error;
pub mod models;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
pub use validation::{validate_draft, ValidationError};
// Note: Storage and RecordStore traits live in replica-storage and replica-db
