//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid storage path: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Where an uploaded object ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Backend-relative path, e.g. `products/1700000000000-<uuid>-chair.png`
    pub path: String,
    pub size_bytes: u64,
}

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) implement this trait so the
/// image resolver can upload without knowing where bytes end up.
///
/// Writing and addressing are separate: `put` only reports the stored path,
/// and `public_url` turns any stored path into an address that can be fetched
/// without this client.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write a blob under the given object name and return its stored path.
    async fn put(
        &self,
        object_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> StorageResult<StoredObject>;

    /// Resolve a stored path to a publicly fetchable URL.
    fn public_url(&self, path: &str) -> String;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
