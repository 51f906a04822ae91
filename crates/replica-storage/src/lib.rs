//! Replica Storage Library
//!
//! Object storage for product reference images. It includes the `Storage`
//! trait and implementations for S3-compatible stores and the local filesystem.
//!
//! # Object path format
//!
//! Every backend stores an uploaded image at `products/{object_name}`, where
//! the object name is `{unix_millis}-{uuid}-{sanitized file name}`. Paths must
//! not contain `..` or a leading `/`. Name and path generation live in the
//! `keys` module so all backends stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::generate_object_name;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use replica_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult, StoredObject};
