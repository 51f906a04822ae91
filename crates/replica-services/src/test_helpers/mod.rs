//! In-memory storage and record store doubles for testing
//!
//! Both record every call so tests can assert what reached the network and
//! what did not.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use replica_core::models::{InsertedSubmission, SubmissionRecord};
use replica_core::StorageBackend;
use replica_db::{RecordStore, RecordStoreError, RecordStoreResult};
use replica_storage::{Storage, StorageError, StorageResult, StoredObject};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PutCall {
    pub object_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Mock object store
pub struct MockStorage {
    puts: Mutex<Vec<PutCall>>,
    resolves: AtomicUsize,
    public_url: Option<String>,
    failure: Option<String>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self {
            puts: Mutex::new(Vec::new()),
            resolves: AtomicUsize::new(0),
            public_url: None,
            failure: None,
        }
    }

    /// Every stored path resolves to this fixed address.
    pub fn with_public_url(url: &str) -> Self {
        Self {
            public_url: Some(url.to_string()),
            ..Self::new()
        }
    }

    /// Every put fails with this cause.
    pub fn failing(cause: &str) -> Self {
        Self {
            failure: Some(cause.to_string()),
            ..Self::new()
        }
    }

    pub fn puts(&self) -> Vec<PutCall> {
        self.puts.lock().unwrap().clone()
    }

    pub fn put_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }

    pub fn resolve_count(&self) -> usize {
        self.resolves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Storage for MockStorage {
    async fn put(
        &self,
        object_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> StorageResult<StoredObject> {
        self.puts.lock().unwrap().push(PutCall {
            object_name: object_name.to_string(),
            content_type: content_type.to_string(),
            data: data.clone(),
        });
        if let Some(ref cause) = self.failure {
            return Err(StorageError::UploadFailed(cause.clone()));
        }
        Ok(StoredObject {
            path: format!("products/{}", object_name),
            size_bytes: data.len() as u64,
        })
    }

    fn public_url(&self, path: &str) -> String {
        self.resolves.fetch_add(1, Ordering::SeqCst);
        self.public_url
            .clone()
            .unwrap_or_else(|| format!("https://storage.test/{}", path))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

/// Echo a record back as the row a store would return, with a fresh id.
pub fn inserted_row(record: SubmissionRecord) -> InsertedSubmission {
    InsertedSubmission {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        product_url: record.product_url,
        budget: record.budget,
        material: record.material,
        extra_comments: record.extra_comments,
        name: record.name,
        phone_number: record.phone_number,
    }
}

/// Mock record store
pub struct MockRecordStore {
    inserts: Mutex<Vec<(String, SubmissionRecord)>>,
    failure: Option<RecordStoreError>,
    delay: Option<Duration>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self {
            inserts: Mutex::new(Vec::new()),
            failure: None,
            delay: None,
        }
    }

    /// Every insert fails with this store code and detail.
    pub fn failing(code: &str, message: &str) -> Self {
        Self {
            failure: Some(RecordStoreError::new(code, message)),
            ..Self::new()
        }
    }

    /// Every insert waits this long before answering.
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new()
        }
    }

    pub fn inserts(&self) -> Vec<(String, SubmissionRecord)> {
        self.inserts.lock().unwrap().clone()
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.lock().unwrap().len()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn insert(
        &self,
        table: &str,
        record: &SubmissionRecord,
    ) -> RecordStoreResult<Vec<InsertedSubmission>> {
        self.inserts
            .lock()
            .unwrap()
            .push((table.to_string(), record.clone()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.failure {
            Some(ref err) => Err(err.clone()),
            None => Ok(vec![inserted_row(record.clone())]),
        }
    }
}
