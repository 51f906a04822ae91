//! Image resolution: turn a validated image source into the address stored
//! with the submission.

use replica_core::models::ImageSource;
use replica_storage::{generate_object_name, Storage};
use std::sync::Arc;

use crate::error::SubmissionError;

/// Uploads picked files, passes user URLs through.
#[derive(Clone)]
pub struct ImageResolver {
    storage: Arc<dyn Storage>,
}

impl ImageResolver {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Resolve the image to a publicly fetchable address.
    ///
    /// `File` uploads the blob under a fresh object name and returns the
    /// public URL of the stored path. `Url` returns the trimmed URL without
    /// touching storage.
    #[tracing::instrument(skip(self, source), fields(mode = %source.mode()))]
    pub async fn resolve(&self, source: &ImageSource) -> Result<String, SubmissionError> {
        let file = match source {
            ImageSource::Url(url) => return Ok(url.trim().to_string()),
            ImageSource::File(file) => file,
        };

        let object_name = generate_object_name(&file.file_name);
        let start = std::time::Instant::now();

        let stored = self
            .storage
            .put(&object_name, &file.content_type, file.data.clone())
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    object_name = %object_name,
                    size_bytes = file.size(),
                    backend = %self.storage.backend_type(),
                    "Product image upload failed"
                );
                SubmissionError::UploadFailed(e)
            })?;

        let url = self.storage.public_url(&stored.path);

        tracing::info!(
            object_name = %object_name,
            path = %stored.path,
            size_bytes = stored.size_bytes,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Product image uploaded"
        );

        Ok(url)
    }
}
