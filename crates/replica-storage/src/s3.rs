use crate::keys::storage_path;
use crate::traits::{Storage, StorageError, StorageResult, StoredObject};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::{
    Attribute, Attributes, ObjectStore, PutOptions, PutPayload, Result as ObjectResult,
};

/// S3 storage implementation
#[derive(Clone)]
pub struct S3Storage {
    store: AmazonS3,
    bucket: String,
    region: String,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
    public_base_url: Option<String>,
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    /// * `public_base_url` - Optional base URL objects are publicly served from,
    ///   when it differs from the API endpoint (CDN, public bucket gateway)
    pub async fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
        public_base_url: Option<String>,
    ) -> StorageResult<Self> {
        // Credentials come from the standard AWS environment variables.
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region.clone())
            .with_bucket_name(bucket.clone());

        if let Some(ref endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(S3Storage {
            store,
            bucket,
            region,
            endpoint_url,
            public_base_url,
        })
    }

    /// Public URL for an object key.
    ///
    /// Precedence: explicit public base URL, then path-style URL on the custom
    /// endpoint, then the virtual-hosted AWS URL.
    fn generate_url(&self, key: &str) -> String {
        if let Some(ref base) = self.public_base_url {
            format!("{}/{}", base.trim_end_matches('/'), key)
        } else if let Some(ref endpoint) = self.endpoint_url {
            format!("{}/{}/{}", endpoint.trim_end_matches('/'), self.bucket, key)
        } else {
            format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, key
            )
        }
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn put(
        &self,
        object_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> StorageResult<StoredObject> {
        let key = storage_path(object_name);
        let size = data.len() as u64;
        let location = Path::from(key.clone());

        let start = std::time::Instant::now();

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        let result: ObjectResult<_> = self
            .store
            .put_opts(&location, PutPayload::from(data), opts)
            .await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 upload failed"
            );
            StorageError::UploadFailed(e.to_string())
        })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            content_type = %content_type,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(StoredObject {
            path: key,
            size_bytes: size,
        })
    }

    fn public_url(&self, path: &str) -> String {
        self.generate_url(path)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

#[cfg(all(test, feature = "storage-s3"))]
mod tests {
    use super::*;

    async fn storage(endpoint: Option<&str>, public: Option<&str>) -> S3Storage {
        S3Storage::new(
            "product-images".to_string(),
            "eu-west-1".to_string(),
            endpoint.map(String::from),
            public.map(String::from),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn aws_url_is_virtual_hosted() {
        let s3 = storage(None, None).await;
        assert_eq!(
            s3.public_url("products/a.png"),
            "https://product-images.s3.eu-west-1.amazonaws.com/products/a.png"
        );
    }

    #[tokio::test]
    async fn custom_endpoint_url_is_path_style() {
        let s3 = storage(Some("http://localhost:9000/"), None).await;
        assert_eq!(
            s3.public_url("products/a.png"),
            "http://localhost:9000/product-images/products/a.png"
        );
    }

    #[tokio::test]
    async fn public_base_url_wins() {
        let s3 = storage(
            Some("http://localhost:9000"),
            Some("https://cdn.example.com/public/product-images"),
        )
        .await;
        assert_eq!(
            s3.public_url("products/a.png"),
            "https://cdn.example.com/public/product-images/products/a.png"
        );
    }
}
