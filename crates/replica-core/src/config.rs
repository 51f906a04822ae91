//! Configuration module
//!
//! Database and object storage settings for the submission pipeline, read from
//! the process environment (and a `.env` file when present).

use std::env;

use crate::storage_types::StorageBackend;

// Common constants
const MAX_CONNECTIONS: u32 = 5;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const LOCAL_STORAGE_PATH: &str = "./data/product-images";
const LOCAL_STORAGE_BASE_URL: &str = "http://localhost:3000/product-images";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, Supabase, etc.)
    pub s3_public_base_url: Option<String>,
    pub local_storage_path: String,
    pub local_storage_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value.parse::<StorageBackend>()?,
            None => StorageBackend::Local,
        };

        let config = Config {
            environment,
            database_url: lookup("DATABASE_URL")
                .filter(|url| !url.trim().is_empty())
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?,
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: lookup("DB_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            storage_backend,
            s3_bucket: lookup("S3_BUCKET"),
            s3_region: lookup("S3_REGION").or_else(|| lookup("AWS_REGION")),
            s3_endpoint: lookup("S3_ENDPOINT"),
            s3_public_base_url: lookup("S3_PUBLIC_BASE_URL"),
            local_storage_path: lookup("LOCAL_STORAGE_PATH")
                .unwrap_or_else(|| LOCAL_STORAGE_PATH.to_string()),
            local_storage_base_url: lookup("LOCAL_STORAGE_BASE_URL")
                .unwrap_or_else(|| LOCAL_STORAGE_BASE_URL.to_string()),
        };

        Ok(config)
    }

    /// Check that the selected storage backend has everything it needs.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.storage_backend == StorageBackend::S3 {
            if self.s3_bucket.is_none() {
                return Err(anyhow::anyhow!(
                    "S3_BUCKET must be set when STORAGE_BACKEND=s3"
                ));
            }
            if self.s3_region.is_none() {
                return Err(anyhow::anyhow!(
                    "S3_REGION or AWS_REGION must be set when STORAGE_BACKEND=s3"
                ));
            }
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.db_timeout_seconds
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage_backend
    }

    pub fn s3_bucket(&self) -> Option<&str> {
        self.s3_bucket.as_deref()
    }

    pub fn s3_region(&self) -> Option<&str> {
        self.s3_region.as_deref()
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.s3_endpoint.as_deref()
    }

    pub fn s3_public_base_url(&self) -> Option<&str> {
        self.s3_public_base_url.as_deref()
    }

    pub fn local_storage_path(&self) -> &str {
        &self.local_storage_path
    }

    pub fn local_storage_base_url(&self) -> &str {
        &self.local_storage_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, anyhow::Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn database_url_is_required() {
        let err = config_from(&[]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn defaults_to_local_storage() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/replica")]).unwrap();
        assert_eq!(config.storage_backend(), StorageBackend::Local);
        assert_eq!(config.local_storage_path(), LOCAL_STORAGE_PATH);
        assert_eq!(config.db_max_connections(), MAX_CONNECTIONS);
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unparseable_numbers_fall_back_to_defaults() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/replica"),
            ("DB_MAX_CONNECTIONS", "lots"),
            ("DB_TIMEOUT_SECONDS", "12"),
        ])
        .unwrap();
        assert_eq!(config.db_max_connections(), MAX_CONNECTIONS);
        assert_eq!(config.db_timeout_seconds(), 12);
    }

    #[test]
    fn s3_backend_requires_bucket_and_region() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/replica"),
            ("STORAGE_BACKEND", "s3"),
        ])
        .unwrap();
        assert!(config.validate().is_err());

        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/replica"),
            ("STORAGE_BACKEND", "s3"),
            ("S3_BUCKET", "product-images"),
            ("AWS_REGION", "eu-west-1"),
        ])
        .unwrap();
        assert_eq!(config.s3_region(), Some("eu-west-1"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let result = config_from(&[
            ("DATABASE_URL", "postgres://localhost/replica"),
            ("STORAGE_BACKEND", "ftp"),
        ]);
        assert!(result.is_err());
    }
}
