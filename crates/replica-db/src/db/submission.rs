//! Submission repository: inserts into the submissions table.

use async_trait::async_trait;
use replica_core::models::{InsertedSubmission, SubmissionRecord};
use sqlx::{PgPool, Postgres};

use super::record_store::{codes, RecordStore, RecordStoreError, RecordStoreResult};

/// Table names are interpolated into SQL, so only plain identifiers pass.
fn is_valid_table_name(table: &str) -> bool {
    let mut chars = table.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Repository for the submissions table.
#[derive(Clone)]
pub struct SubmissionRepository {
    pool: PgPool,
}

impl SubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for SubmissionRepository {
    #[tracing::instrument(skip(self, record), fields(db.table = %table))]
    async fn insert(
        &self,
        table: &str,
        record: &SubmissionRecord,
    ) -> RecordStoreResult<Vec<InsertedSubmission>> {
        if !is_valid_table_name(table) {
            return Err(RecordStoreError::new(
                codes::INVALID_NAME,
                format!("invalid table name \"{}\"", table),
            ));
        }

        let sql = format!(
            r#"
            INSERT INTO {} (product_url, budget, material, extra_comments, name, phone_number)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, created_at, product_url, budget, material, extra_comments, name, phone_number
            "#,
            table
        );

        let rows = sqlx::query_as::<Postgres, InsertedSubmission>(&sql)
            .bind(&record.product_url)
            .bind(record.budget)
            .bind(&record.material)
            .bind(&record.extra_comments)
            .bind(&record.name)
            .bind(&record.phone_number)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                let err = RecordStoreError::from(e);
                tracing::warn!(code = %err.code, error = %err.message, "Submission insert failed");
                err
            })?;

        tracing::info!(rows = rows.len(), "Submission inserted");
        Ok(rows)
    }
}
