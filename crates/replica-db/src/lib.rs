//! Replica Database Library
//!
//! Record store for submissions: the `RecordStore` trait the form writes
//! through, classification of database failures by SQLSTATE, and the Postgres
//! repository behind it.

pub mod db;

pub use db::record_store::{
    codes, RecordStore, RecordStoreError, RecordStoreResult, SUBMISSIONS_TABLE,
};
pub use db::submission::SubmissionRepository;
pub use db::{connect, run_migrations};
