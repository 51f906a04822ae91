//! Data models for the submission pipeline
//!
//! `draft` holds the editable form state, `submission` the normalized and
//! persisted shapes, `lifecycle` the state of one form session.

mod draft;
mod lifecycle;
mod submission;

// Re-export all models for convenient imports
pub use draft::*;
pub use lifecycle::*;
pub use submission::*;
