//! Error metadata shared by every layer.
//!
//! Each layer owns its own `thiserror` enum; this module only defines how an
//! error describes itself to the form: a machine-readable code, the message
//! the user sees, and the level it is logged at.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for store rejections the user can fix
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for user-facing errors
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "UPLOAD_FAILED")
    fn error_code(&self) -> &'static str;

    /// Message shown to the user (may differ from the internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}
