use anyhow::Context;
use replica_core::models::{ImageFile, InsertedSubmission};
use std::path::Path;

/// Initialize tracing for CLI binaries. Logs go to stderr, as JSON when
/// `json` is set.
pub fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Guess an image content type from the file extension.
pub fn guess_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}

/// Read a local image into a form attachment.
pub async fn load_image(path: &Path) -> anyhow::Result<ImageFile> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string();

    Ok(ImageFile::new(file_name, guess_content_type(path), data))
}

/// Pretty JSON for the rows a submission inserted.
pub fn rows_json(rows: &[InsertedSubmission]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(rows).context("Serialize rows")
}
