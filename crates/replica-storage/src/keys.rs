//! Shared object naming for storage backends.
//!
//! Object name: `{unix_millis}-{uuid}-{sanitized file name}`.
//! Stored path: `products/{object_name}`.

use chrono::Utc;
use uuid::Uuid;

const PATH_PREFIX: &str = "products";
const MAX_FILE_NAME_LENGTH: usize = 200;

/// Reduce a user-supplied file name to a safe final path component.
///
/// Directory parts are dropped and any character outside `[A-Za-z0-9._-]`
/// becomes `_`. Names that end up empty or made only of dots fall back to
/// `image`.
pub fn sanitize_file_name(file_name: &str) -> String {
    let last = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);

    let sanitized: String = last
        .chars()
        .take(MAX_FILE_NAME_LENGTH)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches('.').is_empty() || sanitized.contains("..") {
        "image".to_string()
    } else {
        sanitized
    }
}

/// Build a collision-resistant object name for an uploaded image.
pub fn generate_object_name(file_name: &str) -> String {
    format!(
        "{}-{}-{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple(),
        sanitize_file_name(file_name)
    )
}

/// Storage path for an object name. All backends must use this format.
pub fn storage_path(object_name: &str) -> String {
    format!("{}/{}", PATH_PREFIX, object_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_simple_names() {
        assert_eq!(sanitize_file_name("chair.png"), "chair.png");
        assert_eq!(sanitize_file_name("my-file_1.jpg"), "my-file_1.jpg");
    }

    #[test]
    fn sanitize_strips_directories_and_odd_characters() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\photos\\red sofa.jpg"), "red_sofa.jpg");
        assert_eq!(sanitize_file_name("lampe über.png"), "lampe__ber.png");
    }

    #[test]
    fn sanitize_falls_back_for_empty_names() {
        assert_eq!(sanitize_file_name(""), "image");
        assert_eq!(sanitize_file_name(".."), "image");
        assert_eq!(sanitize_file_name("photos/"), "image");
    }

    #[test]
    fn object_names_are_unique_and_keep_file_name() {
        let a = generate_object_name("chair.png");
        let b = generate_object_name("chair.png");
        assert_ne!(a, b);
        assert!(a.ends_with("-chair.png"));
        assert!(!a.contains('/'));
    }

    #[test]
    fn storage_path_is_prefixed() {
        assert_eq!(storage_path("1-abc-chair.png"), "products/1-abc-chair.png");
    }
}
