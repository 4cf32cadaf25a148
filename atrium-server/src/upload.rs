//! Uploaded file storage.
//!
//! Files land beneath a fixed uploads root under a per-resource
//! subdirectory, with UUID filenames. Records store the resulting path
//! with a leading `/`, and the root is served statically by the router.

use std::path::{Path, PathBuf};

use axum::body::Bytes;
use uuid::Uuid;

use crate::errors::AppError;

/// The only content types accepted for image uploads.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/gif", "image/webp"];

pub const INVALID_TYPE_MESSAGE: &str =
    "Invalid file type. Only JPEG, PNG, GIF, and WebP are allowed.";

#[derive(Debug, Clone)]
pub struct UploadService {
    root: PathBuf,
}

impl UploadService {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reject disallowed content types before any file is written.
    pub fn check_image_type(content_type: &str) -> Result<(), AppError> {
        if ALLOWED_IMAGE_TYPES.contains(&content_type) {
            Ok(())
        } else {
            Err(AppError::bad_request(INVALID_TYPE_MESSAGE))
        }
    }

    /// Write `bytes` under `<root>/<subdir>/` and return the path
    /// relative to the root, e.g. `gallery/3f2a....jpg`.
    pub async fn save(
        &self,
        subdir: &str,
        content_type: &str,
        original_name: Option<&str>,
        bytes: Bytes,
    ) -> Result<String, AppError> {
        Self::check_image_type(content_type)?;
        let ext = original_name
            .and_then(extension_of)
            .unwrap_or_else(|| extension_for(content_type));
        let file_name = format!("{}.{ext}", Uuid::new_v4());
        let dir = self.root.join(subdir);
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            tracing::error!(error = %e, "failed to create upload directory");
            AppError::internal("Failed to save file")
        })?;
        tokio::fs::write(dir.join(&file_name), &bytes)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to write upload");
                AppError::internal("Failed to save file")
            })?;
        Ok(format!("{subdir}/{file_name}"))
    }

    /// Best-effort removal of a previously stored file, given the
    /// `/`-prefixed path a record carries. External URLs and missing
    /// files are ignored.
    pub async fn remove_stored(&self, public_path: &str) {
        let relative = public_path.trim_start_matches('/');
        if relative.is_empty() || relative.contains("://") {
            return;
        }
        let full = self.root.join(relative);
        match tokio::fs::remove_file(&full).await {
            Ok(()) => {
                tracing::info!(path = %full.display(), "deleted stored image");
            }
            Err(e) => {
                tracing::info!(
                    path = %full.display(),
                    error = %e,
                    "stored image not removed"
                );
            }
        }
    }
}

fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

fn extension_for(content_type: &str) -> String {
    match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "bin",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disallowed_types_rejected() {
        assert!(UploadService::check_image_type("image/png").is_ok());
        assert!(UploadService::check_image_type("image/webp").is_ok());
        assert!(UploadService::check_image_type("image/svg+xml").is_err());
        assert!(UploadService::check_image_type("application/pdf").is_err());
        assert!(UploadService::check_image_type("text/html").is_err());
    }

    #[tokio::test]
    async fn save_writes_under_root_and_returns_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        let service = UploadService::new(dir.path().to_path_buf());
        let path = service
            .save(
                "gallery",
                "image/png",
                Some("campus.PNG"),
                Bytes::from_static(b"\x89PNG"),
            )
            .await
            .unwrap();
        assert!(path.starts_with("gallery/"));
        assert!(path.ends_with(".png"));
        assert!(dir.path().join(&path).exists());

        service.remove_stored(&format!("/{path}")).await;
        assert!(!dir.path().join(&path).exists());
    }

    #[tokio::test]
    async fn rejection_happens_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let service = UploadService::new(dir.path().to_path_buf());
        let result = service
            .save("gallery", "application/pdf", None, Bytes::new())
            .await;
        assert!(result.is_err());
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[tokio::test]
    async fn remove_stored_ignores_external_urls() {
        let dir = tempfile::tempdir().unwrap();
        let service = UploadService::new(dir.path().to_path_buf());
        // Nothing to assert beyond "does not panic / does not touch fs".
        service.remove_stored("https://example.com/logo.png").await;
        service.remove_stored("").await;
    }
}
