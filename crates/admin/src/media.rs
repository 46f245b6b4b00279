//! Filesystem-backed media store.
//!
//! Uploaded images land under the configured media root with uuid-prefixed
//! names and are served back via the static `/media` route. Upload returns
//! the public URL - the only handle anything else in the system keeps.

use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

/// Errors storing media objects.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The upload had no usable file name.
    #[error("missing or empty file name")]
    MissingFileName,

    /// The file extension is not an accepted image type.
    #[error("unsupported media type: {0}")]
    UnsupportedType(String),

    /// Writing the object failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Accepted upload extensions (lowercase).
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];

/// Filesystem media store.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
    public_base: String,
}

impl MediaStore {
    /// Create a store writing under `root`, serving under `public_base`.
    #[must_use]
    pub fn new(root: PathBuf, public_base: String) -> Self {
        Self { root, public_base }
    }

    /// The directory uploads are written to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Store `bytes` under a fresh object name derived from `file_name`.
    ///
    /// Returns the public URL of the stored object.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::MissingFileName`/`UnsupportedType` for bad
    /// uploads and `MediaError::Io` if the write fails.
    pub async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, MediaError> {
        let object_name = object_name(file_name)?;

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&object_name), bytes).await?;

        tracing::info!(%object_name, size = bytes.len(), "media stored");
        Ok(format!("{}/{object_name}", self.public_base))
    }
}

/// Derive a unique, path-safe object name from an upload file name.
fn object_name(file_name: &str) -> Result<String, MediaError> {
    if file_name.is_empty() {
        return Err(MediaError::MissingFileName);
    }

    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .ok_or(MediaError::MissingFileName)?;

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(MediaError::UnsupportedType(extension));
    }

    let stem: String = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("upload")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .take(64)
        .collect();

    Ok(format!("{}_{stem}.{extension}", Uuid::new_v4().simple()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_object_name_sanitizes_and_keeps_extension() {
        let name = object_name("Sunset over the Ghats.JPG").unwrap();
        assert!(name.ends_with(".jpg"));
        assert!(name.contains("Sunset_over_the_Ghats"));
        assert!(!name.contains(' '));
    }

    #[test]
    fn test_object_name_rejects_bad_uploads() {
        assert!(matches!(object_name(""), Err(MediaError::MissingFileName)));
        assert!(matches!(
            object_name("script.exe"),
            Err(MediaError::UnsupportedType(_))
        ));
        assert!(matches!(
            object_name("noextension"),
            Err(MediaError::MissingFileName)
        ));
    }

    #[test]
    fn test_object_names_are_unique() {
        let a = object_name("logo.png").unwrap();
        let b = object_name("logo.png").unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_store_writes_and_returns_url() {
        let dir = std::env::temp_dir().join(format!("atelier_media_{}", Uuid::new_v4().simple()));
        let store = MediaStore::new(dir.clone(), "http://localhost:3001/media".to_owned());

        let url = store.store("art.png", b"\x89PNG").await.unwrap();
        assert!(url.starts_with("http://localhost:3001/media/"));

        let object = url.rsplit('/').next().unwrap();
        let written = tokio::fs::read(dir.join(object)).await.unwrap();
        assert_eq!(written, b"\x89PNG");

        tokio::fs::remove_dir_all(dir).await.unwrap();
    }
}
