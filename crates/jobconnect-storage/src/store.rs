//! Local filesystem document store.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use jobconnect_core::error::{AppError, ErrorKind};
use jobconnect_core::result::AppResult;

use crate::kind::DocumentKind;

/// Stores uploaded documents on the local filesystem.
///
/// Files are written under `<root>/<kind>/` with generated names; the
/// client-supplied filename is only used for extension validation and is
/// never trusted as a path.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    /// Root directory for all stored documents.
    root: PathBuf,
}

impl DocumentStore {
    /// Create a new document store rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        for kind in [
            DocumentKind::Resume,
            DocumentKind::Logo,
            DocumentKind::ProfilePhoto,
        ] {
            let dir = root.join(kind.subdirectory());
            fs::create_dir_all(&dir).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create storage directory: {}", dir.display()),
                    e,
                )
            })?;
        }
        Ok(Self { root })
    }

    /// Validate and store an uploaded document, returning the generated
    /// stored filename.
    pub async fn store(
        &self,
        kind: DocumentKind,
        original_name: &str,
        data: Bytes,
    ) -> AppResult<String> {
        let extension = kind.validate(original_name, data.len())?;
        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        let path = self.resolve(kind, &filename)?;

        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write file: {}", path.display()),
                e,
            )
        })?;

        debug!(kind = ?kind, filename = %filename, bytes = data.len(), "Stored document");
        Ok(filename)
    }

    /// Read a stored document back as bytes.
    pub async fn read(&self, kind: DocumentKind, filename: &str) -> AppResult<Bytes> {
        let path = self.resolve(kind, filename)?;
        let data = fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("File not found: {filename}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read file: {filename}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    /// Delete a stored document. Missing files are not an error.
    pub async fn delete(&self, kind: DocumentKind, filename: &str) -> AppResult<()> {
        let path = self.resolve(kind, filename)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete file: {filename}"),
                e,
            )),
        }
    }

    /// Check that the storage root exists and is a directory.
    pub async fn health_check(&self) -> bool {
        self.root.is_dir()
    }

    /// Resolve a stored filename within the kind's subdirectory, rejecting
    /// names that could escape it.
    fn resolve(&self, kind: DocumentKind, filename: &str) -> AppResult<PathBuf> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..")
        {
            return Err(AppError::validation("Invalid stored filename"));
        }
        Ok(self.root.join(kind.subdirectory()).join(filename))
    }

    /// The storage root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
