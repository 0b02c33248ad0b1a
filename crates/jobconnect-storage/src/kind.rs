//! Document kinds and their upload constraints.

use jobconnect_core::error::AppError;

/// The kinds of documents accounts can upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Job seeker resume.
    Resume,
    /// Employer company logo.
    Logo,
    /// Job seeker profile photo.
    ProfilePhoto,
}

impl DocumentKind {
    /// Subdirectory under the storage root for this kind.
    pub fn subdirectory(&self) -> &'static str {
        match self {
            Self::Resume => "resumes",
            Self::Logo => "logos",
            Self::ProfilePhoto => "photos",
        }
    }

    /// File extensions accepted for this kind.
    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Resume => &["pdf", "doc", "docx"],
            Self::Logo | Self::ProfilePhoto => &["jpg", "jpeg", "png", "gif"],
        }
    }

    /// Maximum accepted size in bytes for this kind.
    pub fn max_size_bytes(&self) -> usize {
        match self {
            Self::Resume => 5 * 1024 * 1024,
            Self::Logo | Self::ProfilePhoto => 2 * 1024 * 1024,
        }
    }

    /// Validate an original filename and size, returning the lowercase
    /// extension on success.
    pub fn validate(&self, original_name: &str, size: usize) -> Result<String, AppError> {
        if size == 0 {
            return Err(AppError::validation("Uploaded file is empty"));
        }

        if size > self.max_size_bytes() {
            return Err(AppError::validation(format!(
                "File size exceeds the maximum limit of {}MB",
                self.max_size_bytes() / (1024 * 1024)
            )));
        }

        let extension = original_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        if !self.allowed_extensions().contains(&extension.as_str()) {
            return Err(AppError::validation(format!(
                "Invalid file type. Allowed types: {}",
                self.allowed_extensions().join(", ")
            )));
        }

        Ok(extension)
    }
}
