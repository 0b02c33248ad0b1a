//! Uploaded document storage configuration.

use serde::{Deserialize, Serialize};

/// File storage configuration for resumes, logos, and profile photos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all stored documents.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Maximum accepted request body size in bytes (bounds multipart uploads).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

fn default_data_root() -> String {
    "data/uploads".to_string()
}

fn default_max_upload() -> u64 {
    // 5 MiB resume cap plus multipart framing headroom.
    6 * 1024 * 1024
}
