use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file part that was written to disk by an upload call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadedFile {
    #[serde(rename = "newFileName")]
    pub new_file_name: String,
    #[serde(rename = "originalFileName")]
    pub original_file_name: String,
    #[serde(rename = "fileSize")]
    pub file_size: u64,
    #[serde(rename = "contentType")]
    pub content_type: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}

impl UploadedFile {
    pub fn new(
        new_file_name: String,
        original_file_name: String,
        file_size: u64,
        content_type: String,
    ) -> Self {
        Self {
            new_file_name,
            original_file_name,
            file_size,
            content_type,
            uploaded_at: Utc::now(),
        }
    }
}

/// Options for [`Toolkit::upload_files`](crate::Toolkit::upload_files).
#[derive(Debug, Clone, Copy)]
pub struct UploadOptions {
    /// Store each file under a random 32-character name that keeps the
    /// original extension. Defaults to `true`. When `false` the client's file
    /// name is used and collisions overwrite existing files.
    pub rename: bool,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self { rename: true }
    }
}

impl UploadOptions {
    pub fn keep_name() -> Self {
        Self { rename: false }
    }
}
