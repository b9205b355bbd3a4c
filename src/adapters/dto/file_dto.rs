use serde::{Deserialize, Serialize};

use crate::domain::models::file::UploadedFile;

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadFilesResponse {
    pub files: Vec<UploadedFile>,
    #[serde(rename = "totalSize")]
    pub total_size: u64,
}

impl From<Vec<UploadedFile>> for UploadFilesResponse {
    fn from(files: Vec<UploadedFile>) -> Self {
        let total_size = files.iter().map(|f| f.file_size).sum();
        Self { files, total_size }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct DownloadQuery {
    /// File name the browser should save as; defaults to the stored name.
    pub name: Option<String>,
}
