use thiserror::Error;

use crate::{application::error::ApplicationError, domain::models::file::UploadedFile};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("the uploaded file exceeds the maximum file size")]
    FileTooLarge,

    #[error("the uploaded file type is not allowed")]
    TypeNotAllowed { content_type: String },

    #[error("the uploaded file is empty: {0}")]
    EmptyFile(String),

    #[error("no file was uploaded")]
    NoFile,

    #[error("invalid multipart form: {0}")]
    InvalidForm(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// An upload that stopped part way. Files listed in `uploaded` are already on
/// disk and are left there.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct PartialUpload {
    pub uploaded: Vec<UploadedFile>,
    #[source]
    pub error: UploadError,
}

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("body contains badly-formed JSON (at position {position})")]
    BadlyFormed { position: usize },

    #[error("body contains badly-formed JSON")]
    Truncated,

    #[error("body contains incorrect JSON type for field {field:?}")]
    IncorrectType { field: String },

    #[error("body contains incorrect JSON type (at position {position})")]
    IncorrectTypeAt { position: usize },

    #[error("body must not be empty")]
    Empty,

    #[error("body contains unknown field {0:?}")]
    UnknownField(String),

    #[error("body must not be larger than {limit} bytes")]
    TooLarge { limit: usize },

    #[error("error unmarshalling JSON: {0}")]
    Unmarshal(String),

    #[error("body must contain only one JSON object")]
    MultipleValues,

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to build response: {0}")]
    Response(#[from] axum::http::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum SlugError {
    #[error("the input cannot be empty")]
    EmptyInput,

    #[error("invalid input, the slug is empty")]
    EmptySlug,
}

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Request timeout")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request error: {0}")]
    Request(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for environment variable {key}")]
    InvalidVariable { key: String, value: String },
}

impl From<reqwest::Error> for RemoteError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            RemoteError::Timeout
        } else if error.is_connect() {
            RemoteError::Connection(error.to_string())
        } else {
            RemoteError::Request(error.to_string())
        }
    }
}

impl From<UploadError> for ApplicationError {
    fn from(error: UploadError) -> Self {
        match error {
            UploadError::FileTooLarge => ApplicationError::PayloadTooLarge(error.to_string()),
            UploadError::TypeNotAllowed { .. } => {
                ApplicationError::UnsupportedMediaType(error.to_string())
            }
            UploadError::EmptyFile(_) | UploadError::NoFile | UploadError::InvalidForm(_) => {
                ApplicationError::BadRequest(error.to_string())
            }
            UploadError::Io(e) => ApplicationError::InternalError(format!("Upload failed: {}", e)),
        }
    }
}

impl From<PartialUpload> for ApplicationError {
    fn from(error: PartialUpload) -> Self {
        error.error.into()
    }
}

impl From<JsonError> for ApplicationError {
    fn from(error: JsonError) -> Self {
        match error {
            JsonError::TooLarge { .. } => ApplicationError::PayloadTooLarge(error.to_string()),
            _ => ApplicationError::BadRequest(error.to_string()),
        }
    }
}

impl From<EncodeError> for ApplicationError {
    fn from(error: EncodeError) -> Self {
        ApplicationError::InternalError(error.to_string())
    }
}

impl From<SlugError> for ApplicationError {
    fn from(error: SlugError) -> Self {
        ApplicationError::BadRequest(error.to_string())
    }
}

impl From<RemoteError> for ApplicationError {
    fn from(error: RemoteError) -> Self {
        match error {
            RemoteError::Serialize(_) => ApplicationError::BadRequest(error.to_string()),
            RemoteError::Timeout | RemoteError::Connection(_) | RemoteError::Request(_) => {
                ApplicationError::BadGateway(error.to_string())
            }
        }
    }
}
