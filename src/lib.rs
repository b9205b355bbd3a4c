//! Helpers for axum HTTP handlers: multipart uploads with content sniffing,
//! strict JSON decoding with stable error messages, JSON responses and the
//! `{error, message, data}` envelope, slugs, random names, forced downloads,
//! pushing JSON to remote endpoints and a signal-driven shutdown hook.
//!
//! Everything hangs off [`Toolkit`], built once from a [`ToolkitConfig`].

pub mod adapters;
pub mod application;
pub mod domain;
pub mod services;

pub use adapters::extract::StrictJson;
pub use application::error::ApplicationError;
pub use domain::{
    config::toolkit::ToolkitConfig,
    models::{
        envelope::JsonResponse,
        file::{UploadOptions, UploadedFile},
    },
};
pub use services::{
    detect_content_type, ConfigError, EncodeError, JsonError, PartialUpload, RemoteError,
    ShutdownHook, SlugError, Toolkit, UploadError,
};
