use std::{path::PathBuf, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    response::Response,
};
use tracing::{info, warn};

use crate::{
    adapters::{
        dto::file_dto::{DownloadQuery, UploadFilesResponse},
        state::AppState,
    },
    application::error::ApplicationError,
    domain::models::{envelope::JsonResponse, file::UploadOptions},
    services::{PartialUpload, Toolkit},
};

pub struct FileController;

impl FileController {
    /// Stores every file in the form under a random name.
    /// POST /api/v1/files
    pub async fn upload_files(
        State(app_state): State<AppState>,
        request: Request,
    ) -> Result<Response, ApplicationError> {
        let files = app_state
            .toolkit
            .upload_files(request, app_state.upload_dir.as_path(), UploadOptions::default())
            .await
            .map_err(|partial: PartialUpload| {
                if !partial.uploaded.is_empty() {
                    warn!(
                        "Upload aborted after {} file(s) were stored",
                        partial.uploaded.len()
                    );
                }
                ApplicationError::from(partial)
            })?;

        info!("Uploaded {} file(s)", files.len());

        let payload = JsonResponse::ok(
            format!("{} file(s) uploaded", files.len()),
            UploadFilesResponse::from(files),
        );
        Ok(app_state
            .toolkit
            .write_json(StatusCode::CREATED, &payload, None)?)
    }

    /// Stores the first file in the form under its original name.
    /// POST /api/v1/files/original
    pub async fn upload_original(
        State(app_state): State<AppState>,
        request: Request,
    ) -> Result<Response, ApplicationError> {
        let file = app_state
            .toolkit
            .upload_file(request, app_state.upload_dir.as_path(), UploadOptions::keep_name())
            .await?;

        info!("Uploaded '{}'", file.new_file_name);

        let payload = JsonResponse::ok("file uploaded", file);
        Ok(app_state
            .toolkit
            .write_json(StatusCode::CREATED, &payload, None)?)
    }

    /// GET /api/v1/files/{file_name}/content?name=<display name>
    pub async fn download_file(
        State(toolkit): State<Arc<Toolkit>>,
        State(upload_dir): State<Arc<PathBuf>>,
        Path(file_name): Path<String>,
        Query(query): Query<DownloadQuery>,
        request: Request,
    ) -> Response {
        let display_name = query.name.unwrap_or_else(|| file_name.clone());

        toolkit
            .download_static_file(request, upload_dir.as_path(), &file_name, &display_name)
            .await
    }
}
