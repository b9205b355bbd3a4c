use std::path::Path;

use axum::{
    extract::{
        multipart::{Field, MultipartError},
        DefaultBodyLimit, FromRequest, Multipart, Request,
    },
    http::{header, StatusCode},
};
use tokio::{
    fs::{self, File},
    io::AsyncWriteExt,
};
use tracing::{error, info, warn};

use crate::{
    domain::models::file::{UploadOptions, UploadedFile},
    services::{
        fs::create_dir_if_not_exists,
        random::random_string,
        sniff::{detect_content_type, SNIFF_LEN},
        PartialUpload, Toolkit, UploadError,
    },
};

const RANDOM_NAME_LEN: usize = 32;

impl Toolkit {
    /// Stores every file part of a `multipart/form-data` request in
    /// `upload_dir`.
    ///
    /// Parts are written in the order they arrive. If one fails, the call
    /// stops and the files already written are returned inside the
    /// [`PartialUpload`] error; they are not removed. Nothing of the failing
    /// part is left in `upload_dir`.
    pub async fn upload_files(
        &self,
        request: Request,
        upload_dir: impl AsRef<Path>,
        options: UploadOptions,
    ) -> Result<Vec<UploadedFile>, PartialUpload> {
        let mut uploaded = Vec::new();

        match self
            .store_parts(request, upload_dir.as_ref(), options, &mut uploaded)
            .await
        {
            Ok(()) => Ok(uploaded),
            Err(error) => Err(PartialUpload { uploaded, error }),
        }
    }

    /// Like [`Toolkit::upload_files`] but returns only the first stored file.
    pub async fn upload_file(
        &self,
        request: Request,
        upload_dir: impl AsRef<Path>,
        options: UploadOptions,
    ) -> Result<UploadedFile, UploadError> {
        let files = self
            .upload_files(request, upload_dir, options)
            .await
            .map_err(|partial| partial.error)?;

        files.into_iter().next().ok_or(UploadError::NoFile)
    }

    async fn store_parts(
        &self,
        mut request: Request,
        upload_dir: &Path,
        options: UploadOptions,
        uploaded: &mut Vec<UploadedFile>,
    ) -> Result<(), UploadError> {
        create_dir_if_not_exists(upload_dir).await?;

        let max_size = self.config().max_file_size;

        if let Some(length) = declared_length(&request) {
            if length > max_size {
                warn!(
                    "Rejecting upload of {} bytes, limit is {} bytes",
                    length, max_size
                );
                return Err(UploadError::FileTooLarge);
            }
        }

        DefaultBodyLimit::max(usize::try_from(max_size).unwrap_or(usize::MAX)).apply(&mut request);

        let mut multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| UploadError::InvalidForm(e.body_text()))?;

        while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
            let Some(original_file_name) = field.file_name().and_then(base_name) else {
                continue;
            };

            // Everything read while sniffing is kept and written first.
            let mut head = Vec::with_capacity(SNIFF_LEN);
            while head.len() < SNIFF_LEN {
                match field.chunk().await.map_err(multipart_error)? {
                    Some(chunk) => head.extend_from_slice(&chunk),
                    None => break,
                }
            }

            if head.is_empty() {
                warn!("Rejecting empty upload '{}'", original_file_name);
                return Err(UploadError::EmptyFile(original_file_name));
            }

            let content_type = detect_content_type(&head);
            if !self.config().is_type_allowed(content_type) {
                warn!(
                    "Rejecting upload '{}': type '{}' not allowed",
                    original_file_name, content_type
                );
                return Err(UploadError::TypeNotAllowed {
                    content_type: content_type.to_string(),
                });
            }

            let new_file_name = if options.rename {
                format!(
                    "{}{}",
                    random_string(RANDOM_NAME_LEN),
                    extension(&original_file_name)
                )
            } else {
                original_file_name.clone()
            };

            // Written under a temporary name so a failed part never leaves a
            // truncated file or replaces an existing one.
            let partial_path = upload_dir.join(format!(".{}.part", random_string(RANDOM_NAME_LEN)));
            let file_size = match write_part(&partial_path, &head, &mut field).await {
                Ok(file_size) => file_size,
                Err(error) => {
                    discard(&partial_path).await;
                    return Err(error);
                }
            };

            if let Err(error) = fs::rename(&partial_path, upload_dir.join(&new_file_name)).await {
                discard(&partial_path).await;
                return Err(error.into());
            }

            info!(
                "Stored upload '{}' as '{}' ({} bytes, {})",
                original_file_name, new_file_name, file_size, content_type
            );

            uploaded.push(UploadedFile::new(
                new_file_name,
                original_file_name,
                file_size,
                content_type.to_string(),
            ));
        }

        Ok(())
    }
}

/// Writes the sniffed prefix followed by the rest of the part, returning the
/// number of bytes stored.
async fn write_part(path: &Path, head: &[u8], field: &mut Field<'_>) -> Result<u64, UploadError> {
    let mut output = File::create(path).await?;
    output.write_all(head).await?;
    let mut file_size = head.len() as u64;

    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        output.write_all(&chunk).await?;
        file_size += chunk.len() as u64;
    }
    output.flush().await?;

    Ok(file_size)
}

async fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path).await {
        error!("Failed to remove partial upload {}: {}", path.display(), e);
    }
}

fn declared_length(request: &Request) -> Option<u64> {
    request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
}

fn multipart_error(error: MultipartError) -> UploadError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::FileTooLarge
    } else {
        UploadError::InvalidForm(error.body_text())
    }
}

/// Final path component of a client-supplied file name. Parts without a
/// usable name are treated as plain form values.
fn base_name(file_name: &str) -> Option<String> {
    let name = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);

    match name {
        "" | "." | ".." => None,
        _ => Some(name.to_string()),
    }
}

/// Extension including the leading dot, or an empty string.
fn extension(file_name: &str) -> &str {
    file_name.rfind('.').map_or("", |i| &file_name[i..])
}
