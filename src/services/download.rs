use std::path::{Component, Path};

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::warn;

use crate::services::Toolkit;

impl Toolkit {
    /// Serves `dir/file`, asking the browser to save it as `display_name`.
    ///
    /// `file` must stay inside `dir`; names with `..` components get a 400.
    pub async fn download_static_file(
        &self,
        request: Request,
        dir: impl AsRef<Path>,
        file: &str,
        display_name: &str,
    ) -> Response {
        let relative = Path::new(file);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            warn!("Refusing download outside of static directory: '{}'", file);
            return StatusCode::BAD_REQUEST.into_response();
        }

        let path = dir.as_ref().join(relative);

        let mut response = match ServeFile::new(&path).oneshot(request).await {
            Ok(response) => response.map(Body::new),
            Err(never) => match never {},
        };

        let disposition = format!("attachment; filename=\"{}\"", display_name.replace('"', ""));
        match HeaderValue::from_str(&disposition) {
            Ok(value) => {
                response
                    .headers_mut()
                    .insert(header::CONTENT_DISPOSITION, value);
            }
            Err(_) => warn!("Display name '{}' is not a valid header value", display_name),
        }

        response
    }
}
