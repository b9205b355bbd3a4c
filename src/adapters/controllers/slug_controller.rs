use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};

use crate::{
    adapters::{
        dto::slug_dto::{CreateSlugRequest, SlugResponse},
        extract::StrictJson,
    },
    application::error::ApplicationError,
    domain::models::envelope::JsonResponse,
    services::Toolkit,
};

pub struct SlugController;

impl SlugController {
    /// POST /api/v1/slugs
    /// Body: {"text": "Hello World!"}
    pub async fn create_slug(
        State(toolkit): State<Arc<Toolkit>>,
        StrictJson(body): StrictJson<CreateSlugRequest>,
    ) -> Result<Response, ApplicationError> {
        let slug = toolkit.slugify(&body.text)?;

        let payload = JsonResponse::ok("slug created", SlugResponse { slug });
        Ok(toolkit.write_json(StatusCode::OK, &payload, None)?)
    }
}
