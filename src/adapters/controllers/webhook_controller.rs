use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};
use tracing::{info, warn};

use crate::{
    adapters::{
        dto::webhook_dto::{PushRequest, PushResponse},
        extract::StrictJson,
        state::WebhookHosts,
    },
    application::error::ApplicationError,
    domain::models::envelope::JsonResponse,
    services::Toolkit,
};

pub struct WebhookController;

impl WebhookController {
    /// Forwards `payload` to `uri` and reports the remote status code. Only
    /// hosts listed in `WEBHOOK_ALLOWED_HOSTS` are reachable.
    /// POST /api/v1/webhooks
    pub async fn push(
        State(toolkit): State<Arc<Toolkit>>,
        State(allowed_hosts): State<Arc<WebhookHosts>>,
        StrictJson(body): StrictJson<PushRequest>,
    ) -> Result<Response, ApplicationError> {
        let host = reqwest::Url::parse(&body.uri)
            .ok()
            .and_then(|url| url.host_str().map(|h| h.to_string()))
            .ok_or_else(|| ApplicationError::BadRequest(format!("invalid uri: {}", body.uri)))?;

        if !allowed_hosts.allows(&host) {
            warn!("Refusing to push to host {}", host);
            return Err(ApplicationError::BadRequest(format!(
                "host {} is not allowed",
                host
            )));
        }

        info!("Forwarding payload to {}", body.uri);

        let (_response, status) = toolkit
            .push_json_to_remote(&body.uri, &body.payload, None)
            .await?;

        let payload = JsonResponse::ok(
            "payload delivered",
            PushResponse {
                status_code: status.as_u16(),
            },
        );
        Ok(toolkit.write_json(StatusCode::OK, &payload, None)?)
    }
}
