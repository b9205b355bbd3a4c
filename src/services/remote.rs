use axum::http::{header, StatusCode};
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::info;

use crate::services::{RemoteError, Toolkit};

impl Toolkit {
    /// POSTs `data` as JSON to `uri`. Uses `client` when given, otherwise the
    /// toolkit's own client.
    pub async fn push_json_to_remote<T: Serialize + ?Sized>(
        &self,
        uri: &str,
        data: &T,
        client: Option<&Client>,
    ) -> Result<(Response, StatusCode), RemoteError> {
        let body = serde_json::to_vec(data)?;
        let client = client.unwrap_or(self.client());

        let response = client
            .post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        info!("Pushed JSON to {} (status {})", uri, status);

        Ok((response, status))
    }
}
