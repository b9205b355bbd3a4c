use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::{domain::config::toolkit::ToolkitConfig, services::Toolkit};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub config: ToolkitConfig,
}

pub struct HealthController;

impl HealthController {
    /// GET /api/v1/health
    pub async fn health_check(State(toolkit): State<Arc<Toolkit>>) -> Json<HealthResponse> {
        info!("Health check requested");

        Json(HealthResponse {
            status: "healthy".to_string(),
            config: toolkit.config().clone(),
        })
    }
}
