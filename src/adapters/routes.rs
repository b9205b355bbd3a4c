use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::{
    controllers::{
        file_controller::FileController, health_controller::HealthController,
        slug_controller::SlugController, webhook_controller::WebhookController,
    },
    state::AppState,
};

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(HealthController::health_check))
        .route("/api/v1/files", post(FileController::upload_files))
        .route("/api/v1/files/original", post(FileController::upload_original))
        .route(
            "/api/v1/files/{file_name}/content",
            get(FileController::download_file),
        )
        .route("/api/v1/slugs", post(SlugController::create_slug))
        .route("/api/v1/webhooks", post(WebhookController::push))
        .with_state(app_state)
}
