use std::path::PathBuf;

use http_toolkit::{
    adapters::{routes::build_router, state::AppState},
    ShutdownHook, Toolkit, ToolkitConfig,
};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .expect("PORT must be a valid u16");

    let upload_dir =
        PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string()));

    let config = ToolkitConfig::from_env().expect("ERROR: invalid toolkit configuration");
    tracing::info!(
        "Max upload size: {} bytes, max JSON size: {} bytes, allowed types: {:?}",
        config.max_file_size,
        config.max_json_size,
        config.allowed_file_types
    );

    let toolkit = Toolkit::new(config);
    toolkit
        .create_dir_if_not_exists(&upload_dir)
        .await
        .expect("ERROR: failed to create upload directory");

    // Configure CORS
    let cors = if let Ok(allowed_origins) = std::env::var("CORS_ALLOWED_ORIGINS") {
        // Parse comma-separated origins
        let origins: Vec<_> = allowed_origins
            .split(',')
            .map(|s| s.trim().parse().expect("Invalid CORS origin"))
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Allow all origins if not specified (only for development)
        CorsLayer::permissive()
    };

    let webhook_hosts: Vec<String> = std::env::var("WEBHOOK_ALLOWED_HOSTS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let state = AppState::new(toolkit, upload_dir.clone()).with_webhook_hosts(webhook_hosts);
    let router = build_router(state).layer(cors);

    let shutdown = ShutdownHook::new()
        .on_shutdown(move || tracing::info!("Upload directory was {}", upload_dir.display()));
    let token = shutdown.token();
    let hook = tokio::spawn(shutdown.wait());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", port);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { token.cancelled().await })
        .await
        .expect("Failed to start server");

    if let Err(e) = hook.await {
        tracing::error!("Shutdown hook failed: {}", e);
    }

    tracing::info!("Server stopped");
}
