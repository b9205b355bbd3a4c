//! Shared fixtures for the integration tests.

use axum::Router;
use http_toolkit::{
    adapters::{routes::build_router, state::AppState},
    Toolkit, ToolkitConfig,
};
use tempfile::TempDir;

#[allow(dead_code)]
pub const PNG_BYTES: &[u8] = b"\x89PNG\x0D\x0A\x1A\x0A\x00\x00\x00\x0DIHDR\x00\x00\x00\x01\x00\x00\x00\x01\x08\x06\x00\x00\x00";

/// Router backed by a fresh temporary upload directory, with webhooks limited
/// to the loopback host. Keep the `TempDir` alive for the duration of the test.
pub fn test_app(config: ToolkitConfig) -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let state = AppState::new(Toolkit::new(config), dir.path())
        .with_webhook_hosts(vec!["127.0.0.1".to_string()]);
    let router = build_router(state);
    (router, dir)
}

#[allow(dead_code)]
pub fn stored_files(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .expect("failed to read upload dir")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
