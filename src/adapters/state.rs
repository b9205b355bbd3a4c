use axum::extract::FromRef;
use std::{path::PathBuf, sync::Arc};

use crate::services::Toolkit;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub toolkit: Arc<Toolkit>,
    pub upload_dir: Arc<PathBuf>,
    pub webhook_hosts: Arc<WebhookHosts>,
}

/// Hosts the webhook route may push to. Empty means none.
#[derive(Debug, Clone, Default)]
pub struct WebhookHosts(pub Vec<String>);

impl WebhookHosts {
    pub fn allows(&self, host: &str) -> bool {
        self.0.iter().any(|allowed| allowed.eq_ignore_ascii_case(host))
    }
}

impl AppState {
    pub fn new(toolkit: Toolkit, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            toolkit: Arc::new(toolkit),
            upload_dir: Arc::new(upload_dir.into()),
            webhook_hosts: Arc::new(WebhookHosts::default()),
        }
    }

    pub fn with_webhook_hosts(mut self, hosts: Vec<String>) -> Self {
        self.webhook_hosts = Arc::new(WebhookHosts(hosts));
        self
    }
}
