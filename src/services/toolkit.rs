use reqwest::Client;

use crate::domain::config::toolkit::ToolkitConfig;

/// Shared helper set for HTTP handlers.
///
/// Built once from a [`ToolkitConfig`] and shared by reference (usually
/// behind an `Arc` in router state). Defaults are resolved here, so the
/// configuration never changes after construction.
#[derive(Debug, Clone)]
pub struct Toolkit {
    config: ToolkitConfig,
    client: Client,
}

impl Toolkit {
    pub fn new(config: ToolkitConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Uses `client` as the default for [`Toolkit::push_json_to_remote`].
    pub fn with_client(config: ToolkitConfig, client: Client) -> Self {
        Self {
            config: config.normalized(),
            client,
        }
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::new(ToolkitConfig::default())
    }
}
