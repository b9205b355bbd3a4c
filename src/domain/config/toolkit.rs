use std::{env, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::services::ConfigError;

pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024; // 1GB
pub const DEFAULT_MAX_JSON_SIZE: usize = 1024 * 1024; // 1MB

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ToolkitConfig {
    #[serde(rename = "maxFileSize")]
    pub max_file_size: u64,
    #[serde(rename = "allowedFileTypes")]
    pub allowed_file_types: Vec<String>,
    #[serde(rename = "maxJsonSize")]
    pub max_json_size: usize,
    #[serde(rename = "allowUnknownFields")]
    pub allow_unknown_fields: bool,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_file_types: Vec::new(),
            max_json_size: DEFAULT_MAX_JSON_SIZE,
            allow_unknown_fields: false,
        }
    }
}

impl ToolkitConfig {
    /// Reads `MAX_FILE_SIZE`, `ALLOWED_FILE_TYPES`, `MAX_JSON_SIZE` and
    /// `ALLOW_UNKNOWN_FIELDS`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("MAX_FILE_SIZE") {
            config.max_file_size = parse_var("MAX_FILE_SIZE", &value)?;
        }

        if let Some(value) = lookup("ALLOWED_FILE_TYPES") {
            config.allowed_file_types = value
                .split(',')
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect();
        }

        if let Some(value) = lookup("MAX_JSON_SIZE") {
            config.max_json_size = parse_var("MAX_JSON_SIZE", &value)?;
        }

        if let Some(value) = lookup("ALLOW_UNKNOWN_FIELDS") {
            config.allow_unknown_fields = parse_var("ALLOW_UNKNOWN_FIELDS", &value)?;
        }

        Ok(config)
    }

    /// Replaces zero sizes with the defaults. Called once when a
    /// [`Toolkit`](crate::Toolkit) is built so the config never changes afterwards.
    pub fn normalized(mut self) -> Self {
        if self.max_file_size == 0 {
            self.max_file_size = DEFAULT_MAX_FILE_SIZE;
        }
        if self.max_json_size == 0 {
            self.max_json_size = DEFAULT_MAX_JSON_SIZE;
        }
        self
    }

    pub fn is_type_allowed(&self, content_type: &str) -> bool {
        self.allowed_file_types.is_empty()
            || self
                .allowed_file_types
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(content_type))
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::InvalidVariable {
        key: key.to_string(),
        value: value.to_string(),
    })
}
