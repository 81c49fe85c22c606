#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, CustomizationOptions};
use crate::domain::model::NOTIFICATION_TTL;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_OUTPUT_PATH: &str = "./exports";

/// Effective settings after merging defaults, the config file and flags.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: String,
    pub request_timeout: Option<Duration>,
    pub notification_ttl: Duration,
    pub output_path: String,
    pub preview: CustomizationOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
            notification_ttl: NOTIFICATION_TTL,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            preview: CustomizationOptions::default(),
        }
    }
}

impl From<&TomlConfig> for AppConfig {
    fn from(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            base_url: config.base_url().to_string(),
            request_timeout: config.request_timeout(),
            notification_ttl: config
                .notification_ttl()
                .unwrap_or(defaults.notification_ttl),
            output_path: config
                .output_path()
                .map(str::to_string)
                .unwrap_or(defaults.output_path),
            preview: config.preview_defaults(),
        }
    }
}

impl ConfigProvider for AppConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    fn notification_ttl(&self) -> Duration {
        self.notification_ttl
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        if let Some(timeout) = self.request_timeout {
            validate_range("timeout", timeout.as_secs(), 1, 600)?;
        }
        validate_range(
            "notification_ttl_ms",
            self.notification_ttl.as_millis(),
            1,
            60_000,
        )?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
