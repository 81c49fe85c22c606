use crate::core::CustomizationOptions;
use crate::utils::error::{LiturgiaError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiConfig,
    pub preview: Option<PreviewConfig>,
    pub notifications: Option<NotificationsConfig>,
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviewConfig {
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub liturgical_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    pub ttl_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_path: Option<String>,
}

impl TomlConfig {
    /// Loads a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LiturgiaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration text, expanding `${VAR}` from the environment first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LiturgiaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LiturgiaError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn base_url(&self) -> &str {
        &self.api.base_url
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.api.timeout_seconds.map(Duration::from_secs)
    }

    pub fn notification_ttl(&self) -> Option<Duration> {
        self.notifications
            .as_ref()
            .and_then(|n| n.ttl_ms)
            .map(Duration::from_millis)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.export.as_ref().and_then(|e| e.output_path.as_deref())
    }

    /// Preview options with unset fields taken from the built-in defaults.
    pub fn preview_defaults(&self) -> CustomizationOptions {
        let defaults = CustomizationOptions::default();
        let preview = self.preview.clone().unwrap_or_default();
        CustomizationOptions {
            font_size_px: preview.font_size.unwrap_or(defaults.font_size_px),
            font_family_id: preview.font_family.unwrap_or(defaults.font_family_id),
            liturgical_color_id: preview
                .liturgical_color
                .unwrap_or(defaults.liturgical_color_id),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api.base_url)?;

        if let Some(timeout) = self.api.timeout_seconds {
            validate_range("api.timeout_seconds", timeout, 1, 600)?;
        }

        if let Some(ttl) = self.notifications.as_ref().and_then(|n| n.ttl_ms) {
            validate_range("notifications.ttl_ms", ttl, 1, 60_000)?;
        }

        if let Some(path) = self.output_path() {
            validate_path("export.output_path", path)?;
        }

        if let Some(preview) = &self.preview {
            if let Some(family) = &preview.font_family {
                validate_non_empty_string("preview.font_family", family)?;
            }
            if let Some(color) = &preview.liturgical_color {
                validate_non_empty_string("preview.liturgical_color", color)?;
            }
        }

        Ok(())
    }
}
