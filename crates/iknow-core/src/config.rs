//! Application configuration management.
//!
//! This module handles loading and saving the client configuration, which
//! includes the API base URL override, the expected login payload shape,
//! and the last used email.
//!
//! Configuration is stored at `~/.config/iknow/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/data directory paths
const APP_NAME: &str = "iknow";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the API base URL
const BASE_URL_ENV: &str = "IKNOW_API_BASE_URL";

/// Expected shape of the login response payload.
///
/// Deployments differ: newer API revisions return the token pair at the
/// top level, older ones nest it under a `tokens` object. `Auto` probes
/// the flat shape first and falls back to the nested one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoginShape {
    #[default]
    Auto,
    Flat,
    Nested,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub login_shape: LoginShape,
    pub last_email: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Resolve the API base URL: environment override first, then the
    /// configured value, then the default deployment.
    pub fn base_url(&self) -> String {
        std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| crate::api::DEFAULT_BASE_URL.to_string())
    }

    /// Directory where the credential store persists its entries.
    pub fn credential_dir(&self) -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME).join("credentials"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_prefers_configured_value() {
        let config = Config {
            api_base_url: Some("https://iknow.example.edu".to_string()),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "https://iknow.example.edu");
    }

    #[test]
    fn test_base_url_default() {
        let config = Config::default();
        assert_eq!(config.base_url(), crate::api::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_login_shape_roundtrip() {
        let config = Config {
            login_shape: LoginShape::Nested,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.login_shape, LoginShape::Nested);
    }

    #[test]
    fn test_login_shape_defaults_to_auto() {
        let parsed: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.login_shape, LoginShape::Auto);
    }
}
