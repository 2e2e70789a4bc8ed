//! Client configuration - base URL and API token

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR, CONFIG_FILE, DEFAULT_BASE_URL};

/// Environment variable overriding the backend base URL
pub const ENV_BASE_URL: &str = "CAMPUS_PORTAL_URL";
/// Environment variable overriding the API token
pub const ENV_TOKEN: &str = "CAMPUS_PORTAL_TOKEN";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub token: String,
}

fn default_base_url() -> String {
    String::from(DEFAULT_BASE_URL)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            token: String::new(),
        }
    }
}

impl Config {
    /// Load the config file from the home directory, then apply env overrides.
    /// A missing file yields defaults; a missing token is rejected later,
    /// when the session is established.
    pub fn load() -> Result<Self> {
        let dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR);
        let mut config = Self::load_from(&dir.join(CONFIG_FILE))?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.is_empty() {
                self.base_url = url;
            }
        }
        if let Ok(token) = std::env::var(ENV_TOKEN) {
            if !token.is_empty() {
                self.token = token;
            }
        }
    }

    /// Base URL with any trailing slash removed, for joining endpoint paths
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.token.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"base_url": "https://portal.example.edu/api/", "token": "abc123"}"#,
        )
        .unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url, "https://portal.example.edu/api/");
        assert_eq!(config.token, "abc123");
        assert_eq!(config.base_url_trimmed(), "https://portal.example.edu/api");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"token": "abc123"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.token, "abc123");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
