use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::module::catalog::{CACHE_MAX_AGE_HOURS, DEFAULT_BASE_URL};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory the cache envelopes are written under
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,

    /// Base URL of the general-perturbations endpoint
    #[serde(default = "default_catalog_base_url")]
    pub catalog_base_url: String,

    /// Catalog group served when a request names none
    #[serde(default = "default_group")]
    pub default_group: String,

    #[serde(default = "default_cache_max_age_hours")]
    pub cache_max_age_hours: u64,

    #[serde(default = "default_fetch_timeout_seconds")]
    pub fetch_timeout_seconds: u64,

    /// Serve an expired cache envelope when the remote fetch fails, instead
    /// of failing the request
    #[serde(default)]
    pub serve_stale_on_error: bool,

    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_cache_dir() -> String {
    "data".to_string()
}

fn default_catalog_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_group() -> String {
    "analyst".to_string()
}

fn default_cache_max_age_hours() -> u64 {
    CACHE_MAX_AGE_HOURS as u64
}

fn default_fetch_timeout_seconds() -> u64 {
    30
}

fn default_enable_cors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            cache_dir: default_cache_dir(),
            catalog_base_url: default_catalog_base_url(),
            default_group: default_group(),
            cache_max_age_hours: default_cache_max_age_hours(),
            fetch_timeout_seconds: default_fetch_timeout_seconds(),
            serve_stale_on_error: false,
            enable_cors: default_enable_cors(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        if !Path::new(path).exists() {
            info!("Config file '{}' not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;
        let config: Config =
            toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_group, "analyst");
        assert_eq!(config.cache_max_age_hours, 6);
        assert_eq!(config.fetch_timeout_seconds, 30);
        assert!(!config.serve_stale_on_error);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("port = 9090\nserve_stale_on_error = true\n").unwrap();
        assert_eq!(config.port, 9090);
        assert!(config.serve_stale_on_error);
        assert_eq!(config.cache_dir, "data");
        assert_eq!(config.server_address(), "0.0.0.0:9090");
    }
}
