use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

static DEFAULT_SERVER_URL: &str = "http://localhost:8080";

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

/// Global configuration at ~/.config/holcal/config.toml
///
/// Currently just the holiday store's base URL; the `--server` flag
/// overrides it per invocation.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            server_url: default_server_url(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("holcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
