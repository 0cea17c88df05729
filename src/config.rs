use crate::error::Error;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_API_BASE: &str = "https://images-api.nasa.gov";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub nasa: NasaApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NasaApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for NasaApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the platform config directory, falling back
    /// to defaults when no config file exists. The server needs no
    /// configuration to run against the public NASA API.
    pub fn load() -> Result<Self, Error> {
        let Some(dirs) = ProjectDirs::from("", "", "nasa-media-mcp") else {
            return Ok(Self::default());
        };
        let path = dirs.config_dir().join("config.toml");
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
    }
}
