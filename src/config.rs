use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "mistral";
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Settings handed to the pipeline constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub model: String,
    pub base_url: String,
    /// `None` means the request may block indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// On-disk config. Every field is optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Values taken from the command line; these win over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

pub fn default_config_path() -> Result<PathBuf> {
    let mut path = dirs::home_dir().context("Could not find home directory")?;
    path.push(".text_transformer");
    path.push("config.json");
    Ok(path)
}

impl FileConfig {
    /// A missing file is not an error; a broken one is.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {:?}", path))?;
        Ok(config)
    }
}

impl Config {
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Self {
        let defaults = Config::default();

        let model = overrides.model.or(file.model).unwrap_or(defaults.model);
        let base_url = overrides
            .base_url
            .or(file.base_url)
            .unwrap_or(defaults.base_url)
            .trim_end_matches('/')
            .to_string();
        let timeout = overrides
            .timeout_secs
            .or(file.timeout_secs)
            .map(Duration::from_secs);

        Self { model, base_url, timeout }
    }
}
