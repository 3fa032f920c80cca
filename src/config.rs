//! Configuration loading
//!
//! Reads `~/.config/searchbox/config.toml` (or an explicit path). Problems with
//! the file never abort startup: the defaults are used and a warning is
//! returned for the caller to display.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

pub use types::{
    Config, DEFAULT_DEBOUNCE_MS, DEFAULT_MINIMUM_TRIGGER_LENGTH, EngineConfig, EnhancementConfig,
    OpenBehavior, ProviderConfig, QueryPathBehavior,
};

const CONFIG_DIR: &str = "searchbox";
const CONFIG_FILE: &str = "config.toml";

/// Errors raised while reading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("{0}")]
    Invalid(String),
}

/// Outcome of loading configuration
#[derive(Debug, Default)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when the file existed but could not be used
    pub warning: Option<String>,
}

/// Default location of the config file
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => ConfigResult::default(),
    }
}

/// Load configuration from an explicit path
///
/// Any read, parse or validation failure falls back to defaults with a warning.
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Ignoring config file {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let config = parse_config(&contents)?;
    validate(&config.search)?;
    Ok(config)
}

/// Parse a TOML document into a Config
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse(e.message().to_string()))
}

/// Check option combinations that serde alone cannot express
pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
    if config.minimum_trigger_length == 0 {
        return Err(ConfigError::Invalid(
            "minimum_trigger_length must be at least 1".to_string(),
        ));
    }

    if config.search_in_new_page {
        let page_url = config.page_url.as_deref().ok_or_else(|| {
            ConfigError::Invalid("search_in_new_page requires page_url".to_string())
        })?;
        Url::parse(page_url)
            .map_err(|e| ConfigError::Invalid(format!("page_url '{}': {}", page_url, e)))?;

        if config.query_path_behavior == QueryPathBehavior::QueryParameter
            && config.query_string_parameter.trim().is_empty()
        {
            return Err(ConfigError::Invalid(
                "query_string_parameter must not be empty".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
