//! Configuration for the wayfinder CLI
//! Default location is ~/.wayfinder/config/wayfinder.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wayfinder_core::{WayfinderError, WayfinderResult};

use crate::cli::OutputFormat;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WayfinderConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn max_level(&self) -> WayfinderResult<tracing::Level> {
        self.level.parse().map_err(|_| {
            WayfinderError::Config(format!("invalid log level '{}' in [logging]", self.level))
        })
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// The wayfinder home directory (defaults to ~/.wayfinder)
pub fn wayfinder_home() -> WayfinderResult<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| WayfinderError::Config("Cannot determine home directory".to_string()))
        .map(|h| h.join(".wayfinder"))
}

/// Location: ~/.wayfinder/config/wayfinder.toml
pub fn default_config_path() -> WayfinderResult<PathBuf> {
    Ok(wayfinder_home()?.join("config").join("wayfinder.toml"))
}

/// `explicit` if given, the default location otherwise
pub fn resolve_config_path(explicit: Option<&Path>) -> WayfinderResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

/// Load the configuration; a missing file yields the defaults.
pub fn load_config(explicit: Option<&Path>) -> WayfinderResult<WayfinderConfig> {
    let config_path = resolve_config_path(explicit)?;

    if !config_path.exists() {
        return Ok(WayfinderConfig::default());
    }

    let contents = fs::read_to_string(&config_path).map_err(|err| {
        WayfinderError::Config(format!("reading {}: {err}", config_path.display()))
    })?;
    toml::from_str(&contents)
        .map_err(|err| WayfinderError::Parse(format!("{}: {err}", config_path.display())))
}

/// Save the configuration, creating parent directories as needed.
pub fn save_config(config: &WayfinderConfig, path: &Path) -> WayfinderResult<()> {
    if let Some(config_dir) = path.parent() {
        fs::create_dir_all(config_dir)?;
    }

    let contents = toml::to_string_pretty(config)
        .map_err(|err| WayfinderError::Config(format!("serializing config: {err}")))?;
    fs::write(path, contents)?;
    Ok(())
}
