//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.croprec/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::DisplayMode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CroprecConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub display_mode: Option<DisplayMode>,
    pub notification_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Environment variable selecting the backend origin.
pub const API_URL_ENV: &str = "CROP_API_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_NOTIFICATION_SECS: u64 = 3;
/// Upper bound for `notification_secs`; larger values are clamped.
pub const MAX_NOTIFICATION_SECS: u64 = 3600;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub display_mode: DisplayMode,
    pub notification_duration: Duration,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            display_mode: DisplayMode::default(),
            notification_duration: Duration::from_secs(DEFAULT_NOTIFICATION_SECS),
        }
    }
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub display_mode: Option<DisplayMode>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.croprec/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".croprec").join("config.toml"))
}

/// Load config from `~/.croprec/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CroprecConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CroprecConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CroprecConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CroprecConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<CroprecConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CroprecConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# croprec configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# display_mode = "table"             # "table" (all crops + score) or "podium" (top 3)
# notification_secs = 3

# [api]
# base_url = "http://localhost:8000" # Or set CROP_API_URL env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CroprecConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, std::env::var(API_URL_ENV).ok())
}

/// Same as `resolve`, with the environment value passed in explicitly.
fn resolve_with_env(
    config: &CroprecConfig,
    cli: &CliOverrides,
    env_api_url: Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default, blank values skipped per layer
    let nonblank = |url: &String| !url.trim().is_empty();
    let api_base_url = cli
        .api_url
        .clone()
        .filter(nonblank)
        .or_else(|| env_api_url.filter(nonblank))
        .or_else(|| config.api.base_url.clone().filter(nonblank))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    // Display mode: CLI → config → default
    let display_mode = cli
        .display_mode
        .or(config.general.display_mode)
        .unwrap_or_default();

    let notification_secs = config
        .general
        .notification_secs
        .unwrap_or(DEFAULT_NOTIFICATION_SECS);
    let notification_secs = if notification_secs > MAX_NOTIFICATION_SECS {
        warn!(
            "notification_secs = {} is too large, using {}",
            notification_secs, MAX_NOTIFICATION_SECS
        );
        MAX_NOTIFICATION_SECS
    } else {
        notification_secs
    };

    ResolvedConfig {
        api_base_url,
        display_mode,
        notification_duration: Duration::from_secs(notification_secs),
    }
}
