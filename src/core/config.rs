//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.mangarank/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::category::{Category, InvalidCategoryError};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MangarankConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_category: Option<Category>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_LOG_FILE: &str = "mangarank.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_category: Category,
    pub base_url: String,
    pub timeout: Duration,
    pub log_level: log::LevelFilter,
    pub log_file: String,
}

/// Values taken from CLI flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub category: Option<Category>,
    pub base_url: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    InvalidCategory(InvalidCategoryError),
    InvalidValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::InvalidCategory(e) => write!(f, "config error: {e}"),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "config error: invalid value '{value}' for {key}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<InvalidCategoryError> for ConfigError {
    fn from(e: InvalidCategoryError) -> Self {
        ConfigError::InvalidCategory(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.mangarank/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mangarank").join("config.toml"))
}

/// Where the loaded config came from. Loading runs before the logger is
/// up, so the caller logs this once logging is initialised.
#[derive(Debug, PartialEq)]
pub enum ConfigOrigin {
    File(PathBuf),
    /// No file existed; a commented default was written here.
    Generated(PathBuf),
    /// Built-in defaults only, with the reason.
    Defaults(String),
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigOrigin::File(path) => write!(f, "loaded config from {}", path.display()),
            ConfigOrigin::Generated(path) => {
                write!(f, "no config file found, generated default at {}", path.display())
            }
            ConfigOrigin::Defaults(reason) => write!(f, "using default config: {reason}"),
        }
    }
}

/// Load config from `~/.mangarank/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MangarankConfig::default()`. If it exists but is malformed
/// (including an unknown category name), returns `ConfigError::Parse`.
pub fn load_config() -> Result<(MangarankConfig, ConfigOrigin), ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok((
            MangarankConfig::default(),
            ConfigOrigin::Defaults("could not determine home directory".to_string()),
        )),
    }
}

pub fn load_config_from(path: &Path) -> Result<(MangarankConfig, ConfigOrigin), ConfigError> {
    if !path.exists() {
        let origin = match generate_default_config(path) {
            Ok(()) => ConfigOrigin::Generated(path.to_path_buf()),
            Err(e) => ConfigOrigin::Defaults(format!(
                "failed to write default config to {}: {e}",
                path.display()
            )),
        };
        return Ok((MangarankConfig::default(), origin));
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MangarankConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok((config, ConfigOrigin::File(path.to_path_buf())))
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# mangarank Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_category = "Top"           # "Top", "Favourite" or "New"
# log_level = "debug"                # "error", "warn", "info", "debug", "trace", "off"
# log_file = "mangarank.log"

# [source]
# base_url = "http://localhost:3000/api"   # Or set MANGARANK_BASE_URL env var
# timeout_secs = 15
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &MangarankConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as `resolve`, with the environment supplied by the caller.
pub fn resolve_with_env(
    config: &MangarankConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Category: CLI → env → config → default. A bad env value is an error,
    // not a reason to fall back.
    let env_category = env("MANGARANK_CATEGORY")
        .map(|s| s.parse::<Category>())
        .transpose()?;
    let default_category = cli
        .category
        .or(env_category)
        .or(config.general.default_category)
        .unwrap_or_default();

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("MANGARANK_BASE_URL"))
        .or_else(|| config.source.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let base_url = base_url.trim_end_matches('/').to_string();

    // Timeout: env → config → default
    let timeout_secs = match env("MANGARANK_TIMEOUT_SECS") {
        Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
            key: "MANGARANK_TIMEOUT_SECS",
            value: raw.clone(),
        })?,
        None => config.source.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
    };

    let log_level = match config.general.log_level.as_deref() {
        Some(raw) => raw.parse::<log::LevelFilter>().map_err(|_| ConfigError::InvalidValue {
            key: "general.log_level",
            value: raw.to_string(),
        })?,
        None => log::LevelFilter::Debug,
    };

    Ok(ResolvedConfig {
        default_category,
        base_url,
        timeout: Duration::from_secs(timeout_secs),
        log_level,
        log_file: config
            .general
            .log_file
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
    })
}
