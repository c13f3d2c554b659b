//! Configuration file loading with precedence handling.

use crate::window::EvictionPolicy;
use crate::window::DEFAULT_BUFFER_MULTIPLIER;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending key.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/msgwin/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Viewport heights of content kept after eviction.
    #[serde(default)]
    pub buffer_multiplier: Option<f64>,

    /// Report output format.
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Eviction buffer multiplier.
    pub buffer_multiplier: f64,
    /// Report output format.
    pub format: OutputFormat,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            buffer_multiplier: DEFAULT_BUFFER_MULTIPLIER,
            format: OutputFormat::Text,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Eviction tuning derived from this config.
    pub fn eviction_policy(&self) -> EvictionPolicy {
        EvictionPolicy::new(self.buffer_multiplier)
    }

    /// Reject values the windowing core cannot use.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.buffer_multiplier.is_finite() || self.buffer_multiplier < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "buffer_multiplier",
                reason: format!(
                    "must be a finite non-negative number, got {}",
                    self.buffer_multiplier
                ),
            });
        }
        Ok(self)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/msgwin/msgwin.log` on Unix-like systems,
/// falling back to the current directory if no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("msgwin").join("msgwin.log")
    } else {
        PathBuf::from("msgwin.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path (`~/.config/msgwin/config.toml` on Unix).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("msgwin").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `MSGWIN_CONFIG` environment variable
/// 3. Default path `~/.config/msgwin/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("MSGWIN_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        buffer_multiplier: config
            .buffer_multiplier
            .unwrap_or(defaults.buffer_multiplier),
        format: config.format.unwrap_or(defaults.format),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `MSGWIN_FORMAT`: `text` or `json`
/// - `MSGWIN_BUFFER_MULTIPLIER`: eviction buffer multiplier
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] naming the variable if either one is
/// set but cannot be parsed. Logging is not up yet at this point, so a bad
/// override has to fail rather than be skipped with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var("MSGWIN_FORMAT") {
        config.format = raw.parse().map_err(|reason| ConfigError::InvalidValue {
            field: "MSGWIN_FORMAT",
            reason,
        })?;
    }

    if let Ok(raw) = std::env::var("MSGWIN_BUFFER_MULTIPLIER") {
        config.buffer_multiplier = raw
            .parse::<f64>()
            .map_err(|e| ConfigError::InvalidValue {
                field: "MSGWIN_BUFFER_MULTIPLIER",
                reason: format!("'{raw}': {e}"),
            })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    format_override: Option<OutputFormat>,
    multiplier_override: Option<f64>,
) -> ResolvedConfig {
    if let Some(format) = format_override {
        config.format = format;
    }

    if let Some(multiplier) = multiplier_override {
        config.buffer_multiplier = multiplier;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
