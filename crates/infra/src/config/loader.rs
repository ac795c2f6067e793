//! Configuration loader
//!
//! Loads the engine configuration from a file, then applies environment
//! overrides on top.
//!
//! ## Loading Strategy
//! 1. `OPSBOARD_CONFIG` names a config file explicitly
//! 2. Otherwise, probes the standard paths for a config file
//! 3. Otherwise, starts from the built-in defaults
//! 4. Environment overrides are applied last, then the result is validated
//!
//! Config files may be partial; every missing key keeps its default.
//!
//! ## Environment Variables
//! - `OPSBOARD_CONFIG`: Path to a `.toml` or `.json` config file
//! - `OPSBOARD_DEFAULT_DAY_MINUTES`: Standard day length in minutes
//! - `OPSBOARD_SHORT_CALL_THRESHOLD_MIN`: Short-call threshold in minutes
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./opsboard.toml` or `./opsboard.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use opsboard_domain::{EngineConfig, OpsBoardError, Result};

use crate::errors::InfraError;

pub const CONFIG_PATH_ENV: &str = "OPSBOARD_CONFIG";
pub const DEFAULT_DAY_MINUTES_ENV: &str = "OPSBOARD_DEFAULT_DAY_MINUTES";
pub const SHORT_CALL_THRESHOLD_ENV: &str = "OPSBOARD_SHORT_CALL_THRESHOLD_MIN";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["opsboard.toml", "opsboard.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `OpsBoardError::Config` if:
/// - `OPSBOARD_CONFIG` names a file that does not exist
/// - The config file cannot be read or parsed
/// - An override variable is not a number
/// - The resulting configuration fails validation
pub fn load() -> Result<EngineConfig> {
    let explicit = std::env::var(CONFIG_PATH_ENV).ok().filter(|p| !p.trim().is_empty());

    let mut config = match explicit.map(PathBuf::from).or_else(probe_config_paths) {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::info!("No config file found, using built-in defaults");
            EngineConfig::default()
        }
    };

    apply_env_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations for a config file.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `OpsBoardError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The parsed configuration fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<EngineConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(OpsBoardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            OpsBoardError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| OpsBoardError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `OpsBoardError::Config` if format is invalid or parsing fails.
pub(crate) fn parse_config(contents: &str, path: &Path) -> Result<EngineConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents)
            .map_err(|e| OpsBoardError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(OpsBoardError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard paths for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| cwd.join(name)));
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.is_file())
}

/// Apply `OPSBOARD_*` overrides on top of `config`
///
/// Unset or blank variables leave the current value alone.
///
/// # Errors
/// Returns `OpsBoardError::Config` if a variable is set but is not a number.
pub fn apply_env_overrides(config: &mut EngineConfig) -> Result<()> {
    if let Some(minutes) = env_f64(DEFAULT_DAY_MINUTES_ENV)? {
        tracing::debug!(minutes, "Default day length overridden from environment");
        config.default_day_minutes = minutes;
    }
    if let Some(threshold) = env_f64(SHORT_CALL_THRESHOLD_ENV)? {
        tracing::debug!(threshold, "Short-call threshold overridden from environment");
        config.short_call_threshold_minutes = threshold;
    }
    Ok(())
}

/// Parse an optional numeric environment variable
///
/// # Errors
/// Returns `OpsBoardError::Config` if the variable is set to a non-number.
fn env_f64(key: &str) -> Result<Option<f64>> {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| OpsBoardError::Config(format!("Invalid value for {}: {}", key, e))),
        _ => Ok(None),
    }
}
