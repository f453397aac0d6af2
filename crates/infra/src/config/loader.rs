//! Configuration loader
//!
//! Builds the application configuration in three layers:
//! 1. Compiled-in defaults
//! 2. An optional TOML file probed in the working directory
//! 3. Environment variable overrides
//!
//! ## Environment Variables
//! - `SLOTBOOK_PORT`: Upload endpoint listening port
//! - `SLOTBOOK_UPLOAD_DIR`: Directory for stored photos
//! - `SLOTBOOK_SUBMIT_BASE_URL`: Base URL the submission client posts to
//! - `SLOTBOOK_HOLIDAY_API_URL`: Holiday lookup endpoint
//! - `SLOTBOOK_HOLIDAY_API_KEY`: Value for the `X-Api-Key` header
//! - `SLOTBOOK_HOLIDAY_COUNTRY`: Country query parameter
//! - `SLOTBOOK_HOLIDAY_YEAR`: Year query parameter
//!
//! ## File Locations
//! The loader probes `./slotbook.toml` then `./config.toml`.

use std::path::{Path, PathBuf};

use slotbook_domain::{Config, Result, SlotbookError};

/// Load configuration with the layered fallback strategy
///
/// # Errors
/// Returns `SlotbookError::Config` if a config file exists but cannot be
/// parsed, or if an environment override has an invalid value.
pub fn load() -> Result<Config> {
    let mut config = match probe_config_path() {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading configuration file");
            load_from_file(&path)?
        }
        None => Config::default(),
    };
    apply_env(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

/// Load configuration from a TOML file
///
/// # Errors
/// Returns `SlotbookError::Config` when the file cannot be read or parsed.
pub fn load_from_file(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| SlotbookError::Config(format!("failed to read {}: {e}", path.display())))?;
    toml::from_str(&contents)
        .map_err(|e| SlotbookError::Config(format!("failed to parse {}: {e}", path.display())))
}

fn probe_config_path() -> Option<PathBuf> {
    ["slotbook.toml", "config.toml"]
        .into_iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.is_file())
}

/// Apply environment overrides through an injectable lookup (testable seam)
fn apply_env(
    config: &mut Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(port) = lookup("SLOTBOOK_PORT") {
        config.server.port = port
            .parse::<u16>()
            .map_err(|e| SlotbookError::Config(format!("Invalid port: {e}")))?;
    }
    if let Some(dir) = lookup("SLOTBOOK_UPLOAD_DIR") {
        config.server.upload_dir = dir;
    }
    if let Some(url) = lookup("SLOTBOOK_SUBMIT_BASE_URL") {
        config.submit.base_url = url;
    }
    if let Some(url) = lookup("SLOTBOOK_HOLIDAY_API_URL") {
        config.holidays.base_url = url;
    }
    if let Some(key) = lookup("SLOTBOOK_HOLIDAY_API_KEY") {
        config.holidays.api_key = key;
    }
    if let Some(country) = lookup("SLOTBOOK_HOLIDAY_COUNTRY") {
        config.holidays.country = country;
    }
    if let Some(year) = lookup("SLOTBOOK_HOLIDAY_YEAR") {
        config.holidays.year = year
            .parse::<i32>()
            .map_err(|e| SlotbookError::Config(format!("Invalid year: {e}")))?;
    }
    Ok(())
}
