//! Configuration loader
//!
//! Builds an [`AppConfig`] from built-in defaults, an optional file and
//! environment overrides.
//!
//! ## Loading Strategy
//! 1. Start from [`AppConfig::default`]
//! 2. Replace with the explicit `--config` file, or the first probed file
//! 3. Apply `PODPUBLISH_*` environment overrides
//!
//! Command-line flags are applied last by the binary.
//!
//! ## Environment Variables
//! - `PODPUBLISH_API_BASE_URL`: Vendor API base URL
//! - `PODPUBLISH_MAX_ATTEMPTS`: Attempts per call, including the first
//! - `PODPUBLISH_BACKOFF_MS`: Linear backoff step in milliseconds
//! - `PODPUBLISH_TIMEOUT_SECS`: Request timeout in seconds
//! - `PODPUBLISH_BLUEPRINT_ID`: Catalog blueprint
//! - `PODPUBLISH_PROVIDER_ID`: Print provider id (wins over the name)
//! - `PODPUBLISH_PROVIDER_NAME`: Print provider title
//! - `PODPUBLISH_PRICE_CENTS`: Variant price in cents
//! - `PODPUBLISH_SIZES`: Comma-separated sizes
//! - `PODPUBLISH_COLORS`: Comma-separated colors
//! - `PODPUBLISH_SHOP_ID`: Target shop
//! - `PODPUBLISH_INCLUDE_OUT_OF_STOCK`: Show out-of-stock colors (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./podpublish.toml`, `./podpublish.json`, `./config.toml`,
//!    `./config.json` (current working directory)
//! 2. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use podpublish_domain::{AppConfig, PublishError, Result};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["podpublish.toml", "podpublish.json", "config.toml", "config.json"];

/// Load configuration: defaults, then a file, then environment overrides.
///
/// With `path` set the file must exist. Without it, a probed file is used
/// when one is found and defaults otherwise.
///
/// # Errors
/// Returns `PublishError::Config` if the file is missing, unreadable or
/// malformed, or an override has an invalid value.
pub fn load(path: Option<&Path>) -> Result<AppConfig> {
    let mut config = match path {
        Some(path) => load_from_file(path)?,
        None => match probe_config_paths() {
            Some(found) => load_from_file(&found)?,
            None => {
                tracing::debug!("No config file found, using defaults");
                AppConfig::default()
            }
        },
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// Supports both JSON and TOML formats (detected by file extension).
/// Missing fields keep their defaults.
///
/// # Errors
/// Returns `PublishError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Err(PublishError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| PublishError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PublishError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PublishError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(PublishError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Apply `PODPUBLISH_*` environment variables on top of `config`.
///
/// Unset or empty variables leave the current value alone.
///
/// # Errors
/// Returns `PublishError::Config` naming the variable when a value cannot
/// be parsed.
pub fn apply_env_overrides(config: &mut AppConfig) -> Result<()> {
    let api = &mut config.api;
    if let Some(url) = env_string("PODPUBLISH_API_BASE_URL") {
        api.base_url = url;
    }
    if let Some(attempts) = env_parse("PODPUBLISH_MAX_ATTEMPTS")? {
        api.max_attempts = attempts;
    }
    if let Some(backoff) = env_parse("PODPUBLISH_BACKOFF_MS")? {
        api.backoff_ms = backoff;
    }
    if let Some(timeout) = env_parse("PODPUBLISH_TIMEOUT_SECS")? {
        api.timeout_secs = timeout;
    }

    let publish = &mut config.publish;
    if let Some(blueprint) = env_parse("PODPUBLISH_BLUEPRINT_ID")? {
        publish.blueprint_id = blueprint;
    }
    if let Some(provider) = env_parse("PODPUBLISH_PROVIDER_ID")? {
        publish.provider_id = Some(provider);
    }
    if let Some(name) = env_string("PODPUBLISH_PROVIDER_NAME") {
        publish.provider_name = name;
    }
    if let Some(price) = env_parse("PODPUBLISH_PRICE_CENTS")? {
        publish.price_cents = price;
    }
    if let Some(sizes) = env_list("PODPUBLISH_SIZES") {
        publish.sizes = sizes;
    }
    if let Some(colors) = env_list("PODPUBLISH_COLORS") {
        publish.colors = Some(colors);
    }
    if let Some(shop) = env_parse("PODPUBLISH_SHOP_ID")? {
        publish.shop_id = Some(shop);
    }
    if let Some(include) = env_bool("PODPUBLISH_INCLUDE_OUT_OF_STOCK")? {
        publish.include_out_of_stock = include;
    }

    Ok(())
}

/// Non-empty, trimmed environment variable.
fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

/// Parse an optional environment variable
///
/// # Errors
/// Returns `PublishError::Config` if the variable is set but invalid.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_string(key)
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|e| PublishError::Config(format!("Invalid {}: {}", key, e)))
        })
        .transpose()
}

/// Comma-separated list; blank entries are dropped.
fn env_list(key: &str) -> Option<Vec<String>> {
    let items: Vec<String> = env_string(key)?
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    (!items.is_empty()).then_some(items)
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Errors
/// Returns `PublishError::Config` if the variable is set to anything else.
fn env_bool(key: &str) -> Result<Option<bool>> {
    let Some(value) = env_string(key) else {
        return Ok(None);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(PublishError::Config(format!(
            "Invalid {key}: expected true/false, yes/no, on/off or 1/0, got '{value}'"
        ))),
    }
}
