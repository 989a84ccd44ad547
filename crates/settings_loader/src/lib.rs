//! # Settings Loader
//!
//! Centralized settings loading for the plan generation server.
//! Settings come from an optional JSON file (`settings.json` by default, or the
//! path in `SETTINGS_PATH`), and individual keys can be overridden through
//! environment variables. Missing keys fall back to [`Settings::default`].
//!
//! The generative backend API key is *not* a setting; it is read from the
//! environment by `ai_client` so it never sits in a file next to the binary.
//!
//! ## Environment overrides
//!
//! | variable               | setting                |
//! |------------------------|------------------------|
//! | `HOST`                 | `host`                 |
//! | `PORT`                 | `port`                 |
//! | `GEMINI_MODEL`         | `model`                |
//! | `GEMINI_BASE_URL`      | `base_url`             |
//! | `REQUEST_TIMEOUT_SECS` | `request_timeout_secs` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! let settings = settings_loader::load_server_settings()?;
//! println!("listening on {}:{}", settings.host, settings.port);
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use models::Settings;

pub const SETTINGS_PATH_VAR: &str = "SETTINGS_PATH";
pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

/// Loads settings from a JSON file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Reading settings file: {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&raw)
        .with_context(|| format!("Parsing settings JSON in {}", path.display()))?;
    Ok(settings)
}

/// Loads settings from a file if it exists, otherwise returns the defaults.
///
/// A file that exists but cannot be parsed is still an error.
pub fn load_settings_or_default<P: AsRef<Path>>(path: P) -> Result<Settings> {
    if settings_file_exists(&path) {
        load_settings(path)
    } else {
        Ok(Settings::default())
    }
}

/// Applies environment overrides on top of `settings` using `lookup`.
pub fn apply_env_overrides<F>(mut settings: Settings, lookup: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(host) = var("HOST") {
        settings.host = host;
    }
    if let Some(port) = var("PORT") {
        settings.port = port
            .parse()
            .with_context(|| format!("PORT must be a valid port number, got '{port}'"))?;
    }
    if let Some(model) = var("GEMINI_MODEL") {
        settings.model = model;
    }
    if let Some(base_url) = var("GEMINI_BASE_URL") {
        settings.base_url = base_url;
    }
    if let Some(timeout) = var("REQUEST_TIMEOUT_SECS") {
        settings.request_timeout_secs = timeout.parse().with_context(|| {
            format!("REQUEST_TIMEOUT_SECS must be a whole number of seconds, got '{timeout}'")
        })?;
    }

    Ok(settings)
}

/// Resolves the settings file path from `SETTINGS_PATH`, falling back to `settings.json`.
pub fn settings_path() -> PathBuf {
    std::env::var(SETTINGS_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_PATH))
}

/// Loads the server settings: file (if any) plus process environment overrides.
pub fn load_server_settings() -> Result<Settings> {
    let settings = load_settings_or_default(settings_path())?;
    apply_env_overrides(settings, |key| std::env::var(key).ok())
}

/// Checks if a settings file exists at the given path
pub fn settings_file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists() && path.as_ref().is_file()
}
