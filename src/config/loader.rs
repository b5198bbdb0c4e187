// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** validate. Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file, anchor a relative `cwd` at the file's
/// directory, and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let mut raw_config = load_from_path(path)?;
    raw_config.resolve_relative_to(&config_root_dir(path));
    let config = ConfigFile::try_from(raw_config)?;
    debug!(path = ?path, "loaded config file");
    Ok(config)
}

/// `Globwatch.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Globwatch.toml")
}

/// Directory a config file's relative paths are anchored at.
///
/// A bare file name (parent = "") falls back to the current working
/// directory.
pub fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
