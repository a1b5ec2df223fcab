// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, TemplerunError};

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (non-empty tool paths, etc.). Use [`load_and_validate`] for that.
///
/// Both read and parse failures surface as `ConfigError` naming the file, so
/// a fatal startup message always tells the user which path to look at.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        TemplerunError::ConfigError(format!(
            "reading config file at {}: {e}",
            path.display()
        ))
    })?;

    let config: RawConfigFile = toml::from_str(&contents).map_err(|e| {
        TemplerunError::ConfigError(format!(
            "parsing config file at {}: {e}",
            path.display()
        ))
    })?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks that the `[tool]` paths are non-empty.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}
