// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, TemplerunError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::TemplerunError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.tool, raw.inputs))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_tool_section(cfg)?;
    validate_inputs_section(cfg)?;
    Ok(())
}

fn validate_tool_section(cfg: &RawConfigFile) -> Result<()> {
    if cfg.tool.executable.trim().is_empty() {
        return Err(TemplerunError::ConfigError(
            "[tool].executable must be a non-empty path".to_string(),
        ));
    }

    if cfg.tool.config.trim().is_empty() {
        return Err(TemplerunError::ConfigError(
            "[tool].config must be a non-empty path".to_string(),
        ));
    }

    Ok(())
}

fn validate_inputs_section(cfg: &RawConfigFile) -> Result<()> {
    // The paths themselves are checked at load time; here we only reject
    // explicitly empty strings, which are always a configuration mistake.
    for (field, value) in [
        ("templates", &cfg.inputs.templates),
        ("texts", &cfg.inputs.texts),
    ] {
        if let Some(path) = value {
            if path.trim().is_empty() {
                return Err(TemplerunError::ConfigError(format!(
                    "[inputs].{field} must not be an empty path"
                )));
            }
        }
    }
    Ok(())
}
