// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{GlobwatchError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = GlobwatchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.watch))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_targets(cfg)?;
    validate_interval(cfg)?;
    validate_cwd(cfg)?;
    Ok(())
}

fn validate_targets(cfg: &RawConfigFile) -> Result<()> {
    if let Some(targets) = &cfg.watch.targets {
        targets.flatten()?;
    }
    Ok(())
}

fn validate_interval(cfg: &RawConfigFile) -> Result<()> {
    if cfg.watch.interval_ms == Some(0) {
        return Err(GlobwatchError::Config(
            "[watch].interval_ms must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_cwd(cfg: &RawConfigFile) -> Result<()> {
    match &cfg.watch.cwd {
        Some(cwd) if !cwd.is_dir() => Err(GlobwatchError::Config(format!(
            "[watch].cwd '{}' is not an existing directory",
            cwd.display()
        ))),
        _ => Ok(()),
    }
}

/// Checks that hold only once file and command-line targets are merged.
pub fn ensure_has_targets(targets: &[String]) -> Result<()> {
    if targets.is_empty() {
        return Err(GlobwatchError::Config(
            "nothing to watch: pass TARGET arguments or set [watch].targets".to_string(),
        ));
    }
    Ok(())
}
