// src/session/targets.rs

//! Watch targets as callers pass them: one path, or (nested) lists of paths.

use serde::Deserialize;

use crate::errors::{GlobwatchError, Result};

/// One or more watch targets.
///
/// Lists may nest arbitrarily. Values that are neither strings nor lists can
/// only come from deserialized configuration and are rejected by
/// [`WatchTargets::flatten`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WatchTargets {
    One(String),
    Many(Vec<WatchTargets>),
    Other(toml::Value),
}

impl WatchTargets {
    /// Flatten into an ordered list of path strings.
    ///
    /// Fails on the first leaf that is not a string.
    pub fn flatten(&self) -> Result<Vec<String>> {
        let mut out = Vec::new();
        self.flatten_into(&mut out)?;
        Ok(out)
    }

    fn flatten_into(&self, out: &mut Vec<String>) -> Result<()> {
        match self {
            WatchTargets::One(path) => out.push(path.clone()),
            WatchTargets::Many(list) => {
                for item in list {
                    item.flatten_into(out)?;
                }
            }
            WatchTargets::Other(value) => {
                return Err(GlobwatchError::NonStringTarget(format!(
                    "{} {}",
                    value.type_str(),
                    value
                )));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            WatchTargets::One(_) | WatchTargets::Other(_) => false,
            WatchTargets::Many(list) => list.iter().all(WatchTargets::is_empty),
        }
    }
}

impl From<&str> for WatchTargets {
    fn from(path: &str) -> Self {
        WatchTargets::One(path.to_string())
    }
}

impl From<String> for WatchTargets {
    fn from(path: String) -> Self {
        WatchTargets::One(path)
    }
}

impl From<&String> for WatchTargets {
    fn from(path: &String) -> Self {
        WatchTargets::One(path.clone())
    }
}

impl<T: Into<WatchTargets>> From<Vec<T>> for WatchTargets {
    fn from(list: Vec<T>) -> Self {
        WatchTargets::Many(list.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<WatchTargets>, const N: usize> From<[T; N]> for WatchTargets {
    fn from(list: [T; N]) -> Self {
        WatchTargets::Many(list.into_iter().map(Into::into).collect())
    }
}
