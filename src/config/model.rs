// src/config/model.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::errors::Result;
use crate::session::WatchTargets;
use crate::watcher::{IgnoreSpec, WatchOptions};

/// Configuration file as read from TOML, before validation.
///
/// ```toml
/// [watch]
/// targets = ["src/**/*.rs", "!src/generated/**", "Cargo.toml"]
/// ignored = ["**/*.log", "target"]
/// ignore_initial = true
/// depth = 4
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub watch: WatchSection,
}

/// `[watch]` section. Mirrors [`WatchOptions`] plus the targets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WatchSection {
    /// Paths or glob patterns; nested lists are allowed.
    #[serde(default)]
    pub targets: Option<WatchTargets>,

    /// One ignore entry or a list of them.
    #[serde(default)]
    pub ignored: Option<IgnoreSpec>,

    /// Relative paths are resolved against the config file's directory.
    #[serde(default)]
    pub cwd: Option<PathBuf>,

    #[serde(default)]
    pub ignore_initial: Option<bool>,

    #[serde(default)]
    pub depth: Option<usize>,

    #[serde(default)]
    pub use_polling: Option<bool>,

    /// Polling interval in milliseconds; only used with `use_polling`.
    #[serde(default)]
    pub interval_ms: Option<u64>,

    #[serde(default)]
    pub disable_globbing: bool,
}

impl RawConfigFile {
    /// Anchor a relative `cwd` at `base` (usually the config file's directory).
    pub fn resolve_relative_to(&mut self, base: &Path) {
        if let Some(cwd) = self.watch.cwd.take() {
            self.watch.cwd = Some(if cwd.is_relative() { base.join(cwd) } else { cwd });
        }
    }
}

/// Validated configuration. Build it with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub watch: WatchSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(watch: WatchSection) -> Self {
        Self { watch }
    }

    /// Flattened targets from the file; empty when none are configured.
    pub fn targets(&self) -> Result<Vec<String>> {
        match &self.watch.targets {
            Some(targets) => targets.flatten(),
            None => Ok(Vec::new()),
        }
    }

    /// Watch options described by the file, without targets.
    pub fn watch_options(&self) -> WatchOptions {
        let section = &self.watch;
        WatchOptions {
            cwd: section.cwd.clone(),
            ignored: section.ignored.clone(),
            ignore_initial: section.ignore_initial,
            depth: section.depth,
            use_polling: section.use_polling,
            interval: section.interval_ms.map(Duration::from_millis),
            disable_globbing: section.disable_globbing,
        }
    }
}
