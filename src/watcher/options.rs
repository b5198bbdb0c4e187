// src/watcher/options.rs

//! Caller-facing watch options and the normalized watcher configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::watcher::ignored::{IgnoreMatcher, IgnoreSpec};

/// Default polling interval when `use_polling` is on.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Options accepted by [`crate::watch`].
///
/// Every field except `disable_globbing` is optional; unset fields fall back
/// to the watcher's defaults during [`WatchOptions::normalize`].
#[derive(Debug, Clone, Default)]
pub struct WatchOptions {
    /// Directory that relative targets, relative ignore entries and glob
    /// matchers are resolved against. Defaults to the process cwd.
    pub cwd: Option<PathBuf>,
    pub ignored: Option<IgnoreSpec>,
    /// Skip `add`/`addDir` events for entries found by the initial scan.
    pub ignore_initial: Option<bool>,
    /// Maximum directory depth below each root. `None` is unlimited.
    pub depth: Option<usize>,
    pub use_polling: Option<bool>,
    pub interval: Option<Duration>,
    /// Bypass all glob handling and hand targets to the watcher verbatim.
    pub disable_globbing: bool,
}

impl WatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn ignored(mut self, ignored: impl Into<IgnoreSpec>) -> Self {
        self.ignored = Some(ignored.into());
        self
    }

    pub fn ignore_initial(mut self, val: bool) -> Self {
        self.ignore_initial = Some(val);
        self
    }

    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn use_polling(mut self, val: bool) -> Self {
        self.use_polling = Some(val);
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn disable_globbing(mut self, val: bool) -> Self {
        self.disable_globbing = val;
        self
    }

    /// Drop unset fields in favour of the watcher defaults.
    pub fn normalize(self) -> WatcherConfig {
        let defaults = WatcherConfig::default();
        WatcherConfig {
            cwd: self.cwd.unwrap_or(defaults.cwd),
            ignored: self.ignored.map(IgnoreSpec::into_list).unwrap_or(defaults.ignored),
            ignore_initial: self.ignore_initial.unwrap_or(defaults.ignore_initial),
            depth: self.depth.or(defaults.depth),
            use_polling: self.use_polling.unwrap_or(defaults.use_polling),
            interval: self.interval.unwrap_or(defaults.interval),
        }
    }
}

/// Fully resolved configuration of an [`crate::watcher::FsWatcher`].
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    pub cwd: PathBuf,
    pub ignored: Vec<IgnoreMatcher>,
    pub ignore_initial: bool,
    pub depth: Option<usize>,
    pub use_polling: bool,
    pub interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            ignored: Vec::new(),
            ignore_initial: false,
            depth: None,
            use_polling: false,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}
