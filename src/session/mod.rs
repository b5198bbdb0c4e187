// src/session/mod.rs

//! Glob-aware watch sessions.
//!
//! A [`WatchSession`] classifies the targets, compiles glob ignore entries,
//! builds an [`FsWatcher`] and, when globs were involved, puts a
//! [`FilteredEmitter`] in front of the watcher's listeners. Starting the
//! session adds the concrete roots. The watcher is then used as is; closing
//! it ends the session.

pub mod classify;
pub mod filter;
pub mod ignore;
pub mod targets;

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::Result;
use crate::events::{Topic, WatchEvent};
use crate::watcher::{FsWatcher, IgnoreSpec, WatchOptions};

pub use classify::{classify, Classification, ClassifiedTargets, PathFilter};
pub use filter::FilteredEmitter;
pub use ignore::compile_ignored;
pub use targets::WatchTargets;

/// A watcher with its glob routing installed but no roots added yet.
///
/// Register listeners with [`WatchSession::on`] before [`WatchSession::start`]
/// to observe the initial scan and `ready`.
#[derive(Debug)]
pub struct WatchSession {
    watcher: FsWatcher,
    roots: Vec<String>,
    filtered: bool,
}

impl WatchSession {
    /// Classify `targets`, compile glob ignore entries and build the watcher.
    ///
    /// Fails before any watcher exists if a target is not a string or a glob
    /// does not compile.
    pub fn new(targets: impl Into<WatchTargets>, mut options: WatchOptions) -> Result<Self> {
        let targets = targets.into();

        if options.disable_globbing {
            let roots = targets.flatten()?;
            debug!(roots = ?roots, "globbing disabled, targets passed through");
            let watcher = FsWatcher::new(options.normalize())?;
            return Ok(Self { watcher, roots, filtered: false });
        }

        let cwd = options.cwd.clone();
        let Classification { roots, filter } = classify(&targets, cwd.as_deref())?;

        let ignored = compile_ignored(options.ignored.take(), cwd.as_deref())?;
        options.ignored = (!ignored.is_empty()).then_some(IgnoreSpec::Many(ignored));

        let watcher = FsWatcher::new(options.normalize())?;

        let filtered = filter.is_some();
        if let Some(filter) = filter {
            debug!(?filter, "installing glob filter");
            watcher.decorate_emitter(|inner| Arc::new(FilteredEmitter::new(inner, filter)));
        }

        Ok(Self { watcher, roots, filtered })
    }

    /// Concrete paths that [`WatchSession::start`] hands to the watcher.
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Whether change events pass through a glob filter.
    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    pub fn watcher(&self) -> &FsWatcher {
        &self.watcher
    }

    pub fn on<F>(&self, topic: impl Into<Topic>, listener: F)
    where
        F: Fn(&WatchEvent) + Send + Sync + 'static,
    {
        self.watcher.on(topic, listener);
    }

    /// Add the roots, which runs the initial scan, and hand over the watcher.
    pub fn start(self) -> FsWatcher {
        info!(roots = ?self.roots, filtered = self.filtered, "starting watch session");
        self.watcher.add(self.roots);
        self.watcher
    }
}

/// Start watching `targets`, which may be literal paths, globs, negated
/// globs, or nested lists of them.
///
/// The initial scan runs before this returns; use [`WatchSession`] to
/// observe it. Runtime problems are reported on the `error` topic.
pub fn watch(targets: impl Into<WatchTargets>, options: WatchOptions) -> Result<FsWatcher> {
    Ok(WatchSession::new(targets, options)?.start())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GlobwatchError;
    use crate::events::EventKind;
    use std::fs;
    use std::sync::Mutex;

    fn collect(session: &WatchSession, topic: impl Into<Topic>) -> Arc<Mutex<Vec<String>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        session.on(topic, move |ev: &WatchEvent| {
            if let Some(path) = ev.path() {
                sink.lock().unwrap().push(path.to_string());
            }
        });
        seen
    }

    #[test]
    fn non_string_target_fails_before_watching() {
        let targets = WatchTargets::Many(vec!["a".into(), WatchTargets::Other(toml::Value::Boolean(true))]);
        let err = watch(targets, WatchOptions::new()).unwrap_err();
        assert!(matches!(err, GlobwatchError::NonStringTarget(_)));
    }

    #[test]
    fn glob_roots_are_registered_instead_of_patterns() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("src")).unwrap();

        let watcher = watch(
            vec!["src/**/*.rs", "Cargo.toml", "!src/gen/**"],
            WatchOptions::new().cwd(tmp.path()),
        )
        .unwrap();

        assert_eq!(watcher.roots(), vec!["src".to_string(), "Cargo.toml".to_string()]);
        watcher.close();
    }

    #[test]
    fn literal_targets_install_no_filter() {
        let tmp = tempfile::tempdir().unwrap();
        let session = WatchSession::new(["a", "b"], WatchOptions::new().cwd(tmp.path())).unwrap();
        assert!(!session.is_filtered());
        assert_eq!(session.roots(), ["a", "b"]);
    }

    #[test]
    fn disabled_globbing_passes_targets_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("*.txt"), "star").unwrap();

        let session = WatchSession::new(
            "*.txt",
            WatchOptions::new().cwd(tmp.path()).disable_globbing(true),
        )
        .unwrap();
        assert!(!session.is_filtered());
        let adds = collect(&session, EventKind::Add);

        let watcher = session.start();
        assert_eq!(watcher.roots(), vec!["*.txt".to_string()]);
        assert_eq!(*adds.lock().unwrap(), vec!["*.txt"]);
        watcher.close();
    }

    #[test]
    fn initial_scan_is_filtered_by_globs() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("keep.txt"), "k").unwrap();
        fs::write(tmp.path().join("skip.rs"), "s").unwrap();

        let session = WatchSession::new("*.txt", WatchOptions::new().cwd(tmp.path())).unwrap();
        assert!(session.is_filtered());
        assert_eq!(session.roots(), [""]);

        let adds = collect(&session, EventKind::Add);
        let suppressed = collect(&session, Topic::Original(EventKind::Add));
        let watcher = session.start();

        assert_eq!(*adds.lock().unwrap(), vec!["keep.txt"]);
        assert_eq!(*suppressed.lock().unwrap(), vec!["skip.rs"]);
        watcher.close();
    }
}
