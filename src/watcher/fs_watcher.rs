// src/watcher/fs_watcher.rs

use std::collections::BTreeMap;
use std::fmt;
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use notify::event::{CreateKind, ModifyKind, RenameMode};
use notify::{
    Config, Event, EventKind as NotifyKind, PollWatcher, RecommendedWatcher, RecursiveMode,
    Watcher,
};
use tracing::{debug, info, warn};

use crate::errors::GlobwatchError;
use crate::events::{Emit, EventKind, Listeners, Topic, WatchEvent};
use crate::fs::{FileSystem, RealFileSystem};
use crate::watcher::ignored::is_ignored;
use crate::watcher::options::WatcherConfig;
use crate::watcher::path_utils::{
    depth_of, relative_str, report_parent, report_path, resolve, to_slash,
};
use crate::watcher::walk::{walk_root, EntryType};

/// One path the caller asked to watch.
#[derive(Debug, Clone)]
struct Root {
    /// Spelling as given; reported paths are built from it.
    given: String,
    abs: PathBuf,
    is_dir: bool,
}

impl Root {
    fn covers(&self, path: &Path) -> bool {
        path == self.abs || (self.is_dir && path.starts_with(&self.abs))
    }
}

#[derive(Debug, Default)]
struct State {
    roots: Vec<Root>,
    known: BTreeMap<PathBuf, EntryType>,
    registered: BTreeMap<PathBuf, RecursiveMode>,
}

impl State {
    /// Most specific root covering `path`, with the reported and relative
    /// forms of `path` under it.
    fn locate(&self, path: &Path) -> Option<(&Root, String, String)> {
        let root = self
            .roots
            .iter()
            .filter(|r| r.covers(path))
            .max_by_key(|r| r.abs.as_os_str().len())?;
        let rel = relative_str(&root.abs, path)?;
        Some((root, report_path(&root.given, &rel), rel))
    }
}

type Change = (EventKind, String, Option<Metadata>);

struct Shared {
    config: WatcherConfig,
    listeners: Arc<Listeners>,
    emitter: RwLock<Arc<dyn Emit>>,
    state: Mutex<State>,
    closed: AtomicBool,
    ready: AtomicBool,
}

impl Shared {
    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn current_emitter(&self) -> Arc<dyn Emit> {
        Arc::clone(&self.emitter.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn emit(&self, event: &WatchEvent) -> bool {
        if self.closed.load(Ordering::SeqCst) {
            return false;
        }
        self.current_emitter().emit(event.topic(), event)
    }

    /// Emit the per-kind event followed by its `all` counterpart.
    fn emit_change(&self, (kind, path, metadata): Change) {
        let Some(event) = WatchEvent::change(kind, path, metadata) else {
            return;
        };
        self.emit(&event);
        if let Some(all) = event.to_all() {
            self.emit(&all);
        }
    }

    fn ignores(&self, reported: &str, abs: &Path) -> bool {
        let ignored = &self.config.ignored;
        !ignored.is_empty() && (is_ignored(ignored, reported) || is_ignored(ignored, &to_slash(abs)))
    }

    /// True if `rel` or any directory between it and the root is ignored.
    fn ignores_under(&self, root: &Root, rel: &str) -> bool {
        if self.config.ignored.is_empty() {
            return false;
        }
        let mut prefix = String::new();
        for segment in rel.split('/').filter(|s| !s.is_empty()) {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            if self.ignores(&report_path(&root.given, &prefix), &root.abs.join(&prefix)) {
                return true;
            }
        }
        false
    }

    fn too_deep(&self, rel: &str) -> bool {
        self.config.depth.is_some_and(|max| depth_of(rel) > max + 1)
    }

    fn handle_notify(&self, res: notify::Result<Event>) {
        if self.closed.load(Ordering::SeqCst) {
            return;
        }

        let event = match res {
            Ok(event) => event,
            Err(err) => {
                warn!(error = %err, "file watch error");
                self.emit(&WatchEvent::error(GlobwatchError::from(err)));
                return;
            }
        };

        debug!(?event, "received notify event");
        self.emit(&WatchEvent::Raw(event.clone()));

        for change in self.translate(&event) {
            debug!(kind = %change.0, path = %change.1, "translated change");
            self.emit_change(change);
        }
    }

    fn translate(&self, event: &Event) -> Vec<Change> {
        let mut state = self.lock_state();
        let mut out = Vec::new();

        match event.kind {
            NotifyKind::Create(kind) => {
                for path in &event.paths {
                    self.on_appear(&mut state, path, kind == CreateKind::Folder, &mut out);
                }
            }
            NotifyKind::Modify(ModifyKind::Name(mode)) => match (mode, event.paths.as_slice()) {
                (RenameMode::Both, [from, to]) => {
                    self.on_vanish(&mut state, from, &mut out);
                    self.on_appear(&mut state, to, false, &mut out);
                }
                (RenameMode::From, paths) => {
                    for path in paths {
                        self.on_vanish(&mut state, path, &mut out);
                    }
                }
                (RenameMode::To, paths) => {
                    for path in paths {
                        self.on_appear(&mut state, path, false, &mut out);
                    }
                }
                (_, paths) => {
                    for path in paths {
                        if path.exists() {
                            self.on_appear(&mut state, path, false, &mut out);
                        } else {
                            self.on_vanish(&mut state, path, &mut out);
                        }
                    }
                }
            },
            NotifyKind::Modify(_) => {
                for path in &event.paths {
                    self.on_modify(&mut state, path, &mut out);
                }
            }
            NotifyKind::Remove(_) => {
                for path in &event.paths {
                    self.on_vanish(&mut state, path, &mut out);
                }
            }
            NotifyKind::Access(_) | NotifyKind::Any | NotifyKind::Other => {}
        }

        out
    }

    fn on_appear(&self, state: &mut State, path: &Path, folder_hint: bool, out: &mut Vec<Change>) {
        let Some((root, reported, rel)) = state.locate(path) else {
            return;
        };
        let root = root.clone();
        if self.too_deep(&rel) || self.ignores_under(&root, &rel) {
            return;
        }
        // Created and gone again before we looked.
        let Ok(meta) = fs::metadata(path) else {
            return;
        };
        let entry_type = if folder_hint || meta.is_dir() { EntryType::Dir } else { EntryType::File };

        let kind = match (state.known.insert(path.to_path_buf(), entry_type), entry_type) {
            (Some(EntryType::File), EntryType::File) => EventKind::Change,
            (Some(EntryType::Dir), EntryType::Dir) => return,
            (_, EntryType::Dir) => EventKind::AddDir,
            (_, EntryType::File) => EventKind::Add,
        };
        out.push((kind, reported, Some(meta)));

        if entry_type == EntryType::Dir {
            self.scan_new_dir(state, &root, path, &rel, out);
        }
    }

    /// Report the contents of a directory that appeared after the initial
    /// scan (e.g. moved in).
    fn scan_new_dir(&self, state: &mut State, root: &Root, dir: &Path, rel: &str, out: &mut Vec<Change>) {
        let remaining = match self.config.depth {
            Some(max) => match max.checked_sub(depth_of(rel)) {
                Some(rem) => Some(rem),
                None => return,
            },
            None => None,
        };

        let entries = match walk_root(&RealFileSystem, dir, remaining, |sub, abs| {
            let full = join_rel(rel, sub);
            self.ignores(&report_path(&root.given, &full), abs)
        }) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = ?dir, error = %err, "failed to scan new directory");
                return;
            }
        };

        for entry in entries.into_iter().filter(|e| !e.rel.is_empty()) {
            if state.known.insert(entry.path.clone(), entry.entry_type).is_some() {
                continue;
            }
            let kind = match entry.entry_type {
                EntryType::Dir => EventKind::AddDir,
                EntryType::File => EventKind::Add,
            };
            let reported = report_path(&root.given, &join_rel(rel, &entry.rel));
            out.push((kind, reported, RealFileSystem.metadata(&entry.path)));
        }
    }

    fn on_modify(&self, state: &mut State, path: &Path, out: &mut Vec<Change>) {
        let Some((root, reported, rel)) = state.locate(path) else {
            return;
        };
        if self.too_deep(&rel) || self.ignores_under(root, &rel) {
            return;
        }
        let Ok(meta) = fs::metadata(path) else {
            return;
        };
        // Directory mtime bumps are noise; their children report themselves.
        if meta.is_dir() {
            return;
        }
        let kind = match state.known.insert(path.to_path_buf(), EntryType::File) {
            Some(EntryType::File) => EventKind::Change,
            _ => EventKind::Add,
        };
        out.push((kind, reported, Some(meta)));
    }

    fn on_vanish(&self, state: &mut State, path: &Path, out: &mut Vec<Change>) {
        let Some(previous) = state.known.remove(path) else {
            return;
        };

        if previous == EntryType::Dir {
            let mut orphans: Vec<(PathBuf, EntryType)> = state
                .known
                .iter()
                .filter(|(p, _)| p.starts_with(path))
                .map(|(p, t)| (p.clone(), *t))
                .collect();
            // Deepest first, so children go before their directories.
            orphans.reverse();
            for (orphan, entry_type) in orphans {
                state.known.remove(&orphan);
                if let Some((_, reported, _)) = state.locate(&orphan) {
                    out.push((unlink_kind(entry_type), reported, None));
                }
            }
        }

        if let Some((_, reported, _)) = state.locate(path) {
            out.push((unlink_kind(previous), reported, None));
        }
    }
}

fn unlink_kind(entry_type: EntryType) -> EventKind {
    match entry_type {
        EntryType::Dir => EventKind::UnlinkDir,
        EntryType::File => EventKind::Unlink,
    }
}

fn join_rel(base: &str, sub: &str) -> String {
    match (base, sub) {
        ("", sub) => sub.to_string(),
        (base, "") => base.to_string(),
        (base, sub) => format!("{base}/{sub}"),
    }
}

/// Closest existing directory that can stand in for a file or missing root.
fn nearest_existing_dir(path: &Path) -> Option<PathBuf> {
    path.ancestors()
        .skip(1)
        .find(|p| !p.as_os_str().is_empty() && p.is_dir())
        .map(Path::to_path_buf)
}

/// Filesystem watcher emitting add/change/unlink events on top of `notify`.
///
/// Events are delivered to listeners registered with [`FsWatcher::on`]
/// through the watcher's emitter. The emitter starts out as the plain
/// listener registry and may be decorated once by the glob layer.
///
/// Dropping the watcher (or calling [`FsWatcher::close`]) stops the backend.
pub struct FsWatcher {
    shared: Arc<Shared>,
    backend: Mutex<Option<Box<dyn Watcher + Send>>>,
    fs: Arc<dyn FileSystem>,
}

impl fmt::Debug for FsWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FsWatcher")
            .field("cwd", &self.shared.config.cwd)
            .field("roots", &self.roots())
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl FsWatcher {
    /// Create a watcher with no roots. Nothing is emitted until
    /// [`FsWatcher::add`] is called.
    pub fn new(config: WatcherConfig) -> crate::errors::Result<Self> {
        let listeners = Arc::new(Listeners::new());
        let emitter: Arc<dyn Emit> = listeners.clone();
        let use_polling = config.use_polling;
        let interval = config.interval;

        let shared = Arc::new(Shared {
            config,
            listeners,
            emitter: RwLock::new(emitter),
            state: Mutex::new(State::default()),
            closed: AtomicBool::new(false),
            ready: AtomicBool::new(false),
        });

        // Called synchronously by notify on its own thread.
        let handler = {
            let shared = Arc::clone(&shared);
            move |res: notify::Result<Event>| shared.handle_notify(res)
        };

        let backend: Box<dyn Watcher + Send> = if use_polling {
            Box::new(PollWatcher::new(handler, Config::default().with_poll_interval(interval))?)
        } else {
            Box::new(RecommendedWatcher::new(handler, Config::default())?)
        };

        info!(cwd = ?shared.config.cwd, polling = use_polling, "file watcher created");

        Ok(Self {
            shared,
            backend: Mutex::new(Some(backend)),
            fs: Arc::new(RealFileSystem),
        })
    }

    pub fn config(&self) -> &WatcherConfig {
        &self.shared.config
    }

    /// Register a listener for `topic`.
    pub fn on<F>(&self, topic: impl Into<Topic>, listener: F)
    where
        F: Fn(&WatchEvent) + Send + Sync + 'static,
    {
        self.shared.listeners.on(topic, listener);
    }

    /// Deliver `event` through the current emitter on its own topic.
    ///
    /// Returns true if a listener handled it. A glob filter may suppress
    /// the event, in which case this returns false.
    pub fn emit(&self, event: WatchEvent) -> bool {
        self.shared.emit(&event)
    }

    /// The emission entry point currently in use.
    pub fn emitter(&self) -> Arc<dyn Emit> {
        self.shared.current_emitter()
    }

    /// Replace the emitter with `wrap(current)`.
    pub(crate) fn decorate_emitter<F>(&self, wrap: F)
    where
        F: FnOnce(Arc<dyn Emit>) -> Arc<dyn Emit>,
    {
        let mut slot = self.shared.emitter.write().unwrap_or_else(PoisonError::into_inner);
        let current = Arc::clone(&slot);
        *slot = wrap(current);
    }

    /// Start watching `paths`.
    ///
    /// Each path is resolved against the configured cwd, registered with the
    /// backend and scanned; existing entries are reported as `addDir`/`add`
    /// unless `ignore_initial` is set. `ready` follows the first call.
    ///
    /// Problems with individual paths are reported on the `error` topic and
    /// do not stop the remaining paths.
    pub fn add<I, S>(&self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.is_closed() {
            debug!("add() on a closed watcher ignored");
            return;
        }

        for given in paths.into_iter().map(Into::<String>::into) {
            self.add_one(given);
        }

        if !self.shared.ready.swap(true, Ordering::SeqCst) {
            self.shared.emit(&WatchEvent::Ready);
        }
    }

    fn add_one(&self, given: String) {
        let abs = resolve(&self.shared.config.cwd, &given);
        let is_dir = self.fs.is_dir(&abs);

        {
            let mut state = self.shared.lock_state();
            if state.roots.iter().any(|r| r.given == given) {
                debug!(path = %given, "already watching");
                return;
            }
            state.roots.push(Root {
                given: given.clone(),
                abs: abs.clone(),
                is_dir,
            });
        }

        if let Err(err) = self.register(&given, &abs, is_dir) {
            warn!(path = %given, error = %err, "failed to register watch root");
            self.shared.emit(&WatchEvent::error(err));
        }

        let shared = &self.shared;
        let entries = match walk_root(self.fs.as_ref(), &abs, shared.config.depth, |rel, path| {
            shared.ignores(&report_path(&given, rel), path)
        }) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %given, error = %err, "initial scan failed");
                shared.emit(&WatchEvent::error(GlobwatchError::Other(err)));
                return;
            }
        };

        let mut initial = Vec::new();
        {
            let mut state = shared.lock_state();
            for entry in entries {
                // Entries seen through another root, or through a live event
                // that raced the scan, are already reported.
                if state.known.insert(entry.path.clone(), entry.entry_type).is_some() {
                    continue;
                }
                let kind = match entry.entry_type {
                    EntryType::Dir => EventKind::AddDir,
                    EntryType::File => EventKind::Add,
                };
                initial.push((kind, report_path(&given, &entry.rel), entry.path));
            }
        }

        debug!(path = %given, entries = initial.len(), "initial scan complete");

        if shared.config.ignore_initial {
            return;
        }
        for (kind, reported, path) in initial {
            shared.emit_change((kind, reported, self.fs.metadata(&path)));
        }
    }

    fn register(&self, given: &str, abs: &Path, is_dir: bool) -> crate::errors::Result<()> {
        let (target, mode) = if is_dir {
            let mode = if self.shared.config.depth == Some(0) {
                RecursiveMode::NonRecursive
            } else {
                RecursiveMode::Recursive
            };
            (abs.to_path_buf(), mode)
        } else {
            // Files and paths that do not exist yet are observed through
            // their directory; events are scoped back to the root.
            let dir = nearest_existing_dir(abs).ok_or_else(|| {
                GlobwatchError::Config(format!("cannot watch '{given}': no existing parent directory"))
            })?;
            (dir, RecursiveMode::NonRecursive)
        };

        {
            // Do not hold the state lock across backend calls: the backend
            // thread may be waiting on it inside the event handler.
            let state = self.shared.lock_state();
            let covered = state.registered.iter().any(|(path, existing)| {
                (*existing == RecursiveMode::Recursive && target.starts_with(path))
                    || (*path == target && mode == RecursiveMode::NonRecursive)
            });
            if covered {
                debug!(path = ?target, "already covered by a registered watch");
                return Ok(());
            }
        }

        {
            let mut backend = self.backend.lock().unwrap_or_else(PoisonError::into_inner);
            let Some(backend) = backend.as_mut() else {
                return Ok(());
            };
            backend.watch(&target, mode)?;
        }

        info!(path = ?target, ?mode, "registered watch root");
        self.shared.lock_state().registered.insert(target, mode);
        Ok(())
    }

    /// Stop watching the given roots (matched by their spelling in `add`).
    pub fn unwatch<I, S>(&self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stale: Vec<PathBuf> = {
            let mut state = self.shared.lock_state();
            for given in paths.into_iter().map(Into::<String>::into) {
                state.roots.retain(|r| r.given != given);
            }

            let State { roots, known, registered } = &mut *state;
            known.retain(|path, _| roots.iter().any(|r| r.covers(path)));

            let stale: Vec<PathBuf> = registered
                .keys()
                .filter(|reg| !roots.iter().any(|r| r.abs.starts_with(reg)))
                .cloned()
                .collect();
            for path in &stale {
                registered.remove(path);
            }
            stale
        };

        let mut backend = self.backend.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(backend) = backend.as_mut() {
            for path in stale {
                match backend.unwatch(&path) {
                    Ok(()) => info!(path = ?path, "unregistered watch root"),
                    Err(err) => debug!(path = ?path, error = %err, "backend unwatch failed"),
                }
            }
        }
    }

    /// Roots currently watched, as given to [`FsWatcher::add`].
    pub fn roots(&self) -> Vec<String> {
        self.shared.lock_state().roots.iter().map(|r| r.given.clone()).collect()
    }

    /// Known entries grouped by reported parent directory, names sorted.
    pub fn get_watched(&self) -> BTreeMap<String, Vec<String>> {
        let state = self.shared.lock_state();
        let mut watched: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for path in state.known.keys() {
            let Some((_, reported, _)) = state.locate(path) else {
                continue;
            };
            if reported == "." {
                continue;
            }
            let parent = report_parent(&reported).to_string();
            let name = reported.rsplit('/').next().unwrap_or(reported.as_str()).to_string();
            watched.entry(parent).or_default().push(name);
        }

        for names in watched.values_mut() {
            names.sort();
            names.dedup();
        }
        watched
    }

    /// Stop the backend. Further events are dropped; calling twice is fine.
    pub fn close(&self) {
        if self.shared.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        let backend = self.backend.lock().unwrap_or_else(PoisonError::into_inner).take();
        drop(backend);
        info!("file watcher closed");
    }

    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn watcher_in(dir: &Path) -> FsWatcher {
        FsWatcher::new(WatcherConfig {
            cwd: dir.to_path_buf(),
            ..WatcherConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn initial_scan_reports_existing_entries_then_ready() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/b.txt"), "b").unwrap();

        let watcher = watcher_in(tmp.path());
        let (tx, rx) = mpsc::channel();
        let all_tx = tx.clone();
        watcher.on(EventKind::All, move |ev| {
            if let WatchEvent::All { kind, path, .. } = ev {
                all_tx.send(format!("{kind} {path}")).unwrap();
            }
        });
        watcher.on(EventKind::Ready, move |_| tx.send("ready".to_string()).unwrap());

        watcher.add([""]);

        let seen: Vec<String> = rx.try_iter().collect();
        assert_eq!(
            seen,
            vec!["addDir .", "add a.txt", "addDir sub", "add sub/b.txt", "ready"]
        );
        watcher.close();
    }

    #[test]
    fn ignore_initial_suppresses_scan_events_but_tracks_entries() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();

        let watcher = FsWatcher::new(WatcherConfig {
            cwd: tmp.path().to_path_buf(),
            ignore_initial: true,
            ..WatcherConfig::default()
        })
        .unwrap();
        let (tx, rx) = mpsc::channel();
        watcher.on(EventKind::Add, move |ev| tx.send(ev.path().map(str::to_string)).unwrap());

        watcher.add(["."]);

        assert!(rx.try_recv().is_err());
        assert_eq!(watcher.get_watched().get("."), Some(&vec!["a.txt".to_string()]));
    }

    #[test]
    fn ignored_entries_are_not_scanned() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("target")).unwrap();
        fs::write(tmp.path().join("target/out"), "x").unwrap();
        fs::write(tmp.path().join("keep.rs"), "x").unwrap();

        let watcher = FsWatcher::new(WatcherConfig {
            cwd: tmp.path().to_path_buf(),
            ignored: vec!["target".into()],
            ..WatcherConfig::default()
        })
        .unwrap();
        watcher.add([""]);

        let watched = watcher.get_watched();
        assert_eq!(watched.get("."), Some(&vec!["keep.rs".to_string()]));
        assert!(!watched.contains_key("target"));
    }

    #[test]
    fn overlapping_roots_report_each_entry_once() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("src")).unwrap();
        fs::write(tmp.path().join("src/main.rs"), "fn main() {}").unwrap();

        let watcher = watcher_in(tmp.path());
        let (tx, rx) = mpsc::channel();
        watcher.on(EventKind::Add, move |ev| tx.send(ev.path().map(str::to_string)).unwrap());

        watcher.add(["src", "src/main.rs"]);

        let adds: Vec<_> = rx.try_iter().flatten().collect();
        assert_eq!(adds, vec!["src/main.rs".to_string()]);
        assert_eq!(watcher.roots(), vec!["src".to_string(), "src/main.rs".to_string()]);
    }

    #[test]
    fn closed_watcher_emits_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let watcher = watcher_in(tmp.path());
        watcher.on(EventKind::Add, |_| {});
        watcher.close();
        assert!(watcher.is_closed());
        assert!(!watcher.emit(WatchEvent::add("x")));
        watcher.close();
    }

    #[test]
    fn unwatch_forgets_entries_under_the_root() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("a")).unwrap();
        fs::write(tmp.path().join("a/one.txt"), "1").unwrap();
        fs::create_dir(tmp.path().join("b")).unwrap();
        fs::write(tmp.path().join("b/two.txt"), "2").unwrap();

        let watcher = watcher_in(tmp.path());
        watcher.add(["a", "b"]);
        watcher.unwatch(["a"]);

        let watched = watcher.get_watched();
        assert!(!watched.contains_key("a"));
        assert_eq!(watched.get("b"), Some(&vec!["two.txt".to_string()]));
        assert_eq!(watcher.roots(), vec!["b".to_string()]);
    }
}
