// src/watcher/mod.rs

//! The underlying filesystem watcher.
//!
//! [`FsWatcher`] wraps a `notify` backend and turns its raw events into
//! `add`/`change`/`unlink`/`addDir`/`unlinkDir` events on reported path
//! strings, plus the composite `all` event and the `ready`, `error` and
//! `raw` lifecycle events. It knows nothing about globs; the session layer
//! feeds it concrete roots and decorates its emitter.

pub mod fs_watcher;
pub mod ignored;
pub mod options;
pub mod path_utils;
pub mod walk;

pub use fs_watcher::FsWatcher;
pub use ignored::{is_ignored, IgnoreMatcher, IgnorePredicate, IgnoreSpec};
pub use options::{WatchOptions, WatcherConfig, DEFAULT_POLL_INTERVAL};
