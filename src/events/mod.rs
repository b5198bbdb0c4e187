// src/events/mod.rs

//! Event model shared by the watcher and the glob-routing layer.
//!
//! Every event is delivered on a [`Topic`]. Normal delivery uses
//! `Topic::Event(kind)`; events suppressed by a glob filter are re-delivered
//! on `Topic::Original(kind)` (rendered as `original:<kind>`) so diagnostics
//! can still observe them.

pub mod emitter;

use std::fmt;
use std::fs::Metadata;
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::GlobwatchError;

pub use emitter::{Emit, Listener, Listeners};

/// Kinds of events a watcher can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Add,
    Change,
    Unlink,
    AddDir,
    UnlinkDir,
    /// Composite event carrying the change kind and the path.
    All,
    Error,
    Ready,
    /// Untranslated backend event.
    Raw,
}

impl EventKind {
    pub const CHANGES: [EventKind; 5] = [
        EventKind::Add,
        EventKind::Change,
        EventKind::Unlink,
        EventKind::AddDir,
        EventKind::UnlinkDir,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Add => "add",
            EventKind::Change => "change",
            EventKind::Unlink => "unlink",
            EventKind::AddDir => "addDir",
            EventKind::UnlinkDir => "unlinkDir",
            EventKind::All => "all",
            EventKind::Error => "error",
            EventKind::Ready => "ready",
            EventKind::Raw => "raw",
        }
    }

    /// Session-lifecycle and diagnostic kinds. These never carry a path that
    /// should be routed through glob filtering.
    pub fn is_lifecycle(self) -> bool {
        matches!(self, EventKind::Error | EventKind::Ready | EventKind::Raw)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "add" => Ok(EventKind::Add),
            "change" => Ok(EventKind::Change),
            "unlink" => Ok(EventKind::Unlink),
            "addDir" => Ok(EventKind::AddDir),
            "unlinkDir" => Ok(EventKind::UnlinkDir),
            "all" => Ok(EventKind::All),
            "error" => Ok(EventKind::Error),
            "ready" => Ok(EventKind::Ready),
            "raw" => Ok(EventKind::Raw),
            other => Err(format!("unknown event kind: {other}")),
        }
    }
}

/// Marker prepended to the topic of suppressed events.
pub const ORIGINAL_PREFIX: &str = "original:";

/// Delivery channel for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Event(EventKind),
    Original(EventKind),
}

impl Topic {
    pub fn kind(self) -> EventKind {
        match self {
            Topic::Event(kind) | Topic::Original(kind) => kind,
        }
    }
}

impl From<EventKind> for Topic {
    fn from(kind: EventKind) -> Self {
        Topic::Event(kind)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::Event(kind) => write!(f, "{kind}"),
            Topic::Original(kind) => write!(f, "{ORIGINAL_PREFIX}{kind}"),
        }
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().strip_prefix(ORIGINAL_PREFIX) {
            Some(rest) => Ok(Topic::Original(rest.parse()?)),
            None => Ok(Topic::Event(s.parse()?)),
        }
    }
}

/// One event as emitted by a watcher.
#[derive(Debug, Clone)]
pub enum WatchEvent {
    Add { path: String, metadata: Option<Metadata> },
    Change { path: String, metadata: Option<Metadata> },
    Unlink { path: String },
    AddDir { path: String, metadata: Option<Metadata> },
    UnlinkDir { path: String },
    All {
        kind: EventKind,
        path: String,
        metadata: Option<Metadata>,
    },
    Error(Arc<GlobwatchError>),
    Ready,
    Raw(notify::Event),
}

impl WatchEvent {
    /// Build the per-kind event for a change. `kind` must be one of
    /// [`EventKind::CHANGES`]; anything else yields `None`.
    pub fn change(kind: EventKind, path: impl Into<String>, metadata: Option<Metadata>) -> Option<Self> {
        let path = path.into();
        let event = match kind {
            EventKind::Add => WatchEvent::Add { path, metadata },
            EventKind::Change => WatchEvent::Change { path, metadata },
            EventKind::Unlink => WatchEvent::Unlink { path },
            EventKind::AddDir => WatchEvent::AddDir { path, metadata },
            EventKind::UnlinkDir => WatchEvent::UnlinkDir { path },
            _ => return None,
        };
        Some(event)
    }

    pub fn add(path: impl Into<String>) -> Self {
        WatchEvent::Add { path: path.into(), metadata: None }
    }

    pub fn unlink(path: impl Into<String>) -> Self {
        WatchEvent::Unlink { path: path.into() }
    }

    pub fn all(kind: EventKind, path: impl Into<String>) -> Self {
        WatchEvent::All { kind, path: path.into(), metadata: None }
    }

    pub fn error(err: GlobwatchError) -> Self {
        WatchEvent::Error(Arc::new(err))
    }

    pub fn kind(&self) -> EventKind {
        match self {
            WatchEvent::Add { .. } => EventKind::Add,
            WatchEvent::Change { .. } => EventKind::Change,
            WatchEvent::Unlink { .. } => EventKind::Unlink,
            WatchEvent::AddDir { .. } => EventKind::AddDir,
            WatchEvent::UnlinkDir { .. } => EventKind::UnlinkDir,
            WatchEvent::All { .. } => EventKind::All,
            WatchEvent::Error(_) => EventKind::Error,
            WatchEvent::Ready => EventKind::Ready,
            WatchEvent::Raw(_) => EventKind::Raw,
        }
    }

    pub fn topic(&self) -> Topic {
        Topic::Event(self.kind())
    }

    /// The path this event is about. For `All` this is the path that follows
    /// the change kind; lifecycle events have none.
    pub fn path(&self) -> Option<&str> {
        match self {
            WatchEvent::Add { path, .. }
            | WatchEvent::Change { path, .. }
            | WatchEvent::Unlink { path }
            | WatchEvent::AddDir { path, .. }
            | WatchEvent::UnlinkDir { path }
            | WatchEvent::All { path, .. } => Some(path),
            WatchEvent::Error(_) | WatchEvent::Ready | WatchEvent::Raw(_) => None,
        }
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        match self {
            WatchEvent::Add { metadata, .. }
            | WatchEvent::Change { metadata, .. }
            | WatchEvent::AddDir { metadata, .. }
            | WatchEvent::All { metadata, .. } => metadata.as_ref(),
            _ => None,
        }
    }

    /// The composite `All` event for a per-kind change event.
    pub fn to_all(&self) -> Option<WatchEvent> {
        let kind = self.kind();
        if !EventKind::CHANGES.contains(&kind) {
            return None;
        }
        Some(WatchEvent::All {
            kind,
            path: self.path()?.to_string(),
            metadata: self.metadata().cloned(),
        })
    }
}
