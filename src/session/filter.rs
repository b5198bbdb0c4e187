// src/session/filter.rs

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::events::{Emit, Topic, WatchEvent};
use crate::session::classify::PathFilter;

/// Emitter decorator that routes change events through a [`PathFilter`].
///
/// - `error`, `ready` and `raw` always pass.
/// - A suppressed event is re-emitted on `original:<kind>` and reported as
///   not handled.
/// - Anything already on an `original:` topic passes unchanged.
pub struct FilteredEmitter {
    inner: Arc<dyn Emit>,
    filter: PathFilter,
}

impl FilteredEmitter {
    pub fn new(inner: Arc<dyn Emit>, filter: PathFilter) -> Self {
        Self { inner, filter }
    }

    pub fn filter(&self) -> &PathFilter {
        &self.filter
    }
}

impl fmt::Debug for FilteredEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredEmitter")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

impl Emit for FilteredEmitter {
    fn emit(&self, topic: Topic, event: &WatchEvent) -> bool {
        let Topic::Event(kind) = topic else {
            return self.inner.emit(topic, event);
        };
        if kind.is_lifecycle() {
            return self.inner.emit(topic, event);
        }
        let Some(path) = event.path() else {
            return self.inner.emit(topic, event);
        };

        if self.filter.ignores(path) {
            trace!(%kind, path, "suppressed by glob filter");
            self.inner.emit(Topic::Original(kind), event);
            return false;
        }

        self.inner.emit(topic, event)
    }
}
