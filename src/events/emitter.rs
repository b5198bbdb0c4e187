// src/events/emitter.rs

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::events::{Topic, WatchEvent};

/// Emission entry point of a watcher.
///
/// Returns true if some listener handled the event.
pub trait Emit: Send + Sync {
    fn emit(&self, topic: Topic, event: &WatchEvent) -> bool;
}

/// Callback registered for one topic.
pub type Listener = Arc<dyn Fn(&WatchEvent) + Send + Sync>;

/// Topic → listener registry. This is the innermost emitter of every
/// watcher; decorators wrap it.
#[derive(Default)]
pub struct Listeners {
    map: RwLock<HashMap<Topic, Vec<Listener>>>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let map = self.map.read().unwrap_or_else(PoisonError::into_inner);
        let counts: HashMap<String, usize> =
            map.iter().map(|(t, l)| (t.to_string(), l.len())).collect();
        f.debug_struct("Listeners").field("counts", &counts).finish()
    }
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `topic`.
    pub fn on<F>(&self, topic: impl Into<Topic>, listener: F)
    where
        F: Fn(&WatchEvent) + Send + Sync + 'static,
    {
        let mut map = self.map.write().unwrap_or_else(PoisonError::into_inner);
        map.entry(topic.into()).or_default().push(Arc::new(listener));
    }

    pub fn listener_count(&self, topic: impl Into<Topic>) -> usize {
        let map = self.map.read().unwrap_or_else(PoisonError::into_inner);
        map.get(&topic.into()).map_or(0, Vec::len)
    }
}

impl Emit for Listeners {
    fn emit(&self, topic: Topic, event: &WatchEvent) -> bool {
        // Snapshot first so listeners may register further listeners.
        let listeners: Vec<Listener> = {
            let map = self.map.read().unwrap_or_else(PoisonError::into_inner);
            match map.get(&topic) {
                Some(list) if !list.is_empty() => list.clone(),
                _ => return false,
            }
        };

        for listener in &listeners {
            listener(event);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn emit_reports_whether_anyone_listened() {
        let listeners = Listeners::new();
        assert!(!listeners.emit(Topic::Event(EventKind::Add), &WatchEvent::add("a")));

        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        listeners.on(EventKind::Add, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(listeners.emit(Topic::Event(EventKind::Add), &WatchEvent::add("a")));
        assert!(!listeners.emit(Topic::Original(EventKind::Add), &WatchEvent::add("a")));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(listeners.listener_count(EventKind::Add), 1);
    }
}
