//! Records watcher events for assertions.

use globwatch::{EventKind, FsWatcher, Topic, WatchEvent};
use tokio::sync::mpsc;

/// One delivered event: the topic it arrived on and its path, if any.
///
/// For `all` events the topic is rendered with the change kind, e.g. a
/// suppressed composite add is recorded as `original:all` with
/// `kind = Some("add")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub topic: String,
    pub kind: Option<String>,
    pub path: Option<String>,
}

impl Recorded {
    pub fn is(&self, topic: &str, path: &str) -> bool {
        self.topic == topic && self.path.as_deref() == Some(path)
    }
}

/// Collects events from a watcher's listeners into a channel.
pub struct Recorder {
    rx: mpsc::UnboundedReceiver<Recorded>,
    seen: Vec<Recorded>,
    /// Events before this index were consumed by `wait_for`.
    cursor: usize,
}

impl Recorder {
    /// Listen on every change topic, `ready` and `error`, plus the
    /// `original:` variants of the change topics.
    pub fn attach(watcher: &FsWatcher) -> Self {
        let mut topics: Vec<Topic> = Vec::new();
        for kind in EventKind::CHANGES.into_iter().chain([EventKind::All]) {
            topics.push(Topic::Event(kind));
            topics.push(Topic::Original(kind));
        }
        topics.push(Topic::Event(EventKind::Ready));
        topics.push(Topic::Event(EventKind::Error));
        Self::attach_topics(watcher, &topics)
    }

    pub fn attach_topics(watcher: &FsWatcher, topics: &[Topic]) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        for &topic in topics {
            let tx = tx.clone();
            watcher.on(topic, move |ev: &WatchEvent| {
                let kind = match ev {
                    WatchEvent::All { kind, .. } => Some(kind.to_string()),
                    _ => None,
                };
                let _ = tx.send(Recorded {
                    topic: topic.to_string(),
                    kind,
                    path: ev.path().map(str::to_string),
                });
            });
        }
        Self { rx, seen: Vec::new(), cursor: 0 }
    }

    /// Everything delivered so far, without waiting.
    pub fn drain(&mut self) -> &[Recorded] {
        while let Ok(rec) = self.rx.try_recv() {
            self.seen.push(rec);
        }
        &self.seen
    }

    /// Wait until an event on `topic` for `path` arrives after the one
    /// matched by the previous `wait_for`.
    ///
    /// Panics after 5 seconds.
    pub async fn wait_for(&mut self, topic: &str, path: &str) -> Recorded {
        self.drain();
        if let Some(offset) = self.seen[self.cursor..].iter().position(|r| r.is(topic, path)) {
            self.cursor += offset + 1;
            return self.seen[self.cursor - 1].clone();
        }
        let rx = &mut self.rx;
        let seen = &mut self.seen;
        let rec = crate::with_timeout(async {
            loop {
                let rec = rx.recv().await.expect("watcher listeners dropped");
                seen.push(rec.clone());
                if rec.is(topic, path) {
                    return rec;
                }
            }
        })
        .await;
        self.cursor = self.seen.len();
        rec
    }

    /// Recorded events for `path` on any topic.
    pub fn events_for(&mut self, path: &str) -> Vec<Recorded> {
        self.drain()
            .iter()
            .filter(|r| r.path.as_deref() == Some(path))
            .cloned()
            .collect()
    }

    /// Whether anything arrived on `topic`.
    pub fn saw_topic(&mut self, topic: &str) -> bool {
        self.drain().iter().any(|r| r.topic == topic)
    }

    /// Events for `path` delivered on a normal (not `original:`) topic.
    pub fn delivered_for(&mut self, path: &str) -> Vec<Recorded> {
        self.events_for(path)
            .into_iter()
            .filter(|r| !r.topic.starts_with("original:"))
            .collect()
    }

    pub fn count(&mut self, topic: &str, path: &str) -> usize {
        self.drain().iter().filter(|r| r.is(topic, path)).count()
    }
}
