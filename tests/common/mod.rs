use globwatch::session::WatchTargets;
use globwatch::{FsWatcher, WatchOptions, WatchSession};
use globwatch_test_utils::{init_tracing, Recorder, TempTree};

/// Build a session rooted at `tree`, attach a recorder, then start it so the
/// initial scan is recorded too.
#[allow(dead_code)]
pub fn start(
    tree: &TempTree,
    targets: impl Into<WatchTargets>,
    options: WatchOptions,
) -> (FsWatcher, Recorder) {
    init_tracing();
    let session = WatchSession::new(targets, options.cwd(tree.root())).expect("session should start");
    let recorder = Recorder::attach(session.watcher());
    (session.start(), recorder)
}
