// tests/scenarios.rs

mod common;

use globwatch::{IgnoreMatcher, IgnoreSpec, WatchOptions};
use globwatch_test_utils::TempTree;

use common::start;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::test]
async fn star_txt_reports_only_txt_files() -> TestResult {
    let tree = TempTree::with_files(&["change.txt", "unlink.txt"])?;
    let (watcher, mut rec) = start(&tree, "*.txt", WatchOptions::new());

    rec.wait_for("add", "change.txt").await;
    rec.wait_for("add", "unlink.txt").await;

    tree.write("add.txt", "new")?;
    rec.wait_for("add", "add.txt").await;

    tree.write("change.txt", "changed")?;
    rec.wait_for("change", "change.txt").await;

    tree.remove("unlink.txt")?;
    rec.wait_for("unlink", "unlink.txt").await;

    tree.write("other.rs", "fn main() {}")?;
    tree.write("sentinel.txt", "done")?;
    rec.wait_for("add", "sentinel.txt").await;

    assert!(rec.delivered_for("other.rs").is_empty());
    assert!(rec.delivered_for(".").is_empty());
    assert!(!rec.events_for("other.rs").is_empty(), "suppressed events go to original:*");

    watcher.close();
    Ok(())
}

#[tokio::test]
async fn negated_glob_wins_over_star() -> TestResult {
    let tree = TempTree::with_files(&["unlink.txt", "change.txt"])?;
    let (watcher, mut rec) = start(&tree, vec!["*", "!*a*.txt"], WatchOptions::new());

    rec.wait_for("add", "unlink.txt").await;

    tree.write("change.txt", "touched")?;
    tree.remove("unlink.txt")?;
    rec.wait_for("unlink", "unlink.txt").await;

    tree.write("zz", "sentinel")?;
    rec.wait_for("add", "zz").await;

    assert_eq!(rec.count("add", "unlink.txt"), 1);
    assert_eq!(rec.count("unlink", "unlink.txt"), 1);
    assert!(rec.delivered_for("change.txt").is_empty());

    watcher.close();
    Ok(())
}

#[tokio::test]
async fn bracketed_name_is_watched_literally() -> TestResult {
    let tree = TempTree::with_files(&["nota[glob].txt", "notag.txt"])?;
    let session_watcher = globwatch::WatchSession::new(
        "nota[glob].txt",
        WatchOptions::new().cwd(tree.root()),
    )?;
    assert!(!session_watcher.is_filtered());
    drop(session_watcher);

    let (watcher, mut rec) = start(&tree, "nota[glob].txt", WatchOptions::new());
    rec.wait_for("add", "nota[glob].txt").await;

    tree.write("nota[glob].txt", "edited")?;
    rec.wait_for("change", "nota[glob].txt").await;

    assert!(rec.events_for("notag.txt").is_empty());
    watcher.close();
    Ok(())
}

#[tokio::test]
async fn disabled_globbing_watches_the_verbatim_path() -> TestResult {
    let tree = TempTree::with_files(&["nota[glob]", "notag"])?;
    let (watcher, mut rec) = start(
        &tree,
        "nota[glob]",
        WatchOptions::new().disable_globbing(true),
    );

    assert_eq!(watcher.roots(), vec!["nota[glob]".to_string()]);
    rec.wait_for("add", "nota[glob]").await;

    tree.write("nota[glob]", "edited")?;
    rec.wait_for("change", "nota[glob]").await;

    assert!(rec.events_for("notag").is_empty());
    watcher.close();
    Ok(())
}

#[tokio::test]
async fn glob_and_predicate_ignores_combine() -> TestResult {
    let tree = TempTree::with_files(&["keep.txt", "a.log", "deep/er/b.log", "secret.txt"])?;
    let ignored = IgnoreSpec::Many(vec![
        IgnoreMatcher::from("**/*.log"),
        IgnoreMatcher::predicate(|p| p.contains("secret")),
    ]);
    let (watcher, mut rec) = start(&tree, ".", WatchOptions::new().ignored(ignored));

    // The initial scan reports entries in path order.
    rec.wait_for("addDir", "deep/er").await;
    rec.wait_for("add", "keep.txt").await;

    tree.write("deep/er/new.log", "log")?;
    tree.write("more-secret.md", "shh")?;
    tree.write("visible.md", "hi")?;
    rec.wait_for("add", "visible.md").await;

    for hidden in ["a.log", "deep/er/b.log", "secret.txt", "deep/er/new.log", "more-secret.md"] {
        assert!(rec.events_for(hidden).is_empty(), "{hidden} should be ignored");
    }

    watcher.close();
    Ok(())
}

#[tokio::test]
async fn literal_target_is_forwarded_next_to_globs() -> TestResult {
    let tree = TempTree::with_files(&["a.txt", "notes.md", "other.md"])?;
    let (watcher, mut rec) = start(&tree, vec!["*.txt", "notes.md"], WatchOptions::new());

    rec.wait_for("add", "a.txt").await;
    rec.wait_for("add", "notes.md").await;

    tree.write("notes.md", "edit")?;
    rec.wait_for("change", "notes.md").await;

    assert!(rec.delivered_for("other.md").is_empty());
    watcher.close();
    Ok(())
}

#[tokio::test]
async fn lifecycle_events_pass_the_filter() -> TestResult {
    let tree = TempTree::with_files(&["a.rs"])?;
    let (watcher, mut rec) = start(&tree, "*.txt", WatchOptions::new());

    assert!(rec.saw_topic("ready"));
    assert!(rec.delivered_for("a.rs").is_empty());

    watcher.close();
    Ok(())
}
