// src/lib.rs

//! Glob-aware filesystem watching.
//!
//! Targets may be literal paths, glob patterns (`src/**/*.rs`), negated
//! globs (`!**/*.tmp`) or nested lists of them. Globs are reduced to the
//! concrete directories that need watching, and change events are routed
//! through a filter so only paths matching the request are reported.
//!
//! ```no_run
//! use globwatch::{watch, EventKind, WatchOptions};
//!
//! # fn main() -> globwatch::errors::Result<()> {
//! let watcher = watch(vec!["src/**/*.rs", "!src/generated/**"], WatchOptions::new())?;
//! watcher.on(EventKind::Change, |ev| println!("changed: {:?}", ev.path()));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod events;
pub mod fs;
pub mod glob;
pub mod logging;
pub mod session;
pub mod watcher;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::{ensure_has_targets, load_for_cli, merge_cli};
use crate::session::{classify, compile_ignored, WatchTargets};

pub use crate::events::{EventKind, Topic, WatchEvent};
pub use crate::session::{watch, WatchSession};
pub use crate::watcher::{FsWatcher, IgnoreMatcher, IgnoreSpec, WatchOptions};

/// What the print loop receives from watcher listeners.
#[derive(Debug)]
enum Notice {
    Change { topic: String, path: String },
    Ready,
    Error(String),
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and merging with flags
/// - the watch session
/// - printing events to stdout
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let file = load_for_cli(&args)?;
    let (targets, options) = merge_cli(&args, file.as_ref())?;
    ensure_has_targets(&targets)?;

    if args.dry_run {
        print_dry_run(&targets, &options)?;
        return Ok(());
    }

    let (tx, mut rx) = mpsc::unbounded_channel::<Notice>();

    let session = WatchSession::new(targets, options)?;
    subscribe(&session, Topic::Event(EventKind::All), &tx);
    if args.show_suppressed {
        subscribe(&session, Topic::Original(EventKind::All), &tx);
    }
    {
        let tx = tx.clone();
        session.on(EventKind::Ready, move |_| {
            let _ = tx.send(Notice::Ready);
        });
    }
    {
        let tx = tx.clone();
        session.on(EventKind::Error, move |ev| {
            if let WatchEvent::Error(err) = ev {
                let _ = tx.send(Notice::Error(err.to_string()));
            }
        });
    }
    drop(tx);

    let watcher = session.start();

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            notice = rx.recv() => match notice {
                Some(Notice::Change { topic, path }) => println!("{topic} {path}"),
                Some(Notice::Ready) => info!("initial scan complete"),
                Some(Notice::Error(msg)) => warn!(error = %msg, "watcher error"),
                None => break,
            },
            res = &mut shutdown => {
                if let Err(e) = res {
                    warn!(error = %e, "failed to listen for Ctrl+C");
                }
                info!("shutting down");
                break;
            }
        }
    }

    watcher.close();
    Ok(())
}

/// Forward `all` events on `topic` as `<kind> <path>` lines, keeping the
/// `original:` prefix for suppressed ones.
fn subscribe(session: &WatchSession, topic: Topic, tx: &mpsc::UnboundedSender<Notice>) {
    let tx = tx.clone();
    session.on(topic, move |ev| {
        if let WatchEvent::All { kind, path, .. } = ev {
            let topic = match topic {
                Topic::Event(_) => Topic::Event(*kind),
                Topic::Original(_) => Topic::Original(*kind),
            };
            let _ = tx.send(Notice::Change {
                topic: topic.to_string(),
                path: path.clone(),
            });
        }
    });
}

/// Print roots, filters and ignore entries without starting a watcher.
fn print_dry_run(targets: &[String], options: &WatchOptions) -> Result<()> {
    println!("globwatch dry-run");
    println!("  targets: {targets:?}");

    if options.disable_globbing {
        println!("  globbing disabled; roots = targets");
        return Ok(());
    }

    let cwd = options.cwd.as_deref();
    let plan = classify(&WatchTargets::from(targets.to_vec()), cwd)?;
    println!("  roots: {:?}", plan.roots);

    match &plan.filter {
        Some(filter) => {
            if let Some(positive) = filter.positive() {
                println!("  include: {:?}", positive.patterns());
            }
            if let Some(negated) = filter.negated() {
                println!("  exclude: {:?}", negated.patterns());
            }
            if !filter.literals().is_empty() {
                println!("  always forwarded: {:?}", filter.literals());
            }
        }
        None => println!("  no glob filter (literal targets only)"),
    }

    let ignored = compile_ignored(options.ignored.clone(), cwd)?;
    if !ignored.is_empty() {
        println!("  ignored:");
        for entry in &ignored {
            println!("    - {entry:?}");
        }
    }

    debug!("dry-run complete (nothing watched)");
    Ok(())
}
