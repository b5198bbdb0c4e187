// src/watcher/walk.rs

//! Initial scan of a watch root.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::warn;

use crate::fs::FileSystem;
use crate::watcher::path_utils::{depth_of, to_slash};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    File,
    Dir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    /// Slash-separated path relative to the root; empty for the root itself.
    pub rel: String,
    pub entry_type: EntryType,
}

/// Collect `root` and everything below it, sorted by path.
///
/// - `depth` limits how many directory levels below `root` are entered.
/// - `skip(rel, abs)` returning true drops an entry and, for directories,
///   everything below it.
///
/// A missing root yields no entries. Unreadable subdirectories are logged and
/// skipped; an unreadable root is an error.
pub fn walk_root<F>(
    fs: &dyn FileSystem,
    root: &Path,
    depth: Option<usize>,
    mut skip: F,
) -> Result<Vec<WalkEntry>>
where
    F: FnMut(&str, &Path) -> bool,
{
    let mut entries = Vec::new();

    if !fs.exists(root) || skip("", root) {
        return Ok(entries);
    }

    if !fs.is_dir(root) {
        entries.push(WalkEntry {
            path: root.to_path_buf(),
            rel: String::new(),
            entry_type: EntryType::File,
        });
        return Ok(entries);
    }

    entries.push(WalkEntry {
        path: root.to_path_buf(),
        rel: String::new(),
        entry_type: EntryType::Dir,
    });

    let mut stack = vec![(root.to_path_buf(), 0usize)];
    while let Some((dir, level)) = stack.pop() {
        if depth.is_some_and(|max| level > max) {
            continue;
        }

        let children = match fs.read_dir(&dir) {
            Ok(children) => children,
            Err(err) if dir.as_path() != root => {
                warn!(dir = ?dir, error = %err, "skipping unreadable directory");
                continue;
            }
            Err(err) => return Err(err),
        };

        for path in children {
            let Ok(rel) = path.strip_prefix(root) else {
                continue;
            };
            let rel = to_slash(rel);
            if skip(&rel, &path) {
                continue;
            }

            if fs.is_dir(&path) {
                stack.push((path.clone(), depth_of(&rel)));
                entries.push(WalkEntry { path, rel, entry_type: EntryType::Dir });
            } else if fs.is_file(&path) {
                entries.push(WalkEntry { path, rel, entry_type: EntryType::File });
            }
        }
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;

    fn rels(entries: &[WalkEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.rel.as_str()).collect()
    }

    fn sample_fs() -> MockFileSystem {
        let fs = MockFileSystem::new();
        fs.add_file("/p/a.txt");
        fs.add_file("/p/src/lib.rs");
        fs.add_file("/p/src/deep/mod.rs");
        fs.add_file("/p/target/out.bin");
        fs
    }

    #[test]
    fn walks_everything_in_path_order() {
        let fs = sample_fs();
        let entries = walk_root(&fs, Path::new("/p"), None, |_, _| false).unwrap();
        assert_eq!(
            rels(&entries),
            vec!["", "a.txt", "src", "src/deep", "src/deep/mod.rs", "src/lib.rs", "target", "target/out.bin"]
        );
        assert_eq!(entries[0].entry_type, EntryType::Dir);
        assert_eq!(entries[1].entry_type, EntryType::File);
    }

    #[test]
    fn skipped_directories_are_not_entered() {
        let fs = sample_fs();
        let entries =
            walk_root(&fs, Path::new("/p"), None, |rel, _| rel == "target").unwrap();
        assert!(!rels(&entries).iter().any(|r| r.starts_with("target")));
    }

    #[test]
    fn depth_zero_lists_only_direct_children() {
        let fs = sample_fs();
        let entries = walk_root(&fs, Path::new("/p"), Some(0), |_, _| false).unwrap();
        assert_eq!(rels(&entries), vec!["", "a.txt", "src", "target"]);
    }

    #[test]
    fn file_root_yields_itself() {
        let fs = sample_fs();
        let entries = walk_root(&fs, Path::new("/p/a.txt"), None, |_, _| false).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entry_type, EntryType::File);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let fs = sample_fs();
        let entries = walk_root(&fs, Path::new("/nope"), None, |_, _| false).unwrap();
        assert!(entries.is_empty());
    }
}
