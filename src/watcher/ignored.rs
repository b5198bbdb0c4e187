// src/watcher/ignored.rs

//! Ignore entries understood by the watcher.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::glob::GlobMatcher;

/// Caller-supplied ignore predicate over reported path strings.
pub type IgnorePredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// One entry of an ignore list. Entries are combined disjunctively: a path
/// is ignored if any entry matches it.
#[derive(Clone)]
pub enum IgnoreMatcher {
    /// A path string. Outside the glob layer it matches the path itself and
    /// everything below it.
    Path(String),
    Predicate(IgnorePredicate),
    Glob(GlobMatcher),
    /// A config value that is neither a string nor a list. Kept as is and
    /// never matches.
    Opaque(toml::Value),
}

impl IgnoreMatcher {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        IgnoreMatcher::Predicate(Arc::new(f))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            IgnoreMatcher::Path(p) => Some(p),
            _ => None,
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            IgnoreMatcher::Path(p) => path_is_within(path, p),
            IgnoreMatcher::Predicate(f) => f(path),
            IgnoreMatcher::Glob(m) => m.is_match(path),
            IgnoreMatcher::Opaque(value) => {
                debug!(?value, "opaque ignore entry never matches");
                false
            }
        }
    }
}

fn path_is_within(path: &str, entry: &str) -> bool {
    let entry = entry.strip_prefix("./").unwrap_or(entry).trim_end_matches('/');
    let path = path.strip_prefix("./").unwrap_or(path);
    if entry.is_empty() {
        return false;
    }
    path == entry
        || path
            .strip_prefix(entry)
            .is_some_and(|rest| rest.starts_with('/'))
}

impl fmt::Debug for IgnoreMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreMatcher::Path(p) => f.debug_tuple("Path").field(p).finish(),
            IgnoreMatcher::Predicate(_) => f.write_str("Predicate(..)"),
            IgnoreMatcher::Glob(m) => f.debug_tuple("Glob").field(&m.patterns()).finish(),
            IgnoreMatcher::Opaque(v) => f.debug_tuple("Opaque").field(v).finish(),
        }
    }
}

impl From<&str> for IgnoreMatcher {
    fn from(s: &str) -> Self {
        IgnoreMatcher::Path(s.to_string())
    }
}

impl From<String> for IgnoreMatcher {
    fn from(s: String) -> Self {
        IgnoreMatcher::Path(s)
    }
}

impl From<GlobMatcher> for IgnoreMatcher {
    fn from(m: GlobMatcher) -> Self {
        IgnoreMatcher::Glob(m)
    }
}

impl<'de> Deserialize<'de> for IgnoreMatcher {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Path(String),
            Opaque(toml::Value),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Path(p) => IgnoreMatcher::Path(p),
            Raw::Opaque(v) => IgnoreMatcher::Opaque(v),
        })
    }
}

/// The `ignored` option as a caller writes it: one entry or a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IgnoreSpec {
    Many(Vec<IgnoreMatcher>),
    One(IgnoreMatcher),
}

impl IgnoreSpec {
    /// Flatten into a list; a single entry becomes a singleton.
    pub fn into_list(self) -> Vec<IgnoreMatcher> {
        match self {
            IgnoreSpec::One(m) => vec![m],
            IgnoreSpec::Many(list) => list,
        }
    }
}

impl From<Vec<IgnoreMatcher>> for IgnoreSpec {
    fn from(list: Vec<IgnoreMatcher>) -> Self {
        IgnoreSpec::Many(list)
    }
}

impl From<IgnoreMatcher> for IgnoreSpec {
    fn from(m: IgnoreMatcher) -> Self {
        IgnoreSpec::One(m)
    }
}

impl From<&str> for IgnoreSpec {
    fn from(s: &str) -> Self {
        IgnoreSpec::One(s.into())
    }
}

impl From<Vec<&str>> for IgnoreSpec {
    fn from(list: Vec<&str>) -> Self {
        IgnoreSpec::Many(list.into_iter().map(IgnoreMatcher::from).collect())
    }
}

/// True if any entry matches `path`.
pub fn is_ignored(matchers: &[IgnoreMatcher], path: &str) -> bool {
    matchers.iter().any(|m| m.matches(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_entries_cover_descendants() {
        let m = IgnoreMatcher::from("node_modules");
        assert!(m.matches("node_modules"));
        assert!(m.matches("node_modules/pkg/index.js"));
        assert!(!m.matches("node_modules_backup"));
        assert!(!m.matches("src/node_modules"));
    }

    #[test]
    fn predicates_are_called_with_the_path() {
        let m = IgnoreMatcher::predicate(|p| p.ends_with(".tmp"));
        assert!(m.matches("a/b.tmp"));
        assert!(!m.matches("a/b.txt"));
    }

    #[test]
    fn opaque_entries_never_match() {
        let m = IgnoreMatcher::Opaque(toml::Value::Integer(3));
        assert!(!m.matches("3"));
    }

    #[test]
    fn single_entry_or_list_flattens() {
        assert_eq!(IgnoreSpec::from("x").into_list().len(), 1);
        assert_eq!(IgnoreSpec::from(vec!["a", "b"]).into_list().len(), 2);
    }
}
