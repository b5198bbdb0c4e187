// src/session/ignore.rs

use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::glob::{is_glob, CompileOptions, GlobMatcher};
use crate::watcher::{IgnoreMatcher, IgnoreSpec};

/// Rewrite an `ignored` option so glob strings become one compiled matcher.
///
/// Non-glob entries (literal paths, predicates, opaque values) keep their
/// order; the compiled matcher, if any, is appended last. A list without
/// glob strings comes back unchanged.
pub fn compile_ignored(ignored: Option<IgnoreSpec>, cwd: Option<&Path>) -> Result<Vec<IgnoreMatcher>> {
    let entries = ignored.map(IgnoreSpec::into_list).unwrap_or_default();

    let globs: Vec<String> = entries
        .iter()
        .filter_map(IgnoreMatcher::as_str)
        .filter(|s| is_glob(s))
        .map(str::to_string)
        .collect();

    if globs.is_empty() {
        return Ok(entries);
    }

    let matcher = GlobMatcher::compile(&globs, &CompileOptions::with_cwd(cwd))?;
    debug!(patterns = ?globs, "compiled glob ignore entries");

    let mut kept: Vec<IgnoreMatcher> = entries
        .into_iter()
        .filter(|entry| !entry.as_str().is_some_and(is_glob))
        .collect();
    kept.push(IgnoreMatcher::Glob(matcher));
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_option_is_empty() {
        assert!(compile_ignored(None, None).unwrap().is_empty());
    }

    #[test]
    fn non_glob_lists_are_returned_unchanged() {
        let out = compile_ignored(Some(vec!["target", "node_modules"].into()), None).unwrap();
        let names: Vec<_> = out.iter().filter_map(IgnoreMatcher::as_str).collect();
        assert_eq!(names, vec!["target", "node_modules"]);
    }

    #[test]
    fn globs_are_merged_into_one_trailing_matcher() {
        let spec = IgnoreSpec::Many(vec![
            "**/*.log".into(),
            IgnoreMatcher::predicate(|p| p.contains("tmp")),
            "target".into(),
            "*.bak".into(),
        ]);
        let out = compile_ignored(Some(spec), None).unwrap();

        assert_eq!(out.len(), 3);
        assert!(matches!(out[0], IgnoreMatcher::Predicate(_)));
        assert_eq!(out[1].as_str(), Some("target"));
        let IgnoreMatcher::Glob(ref m) = out[2] else {
            panic!("expected a compiled glob matcher, got {:?}", out[2]);
        };
        assert_eq!(m.patterns(), ["**/*.log", "*.bak"]);
        assert!(out[2].matches("deep/er/x.log"));
    }

    #[test]
    fn negated_literal_entry_is_kept_as_a_path() {
        let out = compile_ignored(Some("!keep.txt".into()), None).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].as_str(), Some("!keep.txt"));
        assert!(!out[0].matches("."));
    }

    #[test]
    fn single_glob_entry_becomes_a_list() {
        let out = compile_ignored(Some("*.tmp".into()), None).unwrap();
        assert_eq!(out.len(), 1);
        assert!(out[0].matches("a.tmp"));
    }
}
