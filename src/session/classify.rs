// src/session/classify.rs

//! Splits watch targets into literal paths, positive globs and negated
//! globs, and derives the concrete roots and the event filter for them.

use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::glob::{scan, CompileOptions, GlobMatcher};
use crate::session::targets::WatchTargets;

/// Targets grouped by how they are routed. Order within each group follows
/// the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedTargets {
    pub literals: Vec<String>,
    pub positive: Vec<String>,
    /// Negated globs with the negation marker stripped.
    pub negated: Vec<String>,
    /// Glob-free directory prefix of each positive glob, deduplicated.
    pub parent_roots: Vec<String>,
}

impl ClassifiedTargets {
    pub fn from_paths<S: AsRef<str>>(paths: &[S]) -> Self {
        let mut out = ClassifiedTargets::default();

        for path in paths {
            let path = path.as_ref();
            let info = scan(path);

            // `!name` without glob syntax is a literal path too.
            if !info.is_glob {
                out.literals.push(path.to_string());
            } else if info.negated {
                // Excludes only; contributes no root.
                out.negated.push(path[info.start..].to_string());
            } else {
                push_unique(&mut out.parent_roots, info.parent_root());
                out.positive.push(path.to_string());
            }
        }

        out
    }

    pub fn has_globs(&self) -> bool {
        !self.positive.is_empty() || !self.negated.is_empty()
    }

    /// Parent roots followed by literal paths, first occurrence wins.
    pub fn roots(&self) -> Vec<String> {
        let mut roots = Vec::with_capacity(self.parent_roots.len() + self.literals.len());
        for root in self.parent_roots.iter().chain(&self.literals) {
            push_unique(&mut roots, root.clone());
        }
        roots
    }
}

fn push_unique(list: &mut Vec<String>, item: String) {
    if !list.contains(&item) {
        list.push(item);
    }
}

/// Decides per reported path whether an event is suppressed.
#[derive(Debug, Clone)]
pub struct PathFilter {
    literals: Vec<String>,
    positive: Option<GlobMatcher>,
    negated: Option<GlobMatcher>,
}

impl PathFilter {
    pub fn new(
        literals: Vec<String>,
        positive: Option<GlobMatcher>,
        negated: Option<GlobMatcher>,
    ) -> Self {
        Self { literals, positive, negated }
    }

    /// True if events for `path` must be suppressed.
    ///
    /// Negated globs win over everything; literal targets (compared as exact
    /// strings) are always forwarded; everything else must match a positive
    /// glob. Without positive globs nothing passes that last gate.
    pub fn ignores(&self, path: &str) -> bool {
        if self.negated.as_ref().is_some_and(|m| m.is_match(path)) {
            return true;
        }
        if self.literals.iter().any(|literal| literal == path) {
            return false;
        }
        !self.positive.as_ref().is_some_and(|m| m.is_match(path))
    }

    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    pub fn positive(&self) -> Option<&GlobMatcher> {
        self.positive.as_ref()
    }

    pub fn negated(&self) -> Option<&GlobMatcher> {
        self.negated.as_ref()
    }
}

/// Outcome of classifying one target list.
#[derive(Debug, Clone)]
pub struct Classification {
    /// Concrete paths to register with the watcher.
    pub roots: Vec<String>,
    /// `None` when there were no globs; events then pass untouched.
    pub filter: Option<PathFilter>,
}

/// Flatten and classify `targets`.
///
/// Without any glob the flattened list comes back unchanged as the roots and
/// no filter is built.
pub fn classify(targets: &WatchTargets, cwd: Option<&Path>) -> Result<Classification> {
    let paths = targets.flatten()?;
    let classified = ClassifiedTargets::from_paths(&paths);

    if !classified.has_globs() {
        debug!(roots = ?paths, "no glob targets, passing paths through");
        return Ok(Classification { roots: paths, filter: None });
    }

    let options = CompileOptions::with_cwd(cwd);
    let positive = compile_if_any(&classified.positive, &options)?;
    let negated = compile_if_any(&classified.negated, &options)?;
    let roots = classified.roots();

    debug!(
        roots = ?roots,
        positive = ?classified.positive,
        negated = ?classified.negated,
        literals = ?classified.literals,
        "classified watch targets"
    );

    Ok(Classification {
        roots,
        filter: Some(PathFilter::new(classified.literals, positive, negated)),
    })
}

fn compile_if_any(patterns: &[String], options: &CompileOptions) -> Result<Option<GlobMatcher>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    GlobMatcher::compile(patterns, options).map(Some)
}
