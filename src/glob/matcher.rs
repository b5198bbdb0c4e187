// src/glob/matcher.rs

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::errors::{GlobwatchError, Result};

/// Options bound into a compiled matcher.
///
/// Wildcards always match dotfiles; there is no switch for it.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Working directory. Absolute candidates under it are also tried in
    /// their relative form, so `*.txt` matches `/work/dir/a.txt` when
    /// `cwd = /work/dir`.
    pub cwd: Option<PathBuf>,
}

impl CompileOptions {
    pub fn with_cwd(cwd: Option<&Path>) -> Self {
        Self {
            cwd: cwd.map(Path::to_path_buf),
        }
    }
}

/// A compiled set of glob patterns. Matching is disjunctive: a candidate
/// matches if any pattern in the list accepts it.
///
/// A pattern written as `!x` inside the list accepts every candidate that
/// `x` rejects.
#[derive(Clone)]
pub struct GlobMatcher {
    inner: Arc<Inner>,
}

struct Inner {
    patterns: Vec<String>,
    positive: GlobSet,
    negated: Vec<globset::GlobMatcher>,
    cwd: Option<String>,
}

impl fmt::Debug for GlobMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobMatcher")
            .field("patterns", &self.inner.patterns)
            .field("cwd", &self.inner.cwd)
            .finish()
    }
}

impl GlobMatcher {
    /// Compile `patterns` into one matcher.
    pub fn compile<S: AsRef<str>>(patterns: &[S], options: &CompileOptions) -> Result<Self> {
        let mut positive = GlobSetBuilder::new();
        let mut negated = Vec::new();
        let mut originals = Vec::with_capacity(patterns.len());

        for pat in patterns {
            let pat = pat.as_ref();
            originals.push(pat.to_string());

            match pat.strip_prefix('!').filter(|rest| !rest.starts_with('(')) {
                Some(rest) => negated.push(build_glob(pat, rest)?.compile_matcher()),
                None => {
                    positive.add(build_glob(pat, pat)?);
                }
            }
        }

        let positive = positive.build().map_err(|e| GlobwatchError::InvalidGlob {
            pattern: originals.join(", "),
            reason: e.to_string(),
        })?;

        let cwd = options
            .cwd
            .as_ref()
            .map(|p| p.to_string_lossy().replace('\\', "/").trim_end_matches('/').to_string());

        Ok(Self {
            inner: Arc::new(Inner {
                patterns: originals,
                positive,
                negated,
                cwd,
            }),
        })
    }

    /// The pattern strings this matcher was compiled from.
    pub fn patterns(&self) -> &[String] {
        &self.inner.patterns
    }

    /// Returns true if `candidate` matches any of the compiled patterns.
    pub fn is_match(&self, candidate: &str) -> bool {
        let normalized = normalize(candidate);
        if self.matches_one(&normalized) {
            return true;
        }
        match self.relative_to_cwd(&normalized) {
            Some(rel) => self.matches_one(rel),
            None => false,
        }
    }

    fn matches_one(&self, candidate: &str) -> bool {
        // Exact text always matches, even when the pattern contains syntax
        // that would not match its own spelling.
        if self.inner.patterns.iter().any(|p| strip_dot_slash(p) == candidate) {
            return true;
        }
        if self.inner.positive.is_match(candidate) {
            return true;
        }
        self.inner.negated.iter().any(|m| !m.is_match(candidate))
    }

    fn relative_to_cwd<'a>(&self, candidate: &'a str) -> Option<&'a str> {
        let cwd = self.inner.cwd.as_deref()?;
        let rest = candidate.strip_prefix(cwd)?;
        let rest = rest.strip_prefix('/')?;
        (!rest.is_empty()).then_some(rest)
    }
}

fn build_glob(original: &str, pat: &str) -> Result<globset::Glob> {
    GlobBuilder::new(strip_dot_slash(pat))
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map_err(|e| GlobwatchError::InvalidGlob {
            pattern: original.to_string(),
            reason: e.kind().to_string(),
        })
}

fn normalize(candidate: &str) -> String {
    strip_dot_slash(&candidate.replace('\\', "/")).to_string()
}

fn strip_dot_slash(s: &str) -> &str {
    let mut s = s;
    while let Some(rest) = s.strip_prefix("./") {
        s = rest;
    }
    s
}
