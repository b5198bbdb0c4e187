// src/glob/scan.rs

//! Lexical scanner that decides whether a watch target is a glob.
//!
//! The scanner never compiles anything; it only classifies a string and,
//! for globs, reports where the negation marker ends and which directory
//! prefix is free of glob syntax. That prefix is what gets registered with
//! the filesystem watcher.

/// Result of scanning one pattern string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanInfo {
    /// True if the body carries glob syntax. A negation marker alone does
    /// not make a glob.
    pub is_glob: bool,
    /// True if the string starts with one or more `!` negation markers.
    pub negated: bool,
    /// Byte offset where the pattern proper starts: after any negation
    /// markers and a leading `./`.
    pub start: usize,
    /// Everything before `start` that is not a negation marker, i.e. `./`
    /// or the empty string.
    pub prefix: String,
    /// Directory portion before the first segment containing glob syntax,
    /// without a trailing slash. For literals this is the whole body.
    pub base: String,
    /// The remainder after `base`.
    pub glob: String,
}

impl ScanInfo {
    /// Concrete directory to hand to the watcher for a positive glob.
    pub fn parent_root(&self) -> String {
        format!("{}{}", self.prefix, self.base)
    }
}

/// Scan `pattern` and classify it.
pub fn scan(pattern: &str) -> ScanInfo {
    let bytes = pattern.as_bytes();

    let mut start = 0;
    let mut negated = false;
    while start < bytes.len() && bytes[start] == b'!' && bytes.get(start + 1) != Some(&b'(') {
        negated = true;
        start += 1;
    }
    let negation_end = start;

    if pattern[start..].starts_with("./") {
        start += 2;
    }
    let prefix = pattern[negation_end..start].to_string();
    let body = &pattern[start..];

    let glob_at = find_glob_syntax(body);

    let (base, glob) = match glob_at {
        Some(idx) => split_at_last_slash(body, idx),
        None => (body.to_string(), String::new()),
    };

    ScanInfo {
        is_glob: glob_at.is_some(),
        negated,
        start,
        prefix,
        base,
        glob,
    }
}

/// Convenience for callers that only need the verdict.
pub fn is_glob(pattern: &str) -> bool {
    scan(pattern).is_glob
}

fn split_at_last_slash(body: &str, glob_at: usize) -> (String, String) {
    match body[..glob_at].rfind('/') {
        Some(0) => ("/".to_string(), body[1..].to_string()),
        Some(slash) => (body[..slash].to_string(), body[slash + 1..].to_string()),
        None => (String::new(), body.to_string()),
    }
}

/// Byte offset of the first glob construct in `body`, if any.
fn find_glob_syntax(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'*' | b'?' => return Some(i),
            b'@' | b'+' | b'!' if bytes.get(i + 1) == Some(&b'(') => return Some(i),
            b'{' => {
                if let Some(end) = closing_brace(bytes, i) {
                    if brace_expands(&body[i + 1..end]) {
                        return Some(i);
                    }
                    i = end + 1;
                    continue;
                }
            }
            b'[' => {
                if let Some(end) = closing_bracket(bytes, i) {
                    if bracket_is_class(&body[i + 1..end]) {
                        return Some(i);
                    }
                    i = end + 1;
                    continue;
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

fn closing_brace(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// `{a,b}` and `{1..3}` expand; `{abc}` is a literal.
fn brace_expands(inner: &str) -> bool {
    let bytes = inner.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => return true,
            b'.' if depth == 0 && bytes.get(i + 1) == Some(&b'.') => return true,
            _ => {}
        }
        i += 1;
    }
    false
}

fn closing_bracket(bytes: &[u8], open: usize) -> Option<usize> {
    let mut i = open + 1;
    // A `]` right after the opening bracket (or after a negation) is a member.
    if matches!(bytes.get(i), Some(b'!') | Some(b'^')) {
        i += 1;
    }
    if bytes.get(i) == Some(&b']') {
        i += 1;
    }
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'[' if bytes.get(i + 1) == Some(&b':') => {
                let rest = &bytes[i + 2..];
                if let Some(close) = rest.windows(2).position(|w| w == b":]") {
                    i += close + 4;
                    continue;
                }
            }
            b']' => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}

/// A bracket pair only counts as a character class if it does something a
/// plain filename could not: negate, span a range, or name a POSIX class.
/// `[slug]` or `[glob]` stay literal.
fn bracket_is_class(inner: &str) -> bool {
    if inner.starts_with('!') || inner.starts_with('^') || inner.contains("[:") {
        return true;
    }
    let bytes = inner.as_bytes();
    (1..bytes.len().saturating_sub(1)).any(|i| bytes[i] == b'-' && bytes[i - 1] != b'\\')
}
