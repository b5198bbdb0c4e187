// src/glob/mod.rs

//! Glob scanning and compilation.
//!
//! - [`scan`] decides lexically whether a string is a glob and where its
//!   concrete directory prefix ends.
//! - [`GlobMatcher`] compiles a list of patterns into one predicate over path
//!   strings (backed by `globset`).

pub mod matcher;
pub mod scan;

pub use matcher::{CompileOptions, GlobMatcher};
pub use scan::{is_glob, scan, ScanInfo};
