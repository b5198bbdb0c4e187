// src/config/mod.rs

//! Configuration loading and validation for globwatch.
//!
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants (`validate.rs`).
//! - Merge the file with command-line flags (`merge.rs`).

pub mod loader;
pub mod merge;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use merge::{load_for_cli, merge_cli};
pub use model::{ConfigFile, RawConfigFile, WatchSection};
pub use validate::ensure_has_targets;
