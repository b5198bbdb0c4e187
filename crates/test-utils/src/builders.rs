//! Temporary directory trees for filesystem tests.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

/// A temporary directory that is removed on drop.
///
/// Paths passed to the helpers are relative to the tree root and may use `/`.
pub struct TempTree {
    dir: TempDir,
}

impl TempTree {
    pub fn new() -> Result<Self> {
        Ok(Self { dir: tempfile::tempdir()? })
    }

    /// Create a tree holding `files`, each with its own name as content.
    pub fn with_files(files: &[&str]) -> Result<Self> {
        let tree = Self::new()?;
        for file in files {
            tree.write(file, file)?;
        }
        Ok(tree)
    }

    /// Canonical root path, so it lines up with paths reported by the OS.
    pub fn root(&self) -> PathBuf {
        self.dir
            .path()
            .canonicalize()
            .unwrap_or_else(|_| self.dir.path().to_path_buf())
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `contents` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) -> Result<()> {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn mkdir(&self, rel: &str) -> Result<()> {
        fs::create_dir_all(self.path(rel))?;
        Ok(())
    }

    pub fn remove(&self, rel: &str) -> Result<()> {
        let path = self.path(rel);
        if path.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }
}
