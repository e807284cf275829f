//! Provider seams for bootstrap I/O
//!
//! The factory reaches the filesystem only through [`FileSystemProvider`],
//! so resolution and loading can run against an in-memory project in tests.

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Provider trait for filesystem operations
pub trait FileSystemProvider {
    /// Get current working directory
    fn current_dir(&self) -> Result<PathBuf>;

    /// Read entire file contents as string
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_directory(&self, path: &Path) -> bool;
}

/// Live implementation of FileSystemProvider
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveFileSystemProvider;

impl FileSystemProvider for LiveFileSystemProvider {
    fn current_dir(&self) -> Result<PathBuf> {
        env::current_dir().context("Failed to get current directory")
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
