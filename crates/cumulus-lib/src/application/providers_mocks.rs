//! Mock implementations of providers for testing
//!
//! These mocks let resolution and loading run without touching disk.

use crate::application::providers::FileSystemProvider;
use anyhow::Result;
use std::collections::{HashMap, HashSet};
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock filesystem provider for testing
#[derive(Debug, Clone)]
pub struct MockFileSystemProvider {
    pub current_dir: PathBuf,
    /// In-memory filesystem: path -> content
    pub files: Arc<Mutex<HashMap<PathBuf, String>>>,
    /// Track directories that exist
    pub directories: Arc<Mutex<HashSet<PathBuf>>>,
    /// Paths that exist but refuse to be read
    pub unreadable: Arc<Mutex<HashSet<PathBuf>>>,
    /// Every path passed to `read_to_string`, in order
    pub reads: Arc<Mutex<Vec<PathBuf>>>,
}

impl Default for MockFileSystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFileSystemProvider {
    pub fn new() -> Self {
        Self {
            current_dir: PathBuf::from("/test/workdir"),
            files: Arc::new(Mutex::new(HashMap::new())),
            directories: Arc::new(Mutex::new(HashSet::new())),
            unreadable: Arc::new(Mutex::new(HashSet::new())),
            reads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_current_dir(mut self, dir: PathBuf) -> Self {
        self.current_dir = dir.clone();
        self.directories.lock().unwrap().insert(dir);
        self
    }

    pub fn with_file(self, path: PathBuf, content: impl Into<String>) -> Self {
        if let Some(parent) = path.parent() {
            self.directories
                .lock()
                .unwrap()
                .insert(parent.to_path_buf());
        }
        self.files.lock().unwrap().insert(path, content.into());
        self
    }

    pub fn with_directory(self, path: PathBuf) -> Self {
        self.directories.lock().unwrap().insert(path);
        self
    }

    /// Register a file that exists but fails with permission denied on read
    pub fn with_unreadable_file(self, path: PathBuf) -> Self {
        self.unreadable.lock().unwrap().insert(path.clone());
        self.with_file(path, String::new())
    }

    /// Typical project layout: config.json plus app.toml under `project_dir`
    pub fn with_project(self, project_dir: &Path, config_json: &str, app_toml: &str) -> Self {
        self.with_directory(project_dir.to_path_buf())
            .with_file(
                project_dir.join(".cumulus").join("config.json"),
                config_json,
            )
            .with_file(project_dir.join("app.toml"), app_toml)
    }

    /// Number of times `path` has been read
    pub fn read_count(&self, path: &Path) -> usize {
        self.reads
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.as_path() == path)
            .count()
    }
}

impl FileSystemProvider for MockFileSystemProvider {
    fn current_dir(&self) -> Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.reads.lock().unwrap().push(path.to_path_buf());

        if self.unreadable.lock().unwrap().contains(path) {
            return Err(Error::new(
                ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ));
        }

        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::NotFound,
                    format!("file not found: {}", path.display()),
                )
            })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.is_directory(path)
    }

    fn is_directory(&self, path: &Path) -> bool {
        self.directories.lock().unwrap().contains(path)
    }
}
