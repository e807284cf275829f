//! Filesystem-based integration testing utilities

use crate::project::loader::VENDOR_DIR;
use crate::project::resolver::{CONFIG_DIR, CONFIG_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary project directory with automatic cleanup
pub struct ProjectFixture {
    /// The temporary directory (automatically cleaned up on drop)
    pub temp_dir: TempDir,
}

impl ProjectFixture {
    /// Create an empty project directory
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        Ok(Self { temp_dir })
    }

    /// Project with both config.json and app.toml in place
    pub fn with_project(
        config_json: &str,
        app_toml: &str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let fixture = Self::new()?;
        fixture.write_config(config_json)?;
        fixture.write_app(app_toml)?;
        Ok(fixture)
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `.cumulus/config.json`
    pub fn write_config(&self, content: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
        self.write_file(&format!("{CONFIG_DIR}/{CONFIG_FILE}"), content)
    }

    /// Write the `app.toml` entry file
    pub fn write_app(&self, content: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
        self.write_file("app.toml", content)
    }

    /// Create the vendor directory and return its path
    pub fn create_vendor(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let vendor = self.path().join(VENDOR_DIR);
        fs::create_dir_all(&vendor)?;
        Ok(vendor)
    }

    /// Write content to a file within the project, creating parents
    pub fn write_file(
        &self,
        file_path: &str,
        content: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let full_path = self.path().join(file_path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, content)?;
        Ok(full_path)
    }

    pub fn file_exists(&self, file_path: &str) -> bool {
        self.path().join(file_path).exists()
    }
}

#[cfg(test)]
mod tests {
    include!("filesystem.test.rs");
}
