//! Tool configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> CUMULUS_* env vars.

use crate::primitives::*;
use crate::project::DEFAULT_STAGE_NAME;
use serde::Deserialize;
use std::path::PathBuf;

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::*;

    pub fn stage() -> String {
        DEFAULT_STAGE_NAME.to_string()
    }

    pub fn log_level() -> u8 {
        defaults::LOG_LEVEL.parse().unwrap_or(0)
    }

    pub fn log_format() -> LogFormat {
        defaults::LOG_FORMAT.parse().unwrap_or(LogFormat::Text)
    }

    pub fn log_output() -> LogOutput {
        defaults::LOG_OUTPUT.parse().unwrap_or(LogOutput::Stderr)
    }
}

/// Tool configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Project directory (CUMULUS_PROJECT_DIR)
    #[serde(default)]
    pub project_dir: Option<PathBuf>,

    /// Deployment stage (CUMULUS_STAGE)
    #[serde(default = "default_fns::stage")]
    pub stage: String,

    /// Named credentials profile (CUMULUS_PROFILE)
    #[serde(default)]
    pub profile: Option<String>,

    /// Wire-level request logging (CUMULUS_DEBUG)
    #[serde(default)]
    pub debug: bool,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Output format (text, json, pretty)
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project_dir: None,
            stage: default_fns::stage(),
            profile: None,
            debug: false,
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig from AppConfig.
    ///
    /// With `debug` set the level is raised to at least Debug so the wire
    /// channel is visible.
    pub fn to_logger_config(&self, ansi: bool) -> LoggerConfig {
        let mut level = LogLevel::from_verbosity(self.log_level);
        if self.debug {
            level = level.max(LogLevel::Debug);
        }

        LoggerConfig {
            level,
            format: self.log_format,
            output: self.log_output,
            ansi,
        }
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.project_dir.is_some() {
            self.project_dir = other.project_dir;
        }
        if other.profile.is_some() {
            self.profile = other.profile;
        }

        if other.stage != default_fns::stage() {
            self.stage = other.stage;
        }
        if other.debug {
            self.debug = true;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.stage.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "stage name must not be empty".to_string(),
            });
        }

        if self.project_dir.is_none() {
            self.project_dir = Some(std::env::current_dir()?);
        }

        Ok(())
    }
}
