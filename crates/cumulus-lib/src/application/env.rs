//! Environment variable handling for log output styling
//!
//! Manages standard environment variables for color and CI detection
//! following established conventions.

use crate::primitives::ConfigError;
use serde::Deserialize;

/// Environment variables that affect log styling
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// NO_COLOR environment variable (any value = disable color)
    pub no_color: Option<String>,
    /// FORCE_COLOR environment variable (0/false = disable, 1/2/3/true = enable)
    pub force_color: Option<String>,
    /// CLICOLOR environment variable (0 = disable color)
    pub clicolor: Option<String>,
    /// CI environment variable (any value = CI mode)
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    /// Load environment configuration from current environment
    pub fn load() -> Result<Self, ConfigError> {
        Ok(envy::from_env()?)
    }

    /// Load from explicit key/value pairs instead of the process environment
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(pairs)?)
    }

    /// Whether log output may carry ANSI colors.
    ///
    /// Precedence: CI > CLICOLOR < NO_COLOR < FORCE_COLOR
    pub fn ansi_enabled(&self, is_tty: bool) -> bool {
        if self.ci.is_some() {
            return false;
        }

        let mut ansi = is_tty;

        if self.clicolor.as_deref() == Some("0") {
            ansi = false;
        }

        if self.no_color.as_deref().is_some_and(|v| !v.is_empty()) {
            ansi = false;
        }

        if let Some(force_color) = &self.force_color {
            match force_color.as_str() {
                "0" | "false" => ansi = false,
                "1" | "2" | "3" | "true" => ansi = true,
                _ => {} // Invalid values ignored
            }
        }

        ansi
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
