//! Tool configuration loading and logger bootstrap
//!
//! Coordinates loading configuration from its sources and initializing
//! the global logger from the result.

use crate::logger::Logger;
use crate::primitives::{ConfigError, LogOutput, LoggerError};
use std::io::IsTerminal;

use super::{config::AppConfig, env::EnvironmentConfig};

/// Prefix shared by every tool environment variable
pub const ENV_PREFIX: &str = "CUMULUS_";

impl AppConfig {
    /// Load config: defaults -> .env -> env vars
    pub fn load() -> Result<Self, ConfigError> {
        use dotenvy::from_filename;

        // 1. Load .env files (missing files are fine)
        let env_files = [".env.local", ".env"];
        for env_file in &env_files {
            if let Err(e) = from_filename(env_file) {
                if !e.not_found() {
                    return Err(ConfigError::EnvFileError {
                        file: env_file.to_string(),
                        source: e,
                    });
                }
            }
        }

        // 2. Defaults, overridden by CUMULUS_* variables
        let from_env: AppConfig = envy::prefixed(ENV_PREFIX).from_env()?;
        let mut config = Self::default().merge_with(from_env);

        // 3. Post-process and validate
        config.validate()?;

        Ok(config)
    }

    /// Same as [`AppConfig::load`] over explicit pairs, without .env files
    pub fn from_env_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let from_env: AppConfig = envy::prefixed(ENV_PREFIX).from_iter(pairs)?;
        let mut config = Self::default().merge_with(from_env);
        config.validate()?;
        Ok(config)
    }
}

/// Initialize the global logger for `config`.
///
/// Colors follow the output stream's TTY state unless NO_COLOR,
/// FORCE_COLOR, CLICOLOR or CI say otherwise.
pub fn init_logging(config: &AppConfig) -> Result<&'static Logger, LoggerError> {
    let is_tty = match config.log_output {
        LogOutput::Stderr => std::io::stderr().is_terminal(),
        LogOutput::Stdout => std::io::stdout().is_terminal(),
    };
    let ansi = EnvironmentConfig::load()
        .map(|env| env.ansi_enabled(is_tty))
        .unwrap_or(is_tty);

    Logger::init(config.to_logger_config(ansi))
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
