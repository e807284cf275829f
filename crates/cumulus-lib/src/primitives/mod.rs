//! cumulus primitives - core types, errors, and coordination
//!
//! Central collection of shared types that the rest of the crate builds on:
//! logging configuration, tool configuration errors, and the user-facing
//! bootstrap error taxonomy.

use clap::ValueEnum;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::cloud::SessionError;
use crate::deploy::LogRetrieverError;
use crate::project::{EntryPointError, SyntaxErrorReport};

// Shared macros and patterns
mod shared;
use shared::impl_fromstr_for_value_enum;

/// Available log output streams
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// STDERR
    Stderr,
    /// STDOUT
    Stdout,
}

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

/// Output formats for structured logging
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// TEXT
    /// alias: text, txt, plain
    Text,

    /// JSON
    /// alias: json
    Json,

    /// PRETTY (multi-line, human oriented)
    /// alias: pretty, full
    Pretty,
}

// ============================================================================
// LOGGER CONFIGURATION TYPES
// ============================================================================

/// Logger configuration derived from the tool configuration
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    /// Whether ANSI colors may be written
    pub ansi: bool,
}

// ============================================================================
// STRUCTURED ERROR TYPES
// ============================================================================

/// Tool configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load environment file '{file}': {source}")]
    EnvFileError {
        file: String,
        source: dotenvy::Error,
    },

    #[error("Failed to parse environment variables: {source}")]
    EnvironmentParsingFailed {
        #[from]
        source: envy::Error,
    },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Failed to get current directory: {source}")]
    CurrentDirError {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration value '{value}': {reason}")]
    ParseError { value: String, reason: String },
}

/// Logger initialization and operation errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to initialize tracing subscriber: {reason}")]
    InitializationFailed { reason: String },

    #[error("Logger already initialized")]
    AlreadyInitialized,
}

/// Errors raised while bootstrapping a project.
///
/// The first three variants are the user-facing taxonomy: each wraps its
/// low-level cause while keeping the identifying details (directory,
/// version literal, file and line). Everything else passes through with
/// its original shape.
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error(
        "Unable to load the project config file. Are you sure this is a cumulus project? ({})",
        project_dir.display()
    )]
    ConfigUnreadable {
        project_dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown version '{version}' in config.json")]
    UnknownConfigVersion { version: String },

    #[error("{0}")]
    ApplicationLoad(SyntaxErrorReport),

    #[error(transparent)]
    InvalidConfigJson(#[from] serde_json::Error),

    #[error(transparent)]
    EntryPoint(#[from] EntryPointError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    LogRetriever(#[from] LogRetrieverError),
}

/// Result alias for bootstrap operations
pub type FactoryResult<T> = Result<T, FactoryError>;

impl LogLevel {
    /// Convert verbosity level from AppConfig to LogLevel
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            4.. => LogLevel::Trace,
        }
    }

    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Error => Some(
                clap::builder::PossibleValue::new("error")
                    .alias("err")
                    .alias("fatal"),
            ),
            Self::Warning => Some(clap::builder::PossibleValue::new("warn").alias("warning")),
            Self::Info => Some(clap::builder::PossibleValue::new("info").alias("information")),
            Self::Debug => Some(clap::builder::PossibleValue::new("debug").alias("debugging")),
            Self::Trace => Some(
                clap::builder::PossibleValue::new("trace")
                    .alias("tracing")
                    .alias("verbose"),
            ),
        }
    }
}

impl ValueEnum for LogFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Text, Self::Json, Self::Pretty]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Text => Some(
                clap::builder::PossibleValue::new("text")
                    .alias("txt")
                    .alias("plain"),
            ),
            Self::Json => Some(clap::builder::PossibleValue::new("json")),
            Self::Pretty => Some(clap::builder::PossibleValue::new("pretty").alias("full")),
        }
    }
}

impl ValueEnum for LogOutput {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Stderr, Self::Stdout]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Stderr => Some(clap::builder::PossibleValue::new("stderr")),
            Self::Stdout => Some(clap::builder::PossibleValue::new("stdout")),
        }
    }
}

// Generate FromStr implementations for all ValueEnum types
impl_fromstr_for_value_enum!(LogLevel, "invalid log level");
impl_fromstr_for_value_enum!(LogFormat, "invalid log format");
impl_fromstr_for_value_enum!(LogOutput, "invalid log output stream");

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
