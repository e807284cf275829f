//! # cumulus Library
//!
//! Project bootstrap for serverless application deployments.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types and errors
//! - [`logger`] - Structured logging
//! - [`project`] - Project configuration and application loading
//! - [`cloud`] - Cloud SDK sessions and wire-level diagnostics
//! - [`deploy`] - Deployer, packager and log retrieval entry points
//! - [`application`] - Tool configuration and the bootstrap [`Factory`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use cumulus_lib::{AppConfig, Factory};
//!
//! let app_config = AppConfig::load()?;
//! let mut factory = Factory::from_app_config(&app_config);
//! let config = factory.create_config(Some(app_config.stage.as_str()), None, None)?;
//! println!("{} ({})", config.app_name(), config.stage());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod application;
pub mod cloud;
pub mod deploy;
pub mod logger;
pub mod primitives;
pub mod project;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Factory};
pub use cloud::{CloudClient, CloudSession};
pub use logger::Logger;
pub use primitives::{
    ConfigError, FactoryError, FactoryResult, LogFormat, LogLevel, LogOutput, LoggerError,
};
pub use project::{ApplicationModule, ResolvedConfig};
