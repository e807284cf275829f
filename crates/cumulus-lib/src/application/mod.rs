//! Application layer modules
//!
//! Organizes tool configuration, provider seams, and the bootstrap factory.

pub mod config;
pub mod env;
pub mod factory;
pub mod loader;
pub mod providers;

#[cfg(any(test, feature = "test-utils"))]
pub mod providers_mocks;

pub use config::AppConfig;
pub use env::EnvironmentConfig;
pub use factory::Factory;
pub use loader::{ENV_PREFIX, init_logging};
pub use providers::{FileSystemProvider, LiveFileSystemProvider};
