//! Project model: the application, its configuration, and how both are loaded

pub mod app;
pub mod config;
pub mod loader;
pub mod resolver;

pub use app::{ApplicationModule, LambdaFunction, Route};
pub use config::{
    DEFAULT_STAGE_NAME, DefaultParams, RawProjectConfig, ResolvedConfig, UserProvidedParams,
};
pub use loader::{
    ApplicationLoader, EntryPointError, EntryPointResolver, ManifestEntryPointResolver,
    ResolutionContext, SyntaxErrorReport,
};
pub use resolver::{ConfigResolver, ResolveRequest, config_file_path, read_project_config};
