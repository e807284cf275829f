//! Composition root for project bootstrap
//!
//! A [`Factory`] owns everything one invocation needs: the project
//! directory, the debug switch, the credentials profile, the filesystem
//! provider and the application loader with its search path. Every
//! collaborator is built from that state and nothing else.

use crate::application::config::AppConfig;
use crate::application::loader::init_logging;
use crate::application::providers::{FileSystemProvider, LiveFileSystemProvider};
use crate::cloud::{self, CloudClient, CloudSession};
use crate::deploy::{self, AppPackager, Deployer, LogRetriever, Prompter};
use crate::primitives::FactoryResult;
use crate::project::{
    ApplicationLoader, ApplicationModule, ConfigResolver, DEFAULT_STAGE_NAME, RawProjectConfig,
    ResolutionContext, ResolveRequest, ResolvedConfig, read_project_config,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Builds sessions, configs and engines for one project
pub struct Factory<F = LiveFileSystemProvider>
where
    F: FileSystemProvider,
{
    project_dir: PathBuf,
    debug: bool,
    profile: Option<String>,
    filesystem: F,
    loader: ApplicationLoader,
}

impl Factory<LiveFileSystemProvider> {
    pub fn new(project_dir: impl Into<PathBuf>, debug: bool, profile: Option<String>) -> Self {
        Self::with_providers(project_dir, debug, profile, LiveFileSystemProvider)
    }

    /// Production composition; also initializes the global logger if
    /// nothing else has yet
    pub fn from_app_config(app_config: &AppConfig) -> Self {
        let _ = init_logging(app_config);

        let project_dir = app_config
            .project_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        Self::new(project_dir, app_config.debug, app_config.profile.clone())
    }
}

impl<F> Factory<F>
where
    F: FileSystemProvider,
{
    /// Create a factory over a custom filesystem provider
    pub fn with_providers(
        project_dir: impl Into<PathBuf>,
        debug: bool,
        profile: Option<String>,
        filesystem: F,
    ) -> Self {
        let project_dir = project_dir.into();
        let debug_enabled = debug;
        debug!(project_dir = %project_dir.display(), debug = debug_enabled, profile = ?profile, "Created factory");

        Self {
            project_dir,
            debug,
            profile,
            filesystem,
            loader: ApplicationLoader::new(),
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn filesystem(&self) -> &dyn FileSystemProvider {
        &self.filesystem
    }

    /// Search path as it stands after any loads so far
    pub fn resolution_context(&self) -> &ResolutionContext {
        self.loader.context()
    }

    pub fn create_cloud_session(&self) -> FactoryResult<CloudSession> {
        Ok(cloud::create_cloud_session(self.profile.clone(), self.debug)?)
    }

    pub fn create_default_deployer(
        &self,
        session: CloudSession,
        prompter: Box<dyn Prompter>,
    ) -> Deployer {
        deploy::create_default_deployer(session, prompter)
    }

    /// Resolve the project configuration for `stage` (default "dev")
    pub fn create_config(
        &mut self,
        stage: Option<&str>,
        autogen_policy: Option<bool>,
        api_gateway_stage: Option<&str>,
    ) -> FactoryResult<ResolvedConfig> {
        let request = ResolveRequest::for_stage(stage.unwrap_or(DEFAULT_STAGE_NAME))
            .with_autogen_policy(autogen_policy)
            .with_api_gateway_stage(api_gateway_stage.map(str::to_string));

        ConfigResolver::new(
            &self.project_dir,
            self.profile.as_deref(),
            &self.filesystem,
            &mut self.loader,
        )
        .resolve(request)
    }

    pub fn create_app_packager(&self, config: ResolvedConfig) -> AppPackager {
        deploy::create_app_packager(config)
    }

    pub fn create_log_retriever(
        &self,
        session: CloudSession,
        function_arn: &str,
    ) -> FactoryResult<LogRetriever> {
        let client = CloudClient::new(session)?;
        Ok(LogRetriever::create_from_arn(client, function_arn)?)
    }

    /// The project's application, loaded at most once per factory
    pub fn load_app(&mut self) -> FactoryResult<Arc<ApplicationModule>> {
        self.loader.load(&self.filesystem, &self.project_dir)
    }

    pub fn load_project_config(&self) -> FactoryResult<RawProjectConfig> {
        read_project_config(&self.filesystem, &self.project_dir)
    }
}

#[cfg(test)]
mod tests {
    include!("factory.test.rs");
}
