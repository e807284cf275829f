//! Turns a project directory into a [`ResolvedConfig`]

use crate::application::providers::FileSystemProvider;
use crate::primitives::{FactoryError, FactoryResult};
use crate::project::config::{
    DEFAULT_STAGE_NAME, DefaultParams, RawProjectConfig, ResolvedConfig, UserProvidedParams,
    validate_version,
};
use crate::project::loader::ApplicationLoader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory holding project settings
pub const CONFIG_DIR: &str = ".cumulus";
/// Project settings file inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.json";

/// Path of config.json for `project_dir`
pub fn config_file_path(project_dir: &Path) -> PathBuf {
    project_dir.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Read config.json. Read failures of any kind mean the directory is
/// probably not a project; malformed JSON is reported as such.
pub fn read_project_config(
    filesystem: &dyn FileSystemProvider,
    project_dir: &Path,
) -> FactoryResult<RawProjectConfig> {
    let path = config_file_path(project_dir);
    let content =
        filesystem
            .read_to_string(&path)
            .map_err(|source| FactoryError::ConfigUnreadable {
                project_dir: project_dir.to_path_buf(),
                source,
            })?;

    Ok(RawProjectConfig::from_json(&content)?)
}

/// Caller-side inputs for one resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    pub stage: String,
    pub autogen_policy: Option<bool>,
    pub api_gateway_stage: Option<String>,
}

impl Default for ResolveRequest {
    fn default() -> Self {
        Self::for_stage(DEFAULT_STAGE_NAME)
    }
}

impl ResolveRequest {
    pub fn for_stage(stage: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            autogen_policy: None,
            api_gateway_stage: None,
        }
    }

    pub fn with_autogen_policy(mut self, autogen_policy: Option<bool>) -> Self {
        self.autogen_policy = autogen_policy;
        self
    }

    pub fn with_api_gateway_stage(mut self, api_gateway_stage: Option<String>) -> Self {
        self.api_gateway_stage = api_gateway_stage;
        self
    }
}

/// Resolves project configuration against a filesystem and an application loader
pub struct ConfigResolver<'a> {
    project_dir: &'a Path,
    profile: Option<&'a str>,
    filesystem: &'a dyn FileSystemProvider,
    loader: &'a mut ApplicationLoader,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(
        project_dir: &'a Path,
        profile: Option<&'a str>,
        filesystem: &'a dyn FileSystemProvider,
        loader: &'a mut ApplicationLoader,
    ) -> Self {
        Self {
            project_dir,
            profile,
            filesystem,
            loader,
        }
    }

    pub fn load_project_config(&self) -> FactoryResult<RawProjectConfig> {
        read_project_config(self.filesystem, self.project_dir)
    }

    pub fn resolve(self, request: ResolveRequest) -> FactoryResult<ResolvedConfig> {
        let disk = self.load_project_config()?;
        validate_version(&disk)?;

        let app = self.loader.load(self.filesystem, self.project_dir)?;

        let defaults = DefaultParams::new(self.project_dir.to_path_buf());

        let mut user = UserProvidedParams::new(app);
        user.autogen_policy = request.autogen_policy;
        user.profile = self.profile.map(str::to_string);
        user.api_gateway_stage = request.api_gateway_stage;

        debug!(
            stage = %request.stage,
            autogen_policy = ?user.autogen_policy,
            profile = ?user.profile,
            api_gateway_stage = ?user.api_gateway_stage,
            "Collected user-provided parameters"
        );

        let config = ResolvedConfig::new(request.stage, user, disk, defaults);

        info!(
            stage = config.stage(),
            app = %config.app_name(),
            version = %config.config_version(),
            "Resolved project configuration"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    include!("resolver.test.rs");
}
