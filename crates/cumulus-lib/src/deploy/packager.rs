use crate::project::ResolvedConfig;

/// Packaging engine entry point; reads everything from the resolved config
#[derive(Debug, Clone)]
pub struct AppPackager {
    config: ResolvedConfig,
}

impl AppPackager {
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Name of the deployment artifact for the configured app and stage
    pub fn artifact_name(&self) -> String {
        format!("{}-{}.zip", self.config.app_name(), self.config.stage())
    }
}

pub fn create_app_packager(config: ResolvedConfig) -> AppPackager {
    AppPackager { config }
}
