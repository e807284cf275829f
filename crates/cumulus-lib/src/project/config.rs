//! Stage-scoped project configuration
//!
//! Three layers feed a [`ResolvedConfig`], highest precedence first:
//!
//! 1. [`UserProvidedParams`] - explicit caller overrides. Every optional
//!    field is `None` unless the caller set it, so an unset override never
//!    masks a lower layer.
//! 2. [`RawProjectConfig`] - `.cumulus/config.json`, where a value under
//!    `stages.<stage>` wins over the same key at the top level.
//! 3. [`DefaultParams`] - fallbacks computed by the factory.

use crate::primitives::{FactoryError, FactoryResult};
use crate::project::app::ApplicationModule;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

/// Stage used when the caller does not name one
pub const DEFAULT_STAGE_NAME: &str = "dev";
/// API stage used when no layer names one
pub const DEFAULT_API_GATEWAY_STAGE: &str = "api";
/// Version assumed when config.json has no `version` key
pub const DEFAULT_CONFIG_VERSION: &str = "1.0";
/// Newest config.json version this tool understands
pub const MAX_CONFIG_VERSION: f64 = 2.0;
/// Tag key attached to every deployed resource
pub const TOOL_TAG_KEY: &str = "cumulus";

/// Contents of config.json, verbatim
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProjectConfig(Map<String, Value>);

impl RawProjectConfig {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Parse config.json text. The root must be a JSON object.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content).map(Self)
    }

    /// Textual `version`, defaulting to `1.0` when absent
    pub fn version_literal(&self) -> String {
        match self.0.get("version") {
            None => DEFAULT_CONFIG_VERSION.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn top_level_value(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn stage_value(&self, stage: &str, key: &str) -> Option<&Value> {
        self.0
            .get("stages")
            .and_then(|stages| stages.get(stage))
            .and_then(|settings| settings.get(key))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Reject versions that are unparseable or newer than this tool supports
pub fn validate_version(config: &RawProjectConfig) -> FactoryResult<()> {
    let literal = config.version_literal();
    match literal.trim().parse::<f64>() {
        Ok(version) if version <= MAX_CONFIG_VERSION => Ok(()),
        _ => Err(FactoryError::UnknownConfigVersion { version: literal }),
    }
}

/// Lowest-precedence settings, always present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultParams {
    pub project_dir: PathBuf,
    pub autogen_policy: bool,
}

impl DefaultParams {
    pub fn new(project_dir: PathBuf) -> Self {
        Self {
            project_dir,
            autogen_policy: true,
        }
    }
}

/// Explicit caller overrides
#[derive(Debug, Clone)]
pub struct UserProvidedParams {
    pub app: Arc<ApplicationModule>,
    pub autogen_policy: Option<bool>,
    pub profile: Option<String>,
    pub api_gateway_stage: Option<String>,
}

impl UserProvidedParams {
    pub fn new(app: Arc<ApplicationModule>) -> Self {
        Self {
            app,
            autogen_policy: None,
            profile: None,
            api_gateway_stage: None,
        }
    }
}

/// Final settings for one stage. Immutable once built.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    stage: String,
    user: UserProvidedParams,
    disk: RawProjectConfig,
    defaults: DefaultParams,
}

impl ResolvedConfig {
    pub fn new(
        stage: impl Into<String>,
        user: UserProvidedParams,
        disk: RawProjectConfig,
        defaults: DefaultParams,
    ) -> Self {
        Self {
            stage: stage.into(),
            user,
            disk,
            defaults,
        }
    }

    /// Stage-scoped value from config.json, falling back to the top level.
    /// Values of the wrong type are skipped.
    fn disk_lookup<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let candidates = [
            self.disk.stage_value(&self.stage, key),
            self.disk.top_level_value(key),
        ];

        candidates.into_iter().flatten().find_map(|value| {
            match serde_json::from_value(value.clone()) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    warn!(key, stage = %self.stage, error = %e, "Ignoring malformed config value");
                    None
                }
            }
        })
    }

    /// Top-level object merged with the stage object, stage winning per key
    fn merged_string_map(&self, key: &str) -> BTreeMap<String, String> {
        let mut merged = BTreeMap::new();
        let layers = [
            self.disk.top_level_value(key),
            self.disk.stage_value(&self.stage, key),
        ];

        for layer in layers.into_iter().flatten() {
            match serde_json::from_value::<BTreeMap<String, String>>(layer.clone()) {
                Ok(values) => merged.extend(values),
                Err(e) => {
                    warn!(key, stage = %self.stage, error = %e, "Ignoring malformed config value")
                }
            }
        }

        merged
    }

    pub fn stage(&self) -> &str {
        &self.stage
    }

    pub fn project_dir(&self) -> &Path {
        &self.defaults.project_dir
    }

    pub fn app(&self) -> &Arc<ApplicationModule> {
        &self.user.app
    }

    pub fn config_version(&self) -> String {
        self.disk.version_literal()
    }

    pub fn app_name(&self) -> String {
        self.disk_lookup("app_name")
            .unwrap_or_else(|| self.user.app.name.clone())
    }

    pub fn autogen_policy(&self) -> bool {
        self.user
            .autogen_policy
            .or_else(|| self.disk_lookup("autogen_policy"))
            .unwrap_or(self.defaults.autogen_policy)
    }

    pub fn profile(&self) -> Option<String> {
        self.user
            .profile
            .clone()
            .or_else(|| self.disk_lookup("profile"))
    }

    pub fn api_gateway_stage(&self) -> String {
        self.user
            .api_gateway_stage
            .clone()
            .or_else(|| self.disk_lookup("api_gateway_stage"))
            .unwrap_or_else(|| DEFAULT_API_GATEWAY_STAGE.to_string())
    }

    pub fn manage_iam_role(&self) -> bool {
        self.disk_lookup("manage_iam_role").unwrap_or(true)
    }

    pub fn iam_role_arn(&self) -> Option<String> {
        self.disk_lookup("iam_role_arn")
    }

    /// Policy file under `.cumulus/`, defaulting to `policy-<stage>.json`
    pub fn iam_policy_file(&self) -> String {
        self.disk_lookup("iam_policy_file")
            .unwrap_or_else(|| format!("policy-{}.json", self.stage))
    }

    pub fn lambda_timeout(&self) -> Option<u32> {
        self.disk_lookup("lambda_timeout")
    }

    pub fn lambda_memory_size(&self) -> Option<u32> {
        self.disk_lookup("lambda_memory_size")
    }

    pub fn environment_variables(&self) -> BTreeMap<String, String> {
        self.merged_string_map("environment_variables")
    }

    /// User tags plus the tool tag, unless the user defined that key
    pub fn tags(&self) -> BTreeMap<String, String> {
        let mut tags = self.merged_string_map("tags");
        tags.entry(TOOL_TAG_KEY.to_string()).or_insert_with(|| {
            format!(
                "version={}:stage={}:app={}",
                env!("CARGO_PKG_VERSION"),
                self.stage,
                self.app_name()
            )
        });
        tags
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
