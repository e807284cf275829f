//! Project templates for end-to-end tests
//!
//! Each template is a complete on-disk project: config.json contents plus
//! the app.toml entry file.

use anyhow::{Result, anyhow};
use cumulus_lib::Factory;
use cumulus_lib::testing::ProjectFixture;
use serde_json::{Value, json};

pub const ORDERS_APP: &str = r#"
[app]
name = "orders"

[[app.routes]]
path = "/orders"
methods = ["GET", "POST"]
handler = "orders"

[[app.functions]]
name = "nightly_report"
handler = "report"
"#;

/// Seven lines; line 5 is not valid TOML
pub const BROKEN_APP: &str = "[app]\nname = \"orders\"\n\n# routes follow\nthis is not toml\n\n[extra]\n";

/// A project layout to materialize in a temp directory
#[derive(Debug, Clone)]
pub struct ProjectTemplate {
    config: Option<Value>,
    app: String,
    vendor: bool,
}

impl Default for ProjectTemplate {
    fn default() -> Self {
        Self {
            config: Some(json!({ "version": "2.0", "app_name": "orders" })),
            app: ORDERS_APP.to_string(),
            vendor: false,
        }
    }
}

impl ProjectTemplate {
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }

    pub fn without_config(mut self) -> Self {
        self.config = None;
        self
    }

    pub fn with_app(mut self, app: &str) -> Self {
        self.app = app.to_string();
        self
    }

    pub fn with_vendor(mut self) -> Self {
        self.vendor = true;
        self
    }

    pub fn build(&self) -> Result<ProjectFixture> {
        let fixture = ProjectFixture::new().map_err(|e| anyhow!("{e}"))?;

        if let Some(config) = &self.config {
            fixture
                .write_config(&serde_json::to_string_pretty(config)?)
                .map_err(|e| anyhow!("{e}"))?;
        }
        fixture.write_app(&self.app).map_err(|e| anyhow!("{e}"))?;
        if self.vendor {
            fixture.create_vendor().map_err(|e| anyhow!("{e}"))?;
        }

        Ok(fixture)
    }
}

/// Factory over the real filesystem rooted at `fixture`
pub fn live_factory(fixture: &ProjectFixture, debug: bool, profile: Option<&str>) -> Factory {
    Factory::new(fixture.path(), debug, profile.map(str::to_string))
}
