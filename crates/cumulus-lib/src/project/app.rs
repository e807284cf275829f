//! The user's application, as declared by the `app` table of `app.toml`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_methods() -> Vec<String> {
    vec!["GET".to_string()]
}

/// An HTTP route served through the API stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Route {
    pub path: String,
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,
    pub handler: String,
}

/// A standalone function deployed without an API route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LambdaFunction {
    pub name: String,
    pub handler: String,
}

/// The deployable application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplicationModule {
    pub name: String,

    #[serde(default)]
    pub routes: Vec<Route>,

    #[serde(default)]
    pub functions: Vec<LambdaFunction>,

    /// File the application was loaded from
    #[serde(skip)]
    source: PathBuf,
}

impl ApplicationModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            routes: Vec::new(),
            functions: Vec::new(),
            source: PathBuf::new(),
        }
    }

    pub(crate) fn with_source(mut self, source: PathBuf) -> Self {
        self.source = source;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn has_routes(&self) -> bool {
        !self.routes.is_empty()
    }

    /// Every handler referenced by the application, routes first
    pub fn handler_names(&self) -> Vec<&str> {
        self.routes
            .iter()
            .map(|route| route.handler.as_str())
            .chain(self.functions.iter().map(|f| f.handler.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    include!("app.test.rs");
}
