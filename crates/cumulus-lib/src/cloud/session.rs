//! Cloud sessions and the factory that tags them with the tool's identity

use crate::cloud::diagnostics::{LargeRequestBodyFilter, WireLogger};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Identification the HTTP stack reports on its own
pub const SDK_USER_AGENT_NAME: &str = "reqwest";
pub const SDK_USER_AGENT_VERSION: &str = "0.13";

/// Primary identification for every request this tool sends
pub const TOOL_USER_AGENT_NAME: &str = "cumulus";
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Region used when the environment names none
pub const DEFAULT_REGION: &str = "us-east-1";

/// Session construction errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read session environment: {source}")]
    Environment {
        #[from]
        source: envy::Error,
    },

    #[error("Failed to build HTTP client: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },
}

/// `AWS_REGION` / `AWS_DEFAULT_REGION`
#[derive(Debug, Clone, Default, Deserialize)]
struct RegionEnvironment {
    region: Option<String>,
    default_region: Option<String>,
}

impl RegionEnvironment {
    fn load() -> Result<Self, SessionError> {
        Ok(envy::prefixed("AWS_").from_env()?)
    }

    fn resolve(self) -> String {
        self.region
            .or(self.default_region)
            .filter(|region| !region.is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string())
    }
}

/// Authenticated handle to the cloud provider
#[derive(Debug)]
pub struct CloudSession {
    profile: Option<String>,
    region: String,
    pub user_agent_name: String,
    pub user_agent_version: String,
    pub user_agent_extra: Option<String>,
    wire_logger: Option<WireLogger>,
}

impl CloudSession {
    /// Session for `profile`, with the region taken from the environment
    pub fn new(profile: Option<String>) -> Result<Self, SessionError> {
        let region = RegionEnvironment::load()?.resolve();
        Ok(Self::with_region(profile, region))
    }

    pub fn with_region(profile: Option<String>, region: impl Into<String>) -> Self {
        Self {
            profile,
            region: region.into(),
            user_agent_name: SDK_USER_AGENT_NAME.to_string(),
            user_agent_version: SDK_USER_AGENT_VERSION.to_string(),
            user_agent_extra: None,
            wire_logger: None,
        }
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// `User-Agent` value for outgoing requests
    pub fn user_agent(&self) -> String {
        let mut agent = format!("{}/{}", self.user_agent_name, self.user_agent_version);
        if let Some(extra) = self.user_agent_extra.as_deref().filter(|e| !e.is_empty()) {
            agent.push(' ');
            agent.push_str(extra);
        }
        agent
    }

    pub fn endpoint_url(&self, service: &str) -> String {
        format!("https://{}.{}.amazonaws.com", service, self.region)
    }

    /// Turn on wire-level diagnostics; idempotent
    pub fn set_debug_logger(&mut self) -> &mut WireLogger {
        self.wire_logger.get_or_insert_with(WireLogger::new)
    }

    pub fn wire_logger(&self) -> Option<&WireLogger> {
        self.wire_logger.as_ref()
    }

    pub fn http_client(&self) -> Result<reqwest::blocking::Client, SessionError> {
        Ok(reqwest::blocking::Client::builder()
            .user_agent(self.user_agent())
            .build()?)
    }
}

/// Put the tool first in the session's identification, keeping the
/// SDK's own name and version as the trailing fragment
pub fn add_tool_user_agent(session: &mut CloudSession) {
    let suffix = format!("{}/{}", session.user_agent_name, session.user_agent_version);
    session.user_agent_name = TOOL_USER_AGENT_NAME.to_string();
    session.user_agent_version = TOOL_VERSION.to_string();
    session.user_agent_extra = Some(suffix);
}

/// Attach the request-body redaction filter to the wire channel
pub fn inject_large_request_body_filter(session: &mut CloudSession) {
    session
        .set_debug_logger()
        .add_filter(Box::new(LargeRequestBodyFilter));
}

/// Build a session for `profile`, tagged with the tool's identity.
/// With `debug`, wire-level logging is enabled with bodies redacted.
pub fn create_cloud_session(
    profile: Option<String>,
    debug: bool,
) -> Result<CloudSession, SessionError> {
    let session = CloudSession::new(profile)?;
    Ok(customize_session(session, debug))
}

/// Identity and diagnostics customization shared by every session
pub fn customize_session(mut session: CloudSession, debug: bool) -> CloudSession {
    add_tool_user_agent(&mut session);
    if debug {
        inject_large_request_body_filter(&mut session);
    }

    let debug_enabled = debug;
    debug!(
        profile = ?session.profile(),
        region = session.region(),
        user_agent = %session.user_agent(),
        debug = debug_enabled,
        "Created cloud session"
    );

    session
}

#[cfg(test)]
mod tests {
    include!("session.test.rs");
}
