//! Thin request-preparation layer over a [`CloudSession`]

use crate::cloud::diagnostics::DiagnosticRecord;
use crate::cloud::session::{CloudSession, SessionError};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::USER_AGENT;
use serde_json::Value;

/// Header naming the API operation being invoked
pub const TARGET_HEADER: &str = "X-Amz-Target";

/// Cloud API client bound to one session
pub struct CloudClient {
    session: CloudSession,
    http: Client,
}

impl CloudClient {
    pub fn new(session: CloudSession) -> Result<Self, SessionError> {
        let http = session.http_client()?;
        Ok(Self { session, http })
    }

    pub fn session(&self) -> &CloudSession {
        &self.session
    }

    /// Build the request for `operation` on `service`. Sending, and any
    /// retrying, is up to the caller.
    pub fn prepare_request(&self, service: &str, operation: &str, params: &Value) -> RequestBuilder {
        if let Some(wire) = self.session.wire_logger() {
            wire.log(DiagnosticRecord::new(
                "Making request for {} with params: {}",
                vec![operation.to_string(), params.to_string()],
            ));
        }

        self.http
            .post(self.session.endpoint_url(service))
            .header(USER_AGENT, self.session.user_agent())
            .header(TARGET_HEADER, operation)
            .json(params)
    }
}

#[cfg(test)]
mod tests {
    include!("client.test.rs");
}
