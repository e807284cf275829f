use crate::cloud::CloudClient;
use reqwest::blocking::RequestBuilder;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogRetrieverError {
    #[error("Invalid function ARN '{arn}': expected arn:<partition>:lambda:<region>:<account>:function:<name>")]
    InvalidArn { arn: String },
}

/// Reads a function's log events through a cloud client
pub struct LogRetriever {
    client: CloudClient,
    log_group_name: String,
}

impl LogRetriever {
    pub fn new(client: CloudClient, log_group_name: impl Into<String>) -> Self {
        Self {
            client,
            log_group_name: log_group_name.into(),
        }
    }

    /// Log group of the function named by `arn`
    pub fn create_from_arn(client: CloudClient, arn: &str) -> Result<Self, LogRetrieverError> {
        let parts: Vec<&str> = arn.split(':').collect();
        let function_name = match parts.as_slice() {
            ["arn", _, _, _, _, _, name, ..] if !name.is_empty() => *name,
            _ => {
                return Err(LogRetrieverError::InvalidArn {
                    arn: arn.to_string(),
                });
            }
        };

        Ok(Self::new(client, format!("/aws/lambda/{function_name}")))
    }

    pub fn log_group_name(&self) -> &str {
        &self.log_group_name
    }

    pub fn client(&self) -> &CloudClient {
        &self.client
    }

    /// One page of interleaved events, continuing from `next_token`
    pub fn filter_events_request(&self, next_token: Option<&str>) -> RequestBuilder {
        let mut params = json!({
            "logGroupName": self.log_group_name,
            "interleaved": true,
        });
        if let Some(token) = next_token {
            params["nextToken"] = json!(token);
        }

        self.client.prepare_request("logs", "FilterLogEvents", &params)
    }
}

#[cfg(test)]
mod tests {
    include!("logs.test.rs");
}
