//! Wire-level diagnostic records and the filters applied to them

use std::fmt;

/// `tracing` target for wire-level diagnostics
pub const WIRE_TARGET: &str = "cumulus_lib::cloud::wire";

/// Message prefix of request diagnostics
pub const MAKING_REQUEST_PREFIX: &str = "Making request";

/// Replacement for request bodies too large to log
pub const OMITTED_BODY_PLACEHOLDER: &str = "(... omitted from logs due to size ...)";

/// Operations whose request carries the base64 deployment package
pub const LARGE_BODY_OPERATIONS: [&str; 2] = ["UpdateFunctionCode", "CreateFunction"];

/// One diagnostic emitted on the wire channel, before formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub target: &'static str,
    /// Template with `{}` placeholders
    pub message: String,
    /// Positional arguments; for request records the first names the operation
    pub args: Vec<String>,
}

impl DiagnosticRecord {
    pub fn new(message: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            target: WIRE_TARGET,
            message: message.into(),
            args,
        }
    }

    /// Substitute `{}` placeholders with the arguments in order
    pub fn render(&self) -> String {
        let mut rendered = String::with_capacity(self.message.len());
        let mut args = self.args.iter();
        let mut pieces = self.message.split("{}").peekable();

        while let Some(piece) = pieces.next() {
            rendered.push_str(piece);
            if pieces.peek().is_some() {
                match args.next() {
                    Some(arg) => rendered.push_str(arg),
                    None => rendered.push_str("{}"),
                }
            }
        }

        rendered
    }
}

impl fmt::Display for DiagnosticRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Inspects, and may rewrite, each diagnostic record.
/// Returning `false` drops the record.
pub trait RecordFilter: Send + Sync {
    fn filter(&self, record: &mut DiagnosticRecord) -> bool;
}

/// Keeps deployment packages out of debug logs.
///
/// Never drops a record; only rewrites the body argument of
/// function-code uploads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargeRequestBodyFilter;

impl RecordFilter for LargeRequestBodyFilter {
    fn filter(&self, record: &mut DiagnosticRecord) -> bool {
        if record.message.starts_with(MAKING_REQUEST_PREFIX) {
            let is_upload = record
                .args
                .first()
                .is_some_and(|op| LARGE_BODY_OPERATIONS.contains(&op.as_str()));

            if is_upload {
                if let Some(body) = record.args.last_mut() {
                    *body = OMITTED_BODY_PLACEHOLDER.to_string();
                }
            }
        }
        true
    }
}

/// The SDK's wire-level logging channel
#[derive(Default)]
pub struct WireLogger {
    filters: Vec<Box<dyn RecordFilter>>,
}

impl fmt::Debug for WireLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WireLogger")
            .field("filters", &self.filters.len())
            .finish()
    }
}

impl WireLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_filter(&mut self, filter: Box<dyn RecordFilter>) {
        self.filters.push(filter);
    }

    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Run every filter in registration order; `None` if one dropped the record
    pub fn process(&self, mut record: DiagnosticRecord) -> Option<DiagnosticRecord> {
        for filter in &self.filters {
            if !filter.filter(&mut record) {
                return None;
            }
        }
        Some(record)
    }

    /// Filter and emit a record at debug level
    pub fn log(&self, record: DiagnosticRecord) {
        if let Some(record) = self.process(record) {
            tracing::debug!(target: WIRE_TARGET, "{}", record.render());
        }
    }
}

#[cfg(test)]
mod tests {
    include!("diagnostics.test.rs");
}
