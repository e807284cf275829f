//! Cloud SDK session layer
//!
//! Sessions carry the tool's identification on every request and, when
//! debugging, a wire-level logger whose records pass through
//! [`diagnostics::LargeRequestBodyFilter`].

pub mod client;
pub mod diagnostics;
pub mod session;

pub use client::CloudClient;
pub use diagnostics::{DiagnosticRecord, LargeRequestBodyFilter, RecordFilter, WireLogger};
pub use session::{CloudSession, SessionError, create_cloud_session};
