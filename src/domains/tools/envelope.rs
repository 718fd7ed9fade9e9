//! Response envelope formatting and error flattening.
//!
//! Every tool call resolves to a normal envelope with exactly one text
//! content item. Failures are flattened into the text rather than raised as
//! protocol-level errors: the calling LLM distinguishes outcomes by the
//! shape of `text`, not by a separate error channel. Callers that need the
//! structured payload parse `text` as JSON themselves.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

use crate::core::client::{ApiOutcome, ClientError};

use super::args::ArgError;

/// Sentinel text for a null/absent payload.
pub const NO_DATA: &str = "No data returned";

/// Sentinel text for an HTTP 204 outcome.
pub const NO_CONTENT_SENTINEL: &str = "No data returned: Status 204";

/// Normalize any JSON value into envelope text.
///
/// Strings pass through verbatim (they are either pre-serialized payloads or
/// diagnostic messages), null maps to the fixed sentinel, objects and arrays
/// serialize to JSON, and remaining primitives use their string form. This
/// function cannot fail.
pub fn format_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => NO_DATA.to_string(),
        other => other.to_string(),
    }
}

/// Wrap text in the protocol envelope: one content item of type text.
pub fn envelope(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Sentinel text for a non-2xx upstream response.
pub fn fetch_error_text(status: u16, message: Option<&str>) -> String {
    match message {
        Some(m) => format!("Error fetching data from HubSpot: Status {status} - {m}"),
        None => format!("Error fetching data from HubSpot: Status {status}"),
    }
}

/// Flatten a classified API outcome into the envelope.
pub fn respond(outcome: Result<ApiOutcome, ClientError>) -> CallToolResult {
    match outcome {
        Ok(ApiOutcome::Success(value)) => envelope(format_text(&value)),
        Ok(ApiOutcome::NoContent) => envelope(NO_CONTENT_SENTINEL),
        Ok(ApiOutcome::Error { status, message }) => envelope(format!(
            "Error performing request: {}",
            fetch_error_text(status, message.as_deref())
        )),
        Err(e) => envelope(format!("Error performing request: {e}")),
    }
}

/// Envelope for a pre-handler argument validation failure.
pub fn invalid_args(err: ArgError) -> CallToolResult {
    envelope(format!("Invalid arguments: {err}"))
}
