//! Inbound widget callbacks as a JSON-decodable event.
//!
//! A transport that cannot call the controller directly (a webview bridge,
//! a line protocol) posts `{"event": "<kind>", ...}` messages instead.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tools::ClientToolInvocation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WidgetEvent {
    ClientTool(ClientToolInvocation),
    ResponseStart,
    ResponseEnd,
    ThreadChange,
    Error {
        #[serde(default)]
        error: Value,
    },
    /// The widget runtime failed to load.
    TransportError { message: String },
}

impl WidgetEvent {
    /// Parse an event from a raw JSON string.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Best-effort human-readable message for an error payload of unknown shape.
pub fn describe_error(error: &Value) -> String {
    match error {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::Object(obj) => obj
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .map(String::from)
            .unwrap_or_else(|| error.to_string()),
        Value::Null => "Unknown widget error".to_string(),
        other => other.to_string(),
    }
}
