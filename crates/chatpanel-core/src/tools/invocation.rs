//! Parsing raw invocations into typed tool calls.

use chatpanel_common::ColorScheme;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

pub const SWITCH_THEME: &str = "switch_theme";
pub const RECORD_FACT: &str = "record_fact";

/// A tool call exactly as the widget emits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientToolInvocation {
    pub name: String,
    /// Anything other than an object decodes as no params, so a malformed
    /// call still reaches the dispatcher and gets a structured reply.
    #[serde(default, deserialize_with = "params_or_empty")]
    pub params: Map<String, Value>,
}

impl ClientToolInvocation {
    pub fn new(name: impl Into<String>, params: Value) -> Self {
        Self {
            name: name.into(),
            params: object_or_empty(params),
        }
    }
}

fn object_or_empty(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn params_or_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Map<String, Value>, D::Error> {
    Value::deserialize(deserializer).map(object_or_empty)
}

/// Structured reply returned to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,
}

impl ToolResult {
    pub fn ok() -> Self {
        Self { success: true }
    }

    pub fn failed() -> Self {
        Self { success: false }
    }
}

/// `record_fact` parameters after coercion. `fact_text` is not normalized yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactRecord {
    pub fact_id: String,
    pub fact_text: String,
}

/// Closed set of tool calls the panel understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    SwitchTheme(ColorScheme),
    RecordFact(FactRecord),
    /// A known tool whose parameters failed validation.
    Rejected { tool: &'static str, reason: String },
    Unknown(String),
}

impl ToolCall {
    /// Validate an invocation. Unknown parameter fields are ignored.
    pub fn parse(invocation: &ClientToolInvocation) -> Self {
        match invocation.name.as_str() {
            SWITCH_THEME => match invocation.params.get("theme") {
                Some(Value::String(name)) => match ColorScheme::from_name(name) {
                    Some(scheme) => ToolCall::SwitchTheme(scheme),
                    None => ToolCall::Rejected {
                        tool: SWITCH_THEME,
                        reason: format!("unsupported theme {name:?}"),
                    },
                },
                Some(other) => ToolCall::Rejected {
                    tool: SWITCH_THEME,
                    reason: format!("theme must be a string, got {other}"),
                },
                None => ToolCall::Rejected {
                    tool: SWITCH_THEME,
                    reason: "missing theme".into(),
                },
            },
            RECORD_FACT => ToolCall::RecordFact(FactRecord {
                fact_id: coerce_to_string(invocation.params.get("fact_id")),
                fact_text: coerce_to_string(invocation.params.get("fact_text")),
            }),
            other => ToolCall::Unknown(other.to_string()),
        }
    }
}

/// Loss-tolerant stringification with JavaScript `String(x ?? '')` results,
/// so ids compare equal to what a browser host would produce.
///
/// Absent and `null` become `""`. Integral floats drop the fraction (`1.0`
/// is `"1"`), arrays join their elements with `,`, objects render as
/// `[object Object]`.
pub fn coerce_to_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_text(n),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| coerce_to_string(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

/// Integers below 2^53 print without a fraction, as in JS.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
            // -0.0 prints as "0"
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

/// Collapse every whitespace run to one space and trim both ends.
pub fn normalize_fact_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
