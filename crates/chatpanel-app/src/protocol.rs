//! JSON-lines protocol spoken on stdin/stdout.

use chatpanel_common::ColorScheme;
use chatpanel_core::{FactAction, PanelStatus, ToolResult, WidgetEvent, WidgetOptions};
use serde::Serialize;
use serde_json::Value;

/// One decoded stdin line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `{"event":"reset"}`: the user pressed retry / new session.
    Reset,
    /// `{"event":"status"}`: print the current status snapshot.
    Status,
    Widget(WidgetEvent),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(line).map_err(|e| format!("invalid JSON: {e}"))?;
    match value.get("event").and_then(Value::as_str) {
        Some("reset") => return Ok(Some(Command::Reset)),
        Some("status") => return Ok(Some(Command::Status)),
        Some(_) => {}
        None => return Err("missing \"event\" field".to_string()),
    }

    serde_json::from_value(value)
        .map(|event| Some(Command::Widget(event)))
        .map_err(|e| format!("unrecognized event: {e}"))
}

/// One stdout line.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Output<'a> {
    ToolResult { tool: &'a str, result: ToolResult },
    Status { status: &'a PanelStatus },
    Options { options: &'a WidgetOptions },
    Fact { action: &'a FactAction },
    ResponseEnd,
    Theme { scheme: ColorScheme },
    InputError { message: &'a str },
}

/// Write one output record as a JSON line.
pub fn emit(output: &Output<'_>) {
    match serde_json::to_string(output) {
        Ok(line) => println!("{line}"),
        Err(e) => tracing::error!("Failed to serialize output: {e}"),
    }
}
