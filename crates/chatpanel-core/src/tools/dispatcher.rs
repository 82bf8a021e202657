//! Routing validated tool calls to host effects.

use std::collections::HashSet;

use chatpanel_common::ColorScheme;
use tracing::debug;

use crate::host::FactAction;

use super::invocation::{normalize_fact_text, ClientToolInvocation, ToolCall, ToolResult};

/// Host effect a dispatch asks for. Executed by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolEffect {
    None,
    ThemeRequest(ColorScheme),
    /// Forward to the widget-action sink without awaiting it.
    SaveFact(FactAction),
}

/// Outcome of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub result: ToolResult,
    pub effect: ToolEffect,
}

impl Dispatch {
    fn ok(effect: ToolEffect) -> Self {
        Self {
            result: ToolResult::ok(),
            effect,
        }
    }

    fn failed() -> Self {
        Self {
            result: ToolResult::failed(),
            effect: ToolEffect::None,
        }
    }
}

/// Validates tool calls and enforces at-most-once fact recording per thread.
#[derive(Debug, Default)]
pub struct ToolInvocationDispatcher {
    processed: HashSet<String>,
    verbose: bool,
}

impl ToolInvocationDispatcher {
    pub fn new(verbose: bool) -> Self {
        Self {
            processed: HashSet::new(),
            verbose,
        }
    }

    /// Validate `invocation`, update the processed-fact set, and return the
    /// reply plus the effect to perform. Never fails; bad input is a
    /// `{ success: false }` reply.
    pub fn dispatch(&mut self, invocation: &ClientToolInvocation) -> Dispatch {
        match ToolCall::parse(invocation) {
            ToolCall::SwitchTheme(scheme) => {
                if self.verbose {
                    debug!(scheme = %scheme, "switch_theme");
                }
                Dispatch::ok(ToolEffect::ThemeRequest(scheme))
            }
            ToolCall::RecordFact(record) => {
                // An empty id cannot be deduplicated, so nothing is recorded.
                if record.fact_id.is_empty() {
                    debug!("record_fact without fact_id ignored");
                    return Dispatch::ok(ToolEffect::None);
                }
                if !self.processed.insert(record.fact_id.clone()) {
                    debug!(fact_id = %record.fact_id, "record_fact replay ignored");
                    return Dispatch::ok(ToolEffect::None);
                }
                let text = normalize_fact_text(&record.fact_text);
                if self.verbose {
                    debug!(fact_id = %record.fact_id, len = text.len(), "record_fact");
                }
                Dispatch::ok(ToolEffect::SaveFact(FactAction::save(record.fact_id, text)))
            }
            ToolCall::Rejected { tool, reason } => {
                debug!(tool, reason = %reason, "tool invocation rejected");
                Dispatch::failed()
            }
            ToolCall::Unknown(name) => {
                debug!(tool = %name, "unknown tool invocation");
                Dispatch::failed()
            }
        }
    }

    pub fn is_processed(&self, fact_id: &str) -> bool {
        self.processed.contains(fact_id)
    }

    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    /// Forget processed facts. Only the controller calls this, together with
    /// clearing the error state.
    pub(crate) fn clear_processed(&mut self) {
        self.processed.clear();
    }
}
