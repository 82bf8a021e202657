//! Client tool invocations from the widget.
//!
//! The widget asks the host to act through named tools with loosely typed
//! parameters. Invocations are parsed into a closed set of [`ToolCall`]s and
//! routed by the [`ToolInvocationDispatcher`].

mod dispatcher;
mod invocation;

#[cfg(test)]
mod tests;

pub use dispatcher::{Dispatch, ToolEffect, ToolInvocationDispatcher};
pub use invocation::{
    coerce_to_string, normalize_fact_text, ClientToolInvocation, FactRecord, ToolCall, ToolResult,
};
