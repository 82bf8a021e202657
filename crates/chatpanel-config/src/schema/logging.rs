//! Logging configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` directive when neither `RUST_LOG` nor `--log-level` is set.
    pub level: String,
    /// Emit controller diagnostics (session requests, tool routing, render state).
    pub verbose: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "chatpanel=info".into(),
            verbose: false,
        }
    }
}
