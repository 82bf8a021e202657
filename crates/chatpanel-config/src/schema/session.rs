//! Session-creation configuration.

use serde::{Deserialize, Serialize};

/// Where and how session credentials are requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Remote assistant workflow to create sessions against.
    /// Empty or placeholder values leave the panel unconfigured.
    pub workflow_id: String,
    /// Session-creation endpoint (http or https URL).
    pub endpoint: String,
    /// Connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds (valid range: 1-300).
    pub request_timeout_secs: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            workflow_id: String::new(),
            endpoint: "http://127.0.0.1:8000/api/create-session".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}
