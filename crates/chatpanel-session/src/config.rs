//! Credential provider configuration.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub workflow_id: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Log request diagnostics at debug level.
    pub verbose: bool,
}

impl ProviderConfig {
    pub fn new(endpoint: impl Into<String>, workflow_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            workflow_id: workflow_id.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            verbose: false,
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
