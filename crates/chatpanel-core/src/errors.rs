//! Error aggregation across the panel's independent failure sources.
//!
//! Three sources can fail on their own: the widget transport (script/load),
//! session creation, and the widget's runtime integration. Only one message
//! is ever surfaced, chosen by precedence transport > session > integration.

use serde::Serialize;

/// Which failure source a surfaced error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Configuration,
    Transport,
    Session,
    Integration,
}

/// The four independent error fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorState {
    pub transport: Option<String>,
    pub session: Option<String>,
    pub integration: Option<String>,
    pub retryable: bool,
}

/// A shallow update of [`ErrorState`].
///
/// `None` leaves a field untouched; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorPatch {
    pub transport: Option<Option<String>>,
    pub session: Option<Option<String>>,
    pub integration: Option<Option<String>>,
    pub retryable: Option<bool>,
}

impl ErrorPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transport(mut self, message: Option<String>) -> Self {
        self.transport = Some(message);
        self
    }

    pub fn session(mut self, message: Option<String>) -> Self {
        self.session = Some(message);
        self
    }

    pub fn integration(mut self, message: Option<String>) -> Self {
        self.integration = Some(message);
        self
    }

    pub fn retryable(mut self, retryable: bool) -> Self {
        self.retryable = Some(retryable);
        self
    }

    /// A new response started: stale integration errors no longer apply.
    pub fn response_started() -> Self {
        Self::new().integration(None).retryable(false)
    }

    /// Credential fetch failed; a reset may fix it.
    pub fn session_failed(message: impl Into<String>) -> Self {
        Self::new().session(Some(message.into())).retryable(true)
    }

    /// The widget runtime could not load. `retryable` stays as it was.
    pub fn transport_failed(message: impl Into<String>) -> Self {
        Self::new().transport(Some(message.into()))
    }

    /// The widget reported a runtime error.
    pub fn integration_failed(message: impl Into<String>) -> Self {
        Self::new().integration(Some(message.into()))
    }
}

/// Holds the current [`ErrorState`] and derives the surfaced error.
#[derive(Debug, Clone, Default)]
pub struct ErrorAggregator {
    state: ErrorState,
}

impl ErrorAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ErrorState {
        &self.state
    }

    /// Merge only the fields present in `patch`.
    pub fn patch(&mut self, patch: ErrorPatch) {
        if let Some(transport) = patch.transport {
            self.state.transport = transport;
        }
        if let Some(session) = patch.session {
            self.state.session = session;
        }
        if let Some(integration) = patch.integration {
            self.state.integration = integration;
        }
        if let Some(retryable) = patch.retryable {
            self.state.retryable = retryable;
        }
    }

    /// Return every field to empty/false.
    pub fn reset(&mut self) {
        self.state = ErrorState::default();
    }

    /// `session ?? integration`.
    pub fn active(&self) -> Option<&str> {
        self.state
            .session
            .as_deref()
            .or(self.state.integration.as_deref())
    }

    /// `transport ?? active`.
    pub fn blocking(&self) -> Option<&str> {
        self.state.transport.as_deref().or_else(|| self.active())
    }

    /// Source of the blocking error, if any.
    pub fn kind(&self) -> Option<ErrorKind> {
        if self.state.transport.is_some() {
            Some(ErrorKind::Transport)
        } else if self.state.session.is_some() {
            Some(ErrorKind::Session)
        } else if self.state.integration.is_some() {
            Some(ErrorKind::Integration)
        } else {
            None
        }
    }

    pub fn retryable(&self) -> bool {
        self.state.retryable
    }

    pub fn is_clear(&self) -> bool {
        self.blocking().is_none()
    }
}
