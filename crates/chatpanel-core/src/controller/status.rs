//! Derived readiness and the user-facing status snapshot.

use chatpanel_common::PanelError;
use serde::Serialize;

use crate::epoch::Epoch;
use crate::errors::ErrorKind;

/// Message shown when the workflow id was never configured.
pub const UNCONFIGURED_MESSAGE: &str =
    "Set the workflow id (session.workflow_id or CHATPANEL_WORKFLOW_ID) and restart the panel.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    /// No usable workflow id. Terminal until redeployed.
    Unconfigured,
    /// No credential yet and nothing blocking.
    AwaitingSession,
    Ready,
    /// A blocking error is present.
    Blocked,
}

/// What the UI should show right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelStatus {
    pub readiness: Readiness,
    pub epoch: Epoch,
    pub message: Option<String>,
    pub error_kind: Option<ErrorKind>,
    pub retry_available: bool,
    /// Widget accepts input.
    pub interactive: bool,
    pub show_loading: bool,
}

impl PanelStatus {
    /// The surfaced error as a typed value.
    pub fn error(&self) -> Option<PanelError> {
        let message = self.message.clone()?;
        Some(match self.error_kind? {
            ErrorKind::Configuration => PanelError::Configuration(message),
            ErrorKind::Transport => PanelError::TransportLoad(message),
            ErrorKind::Session => PanelError::SessionCreation(message),
            ErrorKind::Integration => PanelError::Integration(message),
        })
    }
}
