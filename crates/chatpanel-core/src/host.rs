//! Capabilities the host application provides to the panel.

use async_trait::async_trait;
use chatpanel_common::{ColorScheme, HostError};
use serde::Serialize;

/// Kind of widget action forwarded to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FactActionKind {
    Save,
}

/// A fact the assistant asked the host to record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactAction {
    #[serde(rename = "type")]
    pub kind: FactActionKind,
    pub fact_id: String,
    pub fact_text: String,
}

impl FactAction {
    pub fn save(fact_id: impl Into<String>, fact_text: impl Into<String>) -> Self {
        Self {
            kind: FactActionKind::Save,
            fact_id: fact_id.into(),
            fact_text: fact_text.into(),
        }
    }
}

/// The host side of the panel: an action sink, a theme-request sink and a
/// response-lifecycle sink.
///
/// `on_widget_action` is spawned and never awaited by the panel, so the
/// returned future must be `Send`.
#[async_trait]
pub trait PanelHost: Send + Sync {
    /// Persist or otherwise act on a recorded fact.
    async fn on_widget_action(&self, action: FactAction) -> Result<(), HostError>;

    /// The widget finished streaming a response.
    fn on_response_end(&self) {}

    /// The assistant asked for a different color scheme.
    fn on_theme_request(&self, scheme: ColorScheme);
}
