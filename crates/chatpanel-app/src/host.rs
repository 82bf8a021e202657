//! The command-line host: keeps the color-scheme preference and reports
//! panel effects back to the main loop over a channel.

use std::sync::Mutex;

use async_trait::async_trait;
use chatpanel_common::{ColorScheme, HostError};
use chatpanel_core::{FactAction, PanelHost};
use tokio::sync::mpsc;

/// Effects the host hands back to the main loop for output.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    FactSaved(FactAction),
    ResponseEnded,
    ThemeChanged(ColorScheme),
}

pub struct LineHost {
    scheme: Mutex<ColorScheme>,
    events: mpsc::UnboundedSender<HostEvent>,
}

impl LineHost {
    pub fn new(scheme: ColorScheme) -> (Self, mpsc::UnboundedReceiver<HostEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let host = Self {
            scheme: Mutex::new(scheme),
            events: tx,
        };
        (host, rx)
    }

    /// Current color-scheme preference.
    pub fn scheme(&self) -> ColorScheme {
        self.scheme.lock().map(|s| *s).unwrap_or_default()
    }

    fn send(&self, event: HostEvent) -> Result<(), HostError> {
        self.events
            .send(event)
            .map_err(|_| HostError::Unavailable("host output loop has stopped".into()))
    }
}

#[async_trait]
impl PanelHost for LineHost {
    async fn on_widget_action(&self, action: FactAction) -> Result<(), HostError> {
        tracing::info!(fact_id = %action.fact_id, "Recording fact");
        self.send(HostEvent::FactSaved(action))
    }

    fn on_response_end(&self) {
        if self.send(HostEvent::ResponseEnded).is_err() {
            tracing::debug!("Response end dropped: output loop gone");
        }
    }

    fn on_theme_request(&self, scheme: ColorScheme) {
        match self.scheme.lock() {
            Ok(mut current) => *current = scheme,
            Err(e) => {
                tracing::warn!("Theme preference lock poisoned: {e}");
                return;
            }
        }
        tracing::info!(scheme = %scheme, "Theme preference changed");
        if self.send(HostEvent::ThemeChanged(scheme)).is_err() {
            tracing::debug!("Theme change dropped: output loop gone");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_request_updates_preference() {
        let (host, mut rx) = LineHost::new(ColorScheme::Light);
        host.on_theme_request(ColorScheme::Dark);

        assert_eq!(host.scheme(), ColorScheme::Dark);
        assert_eq!(rx.try_recv().unwrap(), HostEvent::ThemeChanged(ColorScheme::Dark));
    }

    #[tokio::test]
    async fn widget_action_is_reported() {
        let (host, mut rx) = LineHost::new(ColorScheme::Light);
        host.on_widget_action(FactAction::save("f1", "likes tea"))
            .await
            .unwrap();

        assert_eq!(
            rx.recv().await,
            Some(HostEvent::FactSaved(FactAction::save("f1", "likes tea")))
        );
    }

    #[tokio::test]
    async fn closed_output_is_a_host_error() {
        let (host, rx) = LineHost::new(ColorScheme::Light);
        drop(rx);

        let err = host
            .on_widget_action(FactAction::save("f1", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, HostError::Unavailable(_)));
    }
}
