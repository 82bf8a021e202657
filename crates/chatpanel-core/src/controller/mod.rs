//! The panel controller: session lifecycle, tool routing, error display.
//!
//! All mutation happens on the caller's event loop through `&mut self`.
//! Async work (credential fetches, fact forwarding) is spawned onto the
//! current tokio runtime and reports back as [`Completion`]s over a channel;
//! the loop feeds them to [`PanelController::apply_completion`], which drops
//! anything started under an older [`Epoch`].

mod completion;
mod status;


use std::sync::Arc;

use chatpanel_config::{is_workflow_configured, PanelConfig};
use chatpanel_common::ColorScheme;
use chatpanel_session::{CredentialSource, SessionCredential};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::epoch::Epoch;
use crate::errors::{ErrorAggregator, ErrorKind, ErrorPatch};
use crate::events::{describe_error, WidgetEvent};
use crate::host::{FactAction, PanelHost};
use crate::tools::{ClientToolInvocation, Dispatch, ToolEffect, ToolInvocationDispatcher, ToolResult};
use crate::widget::WidgetOptions;

pub use completion::Completion;
pub use status::{PanelStatus, Readiness, UNCONFIGURED_MESSAGE};

/// Constructor options.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelOptions {
    /// Log controller diagnostics at debug level.
    pub verbose: bool,
}

pub struct PanelController {
    config: PanelConfig,
    configured: bool,
    source: Arc<dyn CredentialSource>,
    host: Arc<dyn PanelHost>,
    dispatcher: ToolInvocationDispatcher,
    errors: ErrorAggregator,
    epoch: Epoch,
    credential: Option<SessionCredential>,
    /// Credential of the session replaced by the last reset.
    retired: Option<SessionCredential>,
    /// Epoch of the credential fetch in flight, if any.
    pending: Option<Epoch>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    verbose: bool,
}

impl PanelController {
    pub fn new(
        config: PanelConfig,
        source: Arc<dyn CredentialSource>,
        host: Arc<dyn PanelHost>,
        options: PanelOptions,
    ) -> Self {
        let configured = is_workflow_configured(&config.session.workflow_id);
        if !configured {
            warn!("Workflow id is not configured; the panel will stay unconfigured");
        }

        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            config,
            configured,
            source,
            host,
            dispatcher: ToolInvocationDispatcher::new(options.verbose),
            errors: ErrorAggregator::new(),
            epoch: Epoch::default(),
            credential: None,
            retired: None,
            pending: None,
            completions_tx,
            completions_rx,
            verbose: options.verbose,
        }
    }

    // -- Accessors --

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Credential for the current epoch, once issued.
    pub fn credential(&self) -> Option<&SessionCredential> {
        self.credential.as_ref()
    }

    pub fn errors(&self) -> &ErrorAggregator {
        &self.errors
    }

    pub fn dispatcher(&self) -> &ToolInvocationDispatcher {
        &self.dispatcher
    }

    pub fn is_fact_processed(&self, fact_id: &str) -> bool {
        self.dispatcher.is_processed(fact_id)
    }

    pub fn is_fetch_pending(&self) -> bool {
        self.pending == Some(self.epoch)
    }

    pub fn widget_options(&self, scheme: ColorScheme) -> WidgetOptions {
        WidgetOptions::build(&self.config, scheme)
    }

    // -- Session lifecycle --

    /// Start a credential fetch for the current epoch.
    ///
    /// Does nothing when unconfigured or when a fetch for this epoch is
    /// already in flight. The current (or last retired) credential is passed
    /// along as the previous secret.
    pub fn request_session(&mut self) {
        if !self.configured {
            debug!("Session request skipped: workflow not configured");
            return;
        }
        if self.is_fetch_pending() {
            debug!(epoch = %self.epoch, "Session request already in flight");
            return;
        }

        let handle = match Handle::try_current() {
            Ok(h) => h,
            Err(e) => {
                error!("Cannot request session outside an async runtime: {e}");
                self.errors
                    .patch(ErrorPatch::session_failed(format!("no async runtime: {e}")));
                return;
            }
        };

        let epoch = self.epoch;
        self.pending = Some(epoch);

        let previous = self
            .credential
            .as_ref()
            .or(self.retired.as_ref())
            .map(|c| c.expose().to_string());
        if self.verbose {
            debug!(
                epoch = %epoch,
                previous_secret_present = previous.is_some(),
                "Requesting session credential"
            );
        }

        let source = Arc::clone(&self.source);
        let tx = self.completions_tx.clone();
        handle.spawn(async move {
            let result = source.request_credential(previous.as_deref()).await;
            let _ = tx.send(Completion::Credential { epoch, result });
        });
    }

    /// Restart the session.
    ///
    /// Clears processed facts and every error, retires the credential and
    /// advances the epoch as one step, then starts a fetch for the new
    /// epoch. Work still running for the old epoch is left alone; its
    /// completion is discarded on arrival.
    pub fn reset(&mut self) {
        self.clear_conversation_state();
        if let Some(cred) = self.credential.take() {
            self.retired = Some(cred);
        }
        self.pending = None;
        self.epoch = self.epoch.next();
        info!(epoch = %self.epoch, "Panel session reset");

        self.request_session();
    }

    /// Processed facts and errors belong to the same conversation and are
    /// only ever cleared together.
    fn clear_conversation_state(&mut self) {
        self.dispatcher.clear_processed();
        self.errors.reset();
    }

    // -- Widget callbacks --

    pub fn on_client_tool(&mut self, invocation: &ClientToolInvocation) -> ToolResult {
        let Dispatch { result, effect } = self.dispatcher.dispatch(invocation);
        match effect {
            ToolEffect::None => {}
            ToolEffect::ThemeRequest(scheme) => self.host.on_theme_request(scheme),
            ToolEffect::SaveFact(action) => self.forward_fact(action),
        }
        result
    }

    pub fn on_response_start(&mut self) {
        self.errors.patch(ErrorPatch::response_started());
    }

    pub fn on_response_end(&mut self) {
        self.host.on_response_end();
    }

    /// A new conversation thread replaces the old one.
    ///
    /// Transport and session failures outlive the thread, so they still take
    /// a full [`reset`](Self::reset). Otherwise facts and errors are cleared
    /// under the current epoch and a missing credential is requested again.
    pub fn on_thread_change(&mut self) {
        if matches!(
            self.errors.kind(),
            Some(ErrorKind::Transport | ErrorKind::Session)
        ) {
            info!(epoch = %self.epoch, "Thread changed while blocked; resetting session");
            self.reset();
            return;
        }

        debug!(epoch = %self.epoch, "Thread changed");
        self.clear_conversation_state();
        if self.credential.is_none() {
            self.request_session();
        }
    }

    /// Runtime error reported by the widget.
    pub fn on_error(&mut self, error: &serde_json::Value) {
        let message = describe_error(error);
        warn!(error = %message, "Widget reported an error");
        self.errors.patch(ErrorPatch::integration_failed(message));
    }

    /// The widget runtime failed to load.
    pub fn on_transport_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!(error = %message, "Widget transport failed to load");
        self.errors.patch(ErrorPatch::transport_failed(message));
    }

    /// Route a decoded widget event. Returns the tool reply for
    /// `client_tool` events.
    pub fn handle_event(&mut self, event: WidgetEvent) -> Option<ToolResult> {
        match event {
            WidgetEvent::ClientTool(invocation) => return Some(self.on_client_tool(&invocation)),
            WidgetEvent::ResponseStart => self.on_response_start(),
            WidgetEvent::ResponseEnd => self.on_response_end(),
            WidgetEvent::ThreadChange => self.on_thread_change(),
            WidgetEvent::Error { error } => self.on_error(&error),
            WidgetEvent::TransportError { message } => self.on_transport_error(message),
        }
        None
    }

    fn forward_fact(&mut self, action: FactAction) {
        let handle = match Handle::try_current() {
            Ok(h) => h,
            Err(e) => {
                error!(fact_id = %action.fact_id, "Cannot forward fact outside an async runtime: {e}");
                return;
            }
        };

        let epoch = self.epoch;
        let host = Arc::clone(&self.host);
        let tx = self.completions_tx.clone();
        handle.spawn(async move {
            let fact_id = action.fact_id.clone();
            let result = host.on_widget_action(action).await;
            let _ = tx.send(Completion::FactForwarded {
                epoch,
                fact_id,
                result,
            });
        });
    }

    // -- Completions --

    /// Wait for the next completion. Never returns `None` while the
    /// controller is alive.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.completions_rx.recv().await
    }

    /// Apply every completion that has already arrived (non-blocking).
    /// Returns how many were applied rather than discarded.
    pub fn poll_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            if self.apply_completion(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// Apply one completion. Results from an older epoch are discarded and
    /// `false` is returned.
    pub fn apply_completion(&mut self, completion: Completion) -> bool {
        if completion.epoch() != self.epoch {
            debug!(
                started = %completion.epoch(),
                current = %self.epoch,
                "Discarding stale completion"
            );
            return false;
        }

        match completion {
            Completion::Credential { epoch, result } => {
                if self.pending == Some(epoch) {
                    self.pending = None;
                }
                match result {
                    Ok(credential) => {
                        info!(epoch = %epoch, "Session credential ready");
                        self.credential = Some(credential);
                    }
                    Err(e) => {
                        warn!(epoch = %epoch, error = %e, "Session credential request failed");
                        self.errors.patch(ErrorPatch::session_failed(e.to_string()));
                    }
                }
            }
            Completion::FactForwarded {
                fact_id, result, ..
            } => match result {
                Ok(()) => debug!(fact_id = %fact_id, "Fact forwarded"),
                Err(e) => warn!(fact_id = %fact_id, error = %e, "Host failed to record fact"),
            },
        }
        true
    }

    // -- Status --

    pub fn readiness(&self) -> Readiness {
        if !self.configured {
            Readiness::Unconfigured
        } else if !self.errors.is_clear() {
            Readiness::Blocked
        } else if self.credential.is_none() {
            Readiness::AwaitingSession
        } else {
            Readiness::Ready
        }
    }

    pub fn status(&self) -> PanelStatus {
        let readiness = self.readiness();
        let status = match readiness {
            Readiness::Unconfigured => PanelStatus {
                readiness,
                epoch: self.epoch,
                message: Some(UNCONFIGURED_MESSAGE.to_string()),
                error_kind: Some(ErrorKind::Configuration),
                retry_available: false,
                interactive: false,
                show_loading: false,
            },
            Readiness::Blocked => PanelStatus {
                readiness,
                epoch: self.epoch,
                message: self.errors.blocking().map(String::from),
                error_kind: self.errors.kind(),
                retry_available: self.errors.retryable(),
                interactive: false,
                show_loading: false,
            },
            Readiness::AwaitingSession => PanelStatus {
                readiness,
                epoch: self.epoch,
                message: None,
                error_kind: None,
                retry_available: false,
                interactive: false,
                show_loading: true,
            },
            Readiness::Ready => PanelStatus {
                readiness,
                epoch: self.epoch,
                message: None,
                error_kind: None,
                retry_available: false,
                interactive: true,
                show_loading: false,
            },
        };

        if self.verbose {
            debug!(
                readiness = ?status.readiness,
                epoch = %self.epoch,
                fetch_pending = self.is_fetch_pending(),
                has_credential = self.credential.is_some(),
                has_error = status.message.is_some(),
                workflow_id = %self.config.session.workflow_id,
                "Panel render state"
            );
        }
        status
    }
}
