//! Chat panel controller.
//!
//! Sits between a host application and an embedded, remotely rendered
//! assistant widget:
//! - obtains session credentials through a [`CredentialSource`]
//! - routes the widget's tool invocations to host effects
//! - folds transport, session and integration failures into one blocking error
//! - resets all per-session state atomically, discarding stale async results
//!   by epoch
//!
//! [`CredentialSource`]: chatpanel_session::CredentialSource

pub mod controller;
pub mod epoch;
pub mod errors;
pub mod events;
pub mod host;
pub mod tools;
pub mod widget;

pub use controller::{Completion, PanelController, PanelOptions, PanelStatus, Readiness};
pub use epoch::Epoch;
pub use errors::{ErrorAggregator, ErrorKind, ErrorPatch, ErrorState};
pub use events::WidgetEvent;
pub use host::{FactAction, PanelHost};
pub use tools::{ClientToolInvocation, ToolInvocationDispatcher, ToolResult};
pub use widget::WidgetOptions;
