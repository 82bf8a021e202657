//! Configuration schema types for the chat panel.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod session;
mod theme;
mod widget;

pub use logging::*;
pub use session::*;
pub use theme::*;
pub use widget::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PanelConfig {
    pub session: SessionConfig,
    pub widget: WidgetConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
