use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by the host application's sinks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("widget action failed: {0}")]
    ActionFailed(String),

    #[error("host unavailable: {0}")]
    Unavailable(String),
}

/// User-facing failure taxonomy of the chat panel.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// Workflow identifier missing or still the placeholder. Needs a redeploy.
    #[error("{0}")]
    Configuration(String),

    /// The widget runtime failed to load.
    #[error("{0}")]
    TransportLoad(String),

    /// Credential fetch failed. Recoverable through a reset.
    #[error("{0}")]
    SessionCreation(String),

    /// Runtime error reported by the widget. Clears on the next response.
    #[error("{0}")]
    Integration(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
