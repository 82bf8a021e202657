pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, HostError, PanelError};
pub use id::new_correlation_id;
pub use types::ColorScheme;

pub type Result<T> = std::result::Result<T, PanelError>;
