//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod session;
mod theme;

#[cfg(test)]
mod tests;

use crate::schema::PanelConfig;
use chatpanel_common::ConfigError;

/// Run all validations on a config, collecting all errors.
///
/// A missing or placeholder workflow id is deliberately not an error here;
/// the controller reports it as the unconfigured state at runtime.
pub fn validate(config: &PanelConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    session::validate_session(&mut errors, config);
    theme::validate_theme(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
