//! Environment variable overrides applied on top of the TOML config.

use tracing::debug;

use crate::schema::PanelConfig;

pub const WORKFLOW_ID_ENV: &str = "CHATPANEL_WORKFLOW_ID";
pub const SESSION_ENDPOINT_ENV: &str = "CHATPANEL_SESSION_ENDPOINT";
pub const VERBOSE_ENV: &str = "CHATPANEL_VERBOSE";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut PanelConfig) {
    apply_overrides_with(config, |key| std::env::var(key).ok());
}

/// Apply overrides from an arbitrary lookup (the process env in production).
pub fn apply_overrides_with(config: &mut PanelConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(id) = lookup(WORKFLOW_ID_ENV) {
        debug!("workflow id overridden by {WORKFLOW_ID_ENV}");
        config.session.workflow_id = id.trim().to_string();
    }

    if let Some(endpoint) = lookup(SESSION_ENDPOINT_ENV) {
        debug!("session endpoint overridden by {SESSION_ENDPOINT_ENV}");
        config.session.endpoint = endpoint.trim().to_string();
    }

    if let Some(raw) = lookup(VERBOSE_ENV) {
        match parse_flag(&raw) {
            Some(verbose) => config.logging.verbose = verbose,
            None => tracing::warn!("ignoring {VERBOSE_ENV}={raw:?}: expected a boolean"),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
