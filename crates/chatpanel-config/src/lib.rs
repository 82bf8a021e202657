//! Chat panel configuration.
//!
//! TOML-based configuration with environment overrides and validation.
//! All config sections use defaults so partial configs work out of the box.

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::apply_env_overrides;
pub use schema::{PanelConfig, CONFIG_SCHEMA_VERSION};

use chatpanel_common::ConfigError;
use std::path::Path;

/// Workflow ids starting with this prefix are the unedited template value.
pub const WORKFLOW_PLACEHOLDER_PREFIX: &str = "wf_replace";

/// Whether a workflow id names a real remote workflow.
pub fn is_workflow_configured(workflow_id: &str) -> bool {
    let id = workflow_id.trim();
    !id.is_empty() && !id.starts_with(WORKFLOW_PLACEHOLDER_PREFIX)
}

/// Load config from `path` (or the platform default), apply environment
/// overrides, and validate the result.
pub fn load_config(path: Option<&Path>) -> Result<PanelConfig, ConfigError> {
    let mut config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    env::apply_env_overrides(&mut config);
    normalize(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Strip stray whitespace from identifiers that are sent over the wire, so
/// what is checked is exactly what gets posted.
pub fn normalize(config: &mut PanelConfig) {
    let session = &mut config.session;
    session.workflow_id = session.workflow_id.trim().to_string();
    session.endpoint = session.endpoint.trim().to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_workflow_is_unconfigured() {
        assert!(!is_workflow_configured(""));
        assert!(!is_workflow_configured("   "));
    }

    #[test]
    fn placeholder_workflow_is_unconfigured() {
        assert!(!is_workflow_configured("wf_replace_me"));
        assert!(!is_workflow_configured("wf_replace_with_your_id"));
    }

    #[test]
    fn real_workflow_is_configured() {
        assert!(is_workflow_configured("wf_68df4b13b3588190a09d19288d4610ec"));
        // Only the prefix counts
        assert!(is_workflow_configured("wf_abc_replace"));
    }

    #[test]
    fn load_config_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[session]
endpoint = "not a url"
"#,
        )
        .unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_trims_workflow_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[session]
workflow_id = "  wf_padded \t"
endpoint = " https://example.com/api/create-session "
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        if std::env::var(env::WORKFLOW_ID_ENV).is_err() {
            assert_eq!(config.session.workflow_id, "wf_padded");
        }
        if std::env::var(env::SESSION_ENDPOINT_ENV).is_err() {
            assert_eq!(
                config.session.endpoint,
                "https://example.com/api/create-session"
            );
        }
    }

    #[test]
    fn normalize_trims_session_identifiers() {
        let mut config = PanelConfig::default();
        config.session.workflow_id = " wf_x ".into();
        config.session.endpoint = "\thttp://127.0.0.1:8000/session\n".into();
        normalize(&mut config);
        assert_eq!(config.session.workflow_id, "wf_x");
        assert_eq!(config.session.endpoint, "http://127.0.0.1:8000/session");
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }
}
