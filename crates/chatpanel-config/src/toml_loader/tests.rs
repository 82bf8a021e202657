//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use chatpanel_common::ColorScheme;

#[test]
fn load_from_nonexistent_reports_the_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    match load_from_path(&path) {
        Err(chatpanel_common::ConfigError::FileNotFound(missing)) => assert_eq!(missing, path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[session]
workflow_id = "wf_68e1c0ffee"
endpoint = "https://example.com/api/create-session"

[theme]
scheme = "dark"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.session.workflow_id, "wf_68e1c0ffee");
    assert_eq!(
        config.session.endpoint,
        "https://example.com/api/create-session"
    );
    assert_eq!(config.theme.scheme, ColorScheme::Dark);
    // Defaults preserved
    assert_eq!(config.session.request_timeout_secs, 30);
    assert_eq!(config.widget.greeting, "How can I help you today?");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, chatpanel_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[session]
request_timeout_secs = 0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.session.request_timeout_secs, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chatpanel").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert!(config.session.workflow_id.is_empty());
    assert_eq!(config.theme.scheme, ColorScheme::Light);
    assert_eq!(config.logging.level, "chatpanel=info");
}

#[test]
fn template_parses_and_validates() {
    let config: crate::schema::PanelConfig =
        toml::from_str(super::template::default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
    assert_eq!(config.theme.dark.accent.primary, "#f1f5f9");
    assert_eq!(config.theme.light.accent.primary, "#0f172a");
}

#[test]
fn default_config_path_ends_with_chatpanel() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("chatpanel/config.toml"));
    }
}
