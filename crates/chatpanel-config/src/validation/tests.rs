//! Tests for the full validation pipeline.

use super::*;
use crate::schema::PanelConfig;

#[test]
fn default_config_validates() {
    let config = PanelConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn placeholder_workflow_id_is_not_a_validation_error() {
    let mut config = PanelConfig::default();
    config.session.workflow_id = "wf_replace_me".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_endpoint() {
    let mut config = PanelConfig::default();
    config.session.endpoint = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.endpoint is empty"));
}

#[test]
fn catches_non_http_endpoint() {
    let mut config = PanelConfig::default();
    config.session.endpoint = "ftp://example.com/session".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.endpoint"));
    assert!(err.contains("http or https"));
}

#[test]
fn catches_zero_request_timeout() {
    let mut config = PanelConfig::default();
    config.session.request_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.request_timeout_secs"));
}

#[test]
fn catches_connect_timeout_too_large() {
    let mut config = PanelConfig::default();
    config.session.connect_timeout_secs = 120;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.connect_timeout_secs"));
}

#[test]
fn catches_bad_radius() {
    let mut config = PanelConfig::default();
    config.theme.dark.radius = "wobbly".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("theme.dark.radius"));
}

#[test]
fn catches_accent_level_out_of_range() {
    let mut config = PanelConfig::default();
    config.theme.light.accent.level = 7;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("theme.light.accent.level"));
}

#[test]
fn catches_non_hex_accent() {
    let mut config = PanelConfig::default();
    config.theme.light.accent.primary = "red".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("theme.light.accent.primary"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = PanelConfig::default();
    config.session.endpoint = String::new();
    config.theme.light.density = "huge".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.endpoint"));
    assert!(err.contains("theme.light.density"));
    assert!(err.contains("; "));
}
