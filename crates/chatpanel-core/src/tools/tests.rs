//! Tests for tool parsing and dispatch.

use super::*;
use crate::host::FactAction;
use chatpanel_common::ColorScheme;
use serde_json::json;

fn invoke(name: &str, params: serde_json::Value) -> ClientToolInvocation {
    ClientToolInvocation::new(name, params)
}

// =============================================================================
// PARSING
// =============================================================================

#[test]
fn switch_theme_accepts_light_and_dark() {
    assert_eq!(
        ToolCall::parse(&invoke("switch_theme", json!({ "theme": "light" }))),
        ToolCall::SwitchTheme(ColorScheme::Light)
    );
    assert_eq!(
        ToolCall::parse(&invoke("switch_theme", json!({ "theme": "dark" }))),
        ToolCall::SwitchTheme(ColorScheme::Dark)
    );
}

#[test]
fn switch_theme_rejects_malformed_values() {
    for params in [
        json!({ "theme": "purple" }),
        json!({ "theme": "Dark" }),
        json!({ "theme": 1 }),
        json!({ "theme": null }),
        json!({}),
    ] {
        let call = ToolCall::parse(&invoke("switch_theme", params.clone()));
        assert!(
            matches!(call, ToolCall::Rejected { tool: "switch_theme", .. }),
            "params {params} should be rejected"
        );
    }
}

#[test]
fn record_fact_coerces_params() {
    let call = ToolCall::parse(&invoke(
        "record_fact",
        json!({ "fact_id": 42, "fact_text": true, "extra": "ignored" }),
    ));
    assert_eq!(
        call,
        ToolCall::RecordFact(FactRecord {
            fact_id: "42".into(),
            fact_text: "true".into(),
        })
    );
}

#[test]
fn record_fact_missing_fields_coerce_to_empty() {
    let call = ToolCall::parse(&invoke("record_fact", json!({ "fact_id": null })));
    assert_eq!(
        call,
        ToolCall::RecordFact(FactRecord {
            fact_id: String::new(),
            fact_text: String::new(),
        })
    );
}

#[test]
fn unknown_tool_is_unknown() {
    assert_eq!(
        ToolCall::parse(&invoke("delete_everything", json!({}))),
        ToolCall::Unknown("delete_everything".into())
    );
}

#[test]
fn non_object_params_are_treated_as_empty() {
    let inv = invoke("switch_theme", json!("dark"));
    assert!(inv.params.is_empty());
    assert!(matches!(ToolCall::parse(&inv), ToolCall::Rejected { .. }));
}

#[test]
fn invocation_deserializes_without_params() {
    let inv: ClientToolInvocation = serde_json::from_str(r#"{"name":"record_fact"}"#).unwrap();
    assert_eq!(inv.name, "record_fact");
    assert!(inv.params.is_empty());
}

#[test]
fn invocation_with_non_object_params_still_decodes() {
    for raw in [
        r#"{"name":"switch_theme","params":null}"#,
        r#"{"name":"switch_theme","params":"oops"}"#,
        r#"{"name":"switch_theme","params":[1,2]}"#,
    ] {
        let inv: ClientToolInvocation = serde_json::from_str(raw).unwrap();
        assert!(inv.params.is_empty(), "{raw}");

        let mut dispatcher = ToolInvocationDispatcher::new(false);
        assert_eq!(dispatcher.dispatch(&inv).result, ToolResult::failed());
    }
}

#[test]
fn coerce_to_string_rules() {
    assert_eq!(coerce_to_string(None), "");
    assert_eq!(coerce_to_string(Some(&json!(null))), "");
    assert_eq!(coerce_to_string(Some(&json!("abc"))), "abc");
    assert_eq!(coerce_to_string(Some(&json!(7))), "7");
    assert_eq!(coerce_to_string(Some(&json!(false))), "false");
    assert_eq!(coerce_to_string(Some(&json!(2.5))), "2.5");
}

#[test]
fn coerce_to_string_matches_browser_forms() {
    assert_eq!(coerce_to_string(Some(&json!(1.0))), "1");
    assert_eq!(coerce_to_string(Some(&json!(-0.0))), "0");
    assert_eq!(coerce_to_string(Some(&json!(["a", 1]))), "a,1");
    assert_eq!(coerce_to_string(Some(&json!([1, [2, null], 3.0]))), "1,2,,3");
    assert_eq!(coerce_to_string(Some(&json!({ "k": 1 }))), "[object Object]");
}

#[test]
fn integral_float_fact_id_dedups_with_integer_id() {
    let mut dispatcher = ToolInvocationDispatcher::new(false);
    let first = dispatcher.dispatch(&invoke("record_fact", json!({ "fact_id": 7, "fact_text": "a" })));
    assert!(matches!(first.effect, ToolEffect::SaveFact(_)));

    let replay = dispatcher.dispatch(&invoke(
        "record_fact",
        json!({ "fact_id": 7.0, "fact_text": "a" }),
    ));
    assert_eq!(replay.effect, ToolEffect::None);
    assert!(dispatcher.is_processed("7"));
}

#[test]
fn normalize_collapses_and_trims() {
    assert_eq!(
        normalize_fact_text("  likes\t\tgreen \n tea  "),
        "likes green tea"
    );
    assert_eq!(normalize_fact_text("   "), "");
    assert_eq!(normalize_fact_text("single"), "single");
}

// =============================================================================
// DISPATCH
// =============================================================================

#[test]
fn dispatch_switch_theme_requests_scheme() {
    let mut dispatcher = ToolInvocationDispatcher::new(false);
    let out = dispatcher.dispatch(&invoke("switch_theme", json!({ "theme": "dark" })));
    assert_eq!(out.result, ToolResult::ok());
    assert_eq!(out.effect, ToolEffect::ThemeRequest(ColorScheme::Dark));
}

#[test]
fn dispatch_bad_theme_fails_without_effect() {
    let mut dispatcher = ToolInvocationDispatcher::new(false);
    let out = dispatcher.dispatch(&invoke("switch_theme", json!({ "theme": "purple" })));
    assert_eq!(out.result, ToolResult::failed());
    assert_eq!(out.effect, ToolEffect::None);
}

#[test]
fn dispatch_record_fact_saves_normalized_text() {
    let mut dispatcher = ToolInvocationDispatcher::new(true);
    let out = dispatcher.dispatch(&invoke(
        "record_fact",
        json!({ "fact_id": "f1", "fact_text": "  prefers \n\n dark   mode " }),
    ));
    assert_eq!(out.result, ToolResult::ok());
    assert_eq!(
        out.effect,
        ToolEffect::SaveFact(FactAction::save("f1", "prefers dark mode"))
    );
    assert!(dispatcher.is_processed("f1"));
}

#[test]
fn dispatch_record_fact_is_idempotent() {
    let mut dispatcher = ToolInvocationDispatcher::new(false);
    let inv = invoke("record_fact", json!({ "fact_id": "f1", "fact_text": "a" }));

    let first = dispatcher.dispatch(&inv);
    assert!(matches!(first.effect, ToolEffect::SaveFact(_)));

    let replay = dispatcher.dispatch(&inv);
    assert_eq!(replay.result, ToolResult::ok());
    assert_eq!(replay.effect, ToolEffect::None);
    assert_eq!(dispatcher.processed_count(), 1);
}

#[test]
fn dispatch_record_fact_with_empty_id_is_a_no_op_success() {
    let mut dispatcher = ToolInvocationDispatcher::new(false);
    let out = dispatcher.dispatch(&invoke("record_fact", json!({ "fact_text": "orphan" })));
    assert_eq!(out.result, ToolResult::ok());
    assert_eq!(out.effect, ToolEffect::None);
    assert_eq!(dispatcher.processed_count(), 0);
}

#[test]
fn dispatch_unknown_tool_fails() {
    let mut dispatcher = ToolInvocationDispatcher::new(false);
    let out = dispatcher.dispatch(&invoke("open_url", json!({ "url": "https://x" })));
    assert_eq!(out.result, ToolResult::failed());
    assert_eq!(out.effect, ToolEffect::None);
}

#[test]
fn clear_processed_allows_refire() {
    let mut dispatcher = ToolInvocationDispatcher::new(false);
    let inv = invoke("record_fact", json!({ "fact_id": "f1" }));
    dispatcher.dispatch(&inv);
    dispatcher.clear_processed();
    assert!(!dispatcher.is_processed("f1"));
    assert!(matches!(
        dispatcher.dispatch(&inv).effect,
        ToolEffect::SaveFact(_)
    ));
}

#[test]
fn tool_result_wire_shape() {
    assert_eq!(
        serde_json::to_string(&ToolResult::ok()).unwrap(),
        r#"{"success":true}"#
    );
}
