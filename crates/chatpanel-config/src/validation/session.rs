//! Validation for the `[session]` section.

use crate::schema::PanelConfig;

use super::helpers::validate_range;

pub(crate) fn validate_session(errors: &mut Vec<String>, config: &PanelConfig) {
    let s = &config.session;

    let endpoint = s.endpoint.trim();
    if endpoint.is_empty() {
        errors.push("session.endpoint is empty".into());
    } else if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        errors.push(format!(
            "session.endpoint = {endpoint:?} must be an http or https URL"
        ));
    }

    validate_range(
        errors,
        "session.connect_timeout_secs",
        s.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "session.request_timeout_secs",
        s.request_timeout_secs,
        1,
        300,
    );
}
