//! Validation for theme tokens.

use crate::schema::{PanelConfig, ThemeTokens};

use super::helpers::{validate_one_of, validate_range};

const RADII: &[&str] = &["pill", "round", "soft", "sharp"];
const DENSITIES: &[&str] = &["compact", "normal", "spacious"];

pub(crate) fn validate_theme(errors: &mut Vec<String>, config: &PanelConfig) {
    validate_tokens(errors, "theme.light", &config.theme.light);
    validate_tokens(errors, "theme.dark", &config.theme.dark);
}

fn validate_tokens(errors: &mut Vec<String>, prefix: &str, tokens: &ThemeTokens) {
    validate_one_of(errors, &format!("{prefix}.radius"), &tokens.radius, RADII);
    validate_one_of(
        errors,
        &format!("{prefix}.density"),
        &tokens.density,
        DENSITIES,
    );
    validate_range(
        errors,
        &format!("{prefix}.accent.level"),
        tokens.accent.level,
        0,
        3,
    );
    validate_range(
        errors,
        &format!("{prefix}.grayscale.hue"),
        tokens.grayscale.hue,
        0,
        360,
    );
    if !tokens.accent.primary.starts_with('#') {
        errors.push(format!(
            "{prefix}.accent.primary = {:?} must be a hex color",
            tokens.accent.primary
        ));
    }
}
