//! Theme preference and per-scheme widget theme tokens.

use chatpanel_common::ColorScheme;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GrayscaleTokens {
    pub hue: u32,
    pub tint: u32,
    pub shade: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccentTokens {
    pub primary: String,
    /// Accent strength (valid range: 0-3).
    pub level: u32,
}

/// Theme tokens handed to the widget for one color scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeTokens {
    /// Corner style: pill, round, soft or sharp.
    pub radius: String,
    /// Spacing: compact, normal or spacious.
    pub density: String,
    pub grayscale: GrayscaleTokens,
    pub accent: AccentTokens,
}

impl ThemeTokens {
    pub fn light() -> Self {
        Self {
            radius: "round".into(),
            density: "normal".into(),
            grayscale: GrayscaleTokens {
                hue: 220,
                tint: 6,
                shade: -4,
            },
            accent: AccentTokens {
                primary: "#0f172a".into(),
                level: 1,
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            radius: "round".into(),
            density: "normal".into(),
            grayscale: GrayscaleTokens {
                hue: 220,
                tint: 6,
                shade: -1,
            },
            accent: AccentTokens {
                primary: "#f1f5f9".into(),
                level: 1,
            },
        }
    }
}

impl Default for GrayscaleTokens {
    fn default() -> Self {
        ThemeTokens::light().grayscale
    }
}

impl Default for AccentTokens {
    fn default() -> Self {
        ThemeTokens::light().accent
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::light()
    }
}

/// Initial scheme plus the token set for each scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub scheme: ColorScheme,
    pub light: ThemeTokens,
    /// Partial tables fill in from the dark defaults, not the light ones.
    #[serde(deserialize_with = "dark_with_defaults")]
    pub dark: ThemeTokens,
}

fn dark_with_defaults<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ThemeTokens, D::Error> {
    let overrides = Value::deserialize(deserializer)?;
    let mut merged = serde_json::to_value(ThemeTokens::dark()).map_err(D::Error::custom)?;
    overlay(&mut merged, overrides);
    serde_json::from_value(merged).map_err(D::Error::custom)
}

fn overlay(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

impl ThemeConfig {
    /// Token set for the given scheme.
    pub fn tokens(&self, scheme: ColorScheme) -> &ThemeTokens {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::Light,
            light: ThemeTokens::light(),
            dark: ThemeTokens::dark(),
        }
    }
}
