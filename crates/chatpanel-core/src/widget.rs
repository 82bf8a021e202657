//! Configuration handed to the embedded widget.

use chatpanel_common::ColorScheme;
use chatpanel_config::schema::{AccentTokens, GrayscaleTokens, StarterPrompt, WidgetConfig};
use chatpanel_config::PanelConfig;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions {
    pub theme: WidgetTheme,
    pub start_screen: StartScreen,
    pub composer: Composer,
    pub thread_item_actions: ThreadItemActions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetTheme {
    pub color_scheme: ColorScheme,
    pub radius: String,
    pub density: String,
    pub color: ThemeColor,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeColor {
    pub grayscale: GrayscaleTokens,
    pub accent: AccentTokens,
}

#[derive(Debug, Clone, Serialize)]
pub struct StartScreen {
    pub greeting: String,
    pub prompts: Vec<StarterPrompt>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Composer {
    pub placeholder: String,
    pub attachments: Attachments,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Attachments {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThreadItemActions {
    pub feedback: bool,
}

impl WidgetOptions {
    /// Options for the given scheme. Attachments are always on and
    /// per-message feedback always off.
    pub fn build(config: &PanelConfig, scheme: ColorScheme) -> Self {
        let tokens = config.theme.tokens(scheme);
        let WidgetConfig {
            greeting,
            placeholder,
            starter_prompts,
        } = config.widget.clone();

        Self {
            theme: WidgetTheme {
                color_scheme: scheme,
                radius: tokens.radius.clone(),
                density: tokens.density.clone(),
                color: ThemeColor {
                    grayscale: tokens.grayscale.clone(),
                    accent: tokens.accent.clone(),
                },
            },
            start_screen: StartScreen {
                greeting,
                prompts: starter_prompts,
            },
            composer: Composer {
                placeholder,
                attachments: Attachments { enabled: true },
            },
            thread_item_actions: ThreadItemActions { feedback: false },
        }
    }
}
