//! Static widget copy: greeting, starter prompts, composer placeholder.

use serde::{Deserialize, Serialize};

/// A suggested first message shown on the start screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarterPrompt {
    pub label: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub greeting: String,
    pub placeholder: String,
    pub starter_prompts: Vec<StarterPrompt>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            greeting: "How can I help you today?".into(),
            placeholder: "Ask the assistant...".into(),
            starter_prompts: vec![StarterPrompt {
                label: "What can you do?".into(),
                prompt: "What can you do?".into(),
                icon: Some("circle-question".into()),
            }],
        }
    }
}
