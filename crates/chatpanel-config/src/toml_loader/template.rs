//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Chat panel configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[session]
# Workflow the assistant sessions are created against. The panel stays
# unconfigured until this is set to a real id (not "wf_replace...").
# Can also be set with CHATPANEL_WORKFLOW_ID.
# workflow_id = "wf_replace_me"
# endpoint = "http://127.0.0.1:8000/api/create-session"
# connect_timeout_secs = 10   # 1-60
# request_timeout_secs = 30   # 1-300

[widget]
# greeting = "How can I help you today?"
# placeholder = "Ask the assistant..."

# [[widget.starter_prompts]]
# label = "What can you do?"
# prompt = "What can you do?"
# icon = "circle-question"

[theme]
# scheme = "light"           # light, dark

[theme.light]
# radius = "round"           # pill, round, soft, sharp
# density = "normal"         # compact, normal, spacious

[theme.light.accent]
# primary = "#0f172a"
# level = 1                  # 0-3

[theme.dark.accent]
# primary = "#f1f5f9"
# level = 1

[logging]
# level = "chatpanel=info"
# verbose = false
"##
}
