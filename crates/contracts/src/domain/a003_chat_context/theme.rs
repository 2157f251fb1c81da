use serde::{Deserialize, Serialize};

/// Subset of the chat client's theme used by the plugin's dialogs.
///
/// Field names follow the client's camelCase theme object; anything missing
/// falls back to the default light theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginTheme {
    pub center_channel_color: String,
    pub center_channel_bg: String,
    pub error_text_color: String,
}

impl Default for PluginTheme {
    fn default() -> Self {
        Self {
            center_channel_color: "#3d3c40".to_string(),
            center_channel_bg: "#ffffff".to_string(),
            error_text_color: "#fd5960".to_string(),
        }
    }
}
