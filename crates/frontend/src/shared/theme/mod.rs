//! Theme handling for the plugin's dialogs.
//!
//! The chat client owns the theme; the plugin receives it as a
//! [`PluginTheme`] and turns it into inline styles for its own surfaces.

use contracts::domain::a003_chat_context::PluginTheme;
use leptos::prelude::*;

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal, updated whenever the chat client switches theme.
    pub theme: RwSignal<PluginTheme>,
}

impl ThemeContext {
    pub fn new(theme: PluginTheme) -> Self {
        Self {
            theme: RwSignal::new(theme),
        }
    }

    pub fn set_theme(&self, theme: PluginTheme) {
        self.theme.set(theme);
    }
}

/// Inline style for a modal body.
pub fn modal_body_style(theme: &PluginTheme) -> String {
    format!(
        "padding: 2em 2em 3em; color: {}; background-color: {};",
        theme.center_channel_color, theme.center_channel_bg
    )
}

/// Inline style for a modal footer.
pub fn modal_footer_style() -> &'static str {
    "padding: 2rem 15px; display: flex; justify-content: flex-end; gap: 8px;"
}

/// Inline style for validation and submission errors.
pub fn error_text_style(theme: &PluginTheme) -> String {
    format!("color: {}; margin-top: 6px;", theme.error_text_color)
}
