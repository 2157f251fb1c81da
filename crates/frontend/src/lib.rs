pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use contracts::domain::a003_chat_context::{PluginTheme, Post, Team};
use layout::global_context::{host, install_host};
use layout::HostContext;
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};

fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let ctx = HostContext::new();
    if !install_host(ctx) {
        log::warn!("Jira plugin webapp is already started");
        return;
    }
    leptos::mount::mount_to_body(move || leptos::view! { <app::App host=ctx /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

/// Open the Attach Message to Jira Issue modal for a post (`{id, message}`).
#[wasm_bindgen]
pub fn open_attach_comment_to_issue_modal(post: JsValue) {
    let Some(ctx) = host() else {
        log::error!("Jira plugin webapp is not started");
        return;
    };
    match serde_wasm_bindgen::from_value::<Post>(post) {
        Ok(post) => ctx.modal.open(post),
        Err(e) => log::error!("Invalid post passed to the attach modal: {}", e),
    }
}

/// Update the team the user is currently viewing (`{name}`).
#[wasm_bindgen]
pub fn set_current_team(team: JsValue) {
    let Some(ctx) = host() else {
        log::error!("Jira plugin webapp is not started");
        return;
    };
    match serde_wasm_bindgen::from_value::<Team>(team) {
        Ok(team) => ctx.set_team(team),
        Err(e) => log::error!("Invalid team passed to the Jira plugin: {}", e),
    }
}

/// Update the chat theme used by the plugin's dialogs.
#[wasm_bindgen]
pub fn set_theme(theme: JsValue) {
    let Some(ctx) = host() else {
        log::error!("Jira plugin webapp is not started");
        return;
    };
    match serde_wasm_bindgen::from_value::<PluginTheme>(theme) {
        Ok(theme) => ctx.theme.set_theme(theme),
        Err(e) => log::error!("Invalid theme passed to the Jira plugin: {}", e),
    }
}
