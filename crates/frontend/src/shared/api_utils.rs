//! API utilities for talking to the Jira plugin server
//!
//! The webapp is served by the chat server, so requests go to the same
//! origin under the plugin's route.

use wasm_bindgen::JsCast;

/// Plugin id the chat server routes requests by.
pub const PLUGIN_ID: &str = "jira";

/// Versioned API prefix inside the plugin route.
pub const API_VERSION_PATH: &str = "/api/v2";

/// Cookie holding the chat server's CSRF token.
pub const CSRF_COOKIE: &str = "MMCSRF";

pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// Get the base URL for plugin API requests
///
/// # Returns
/// - URL like "https://chat.example.com/plugins/jira/api/v2"
/// - Relative "/plugins/jira/api/v2" if window is not available
pub fn api_base() -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}/plugins/{}{}", origin, PLUGIN_ID, API_VERSION_PATH)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/attach-comment-to-issue");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Read the CSRF token from `document.cookie`, if the chat server set one.
pub fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html_document.cookie().ok()?;
    csrf_token_from_cookies(&cookies)
}

/// Extract the CSRF token from a raw `Cookie` string.
pub fn csrf_token_from_cookies(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == CSRF_COOKIE)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|value| !value.is_empty())
}

/// Attach the headers every plugin request needs.
pub fn with_plugin_headers(
    builder: gloo_net::http::RequestBuilder,
) -> gloo_net::http::RequestBuilder {
    let builder = builder.header("X-Requested-With", "XMLHttpRequest");
    match csrf_token() {
        Some(token) => builder.header(CSRF_HEADER, &token),
        None => builder,
    }
}
