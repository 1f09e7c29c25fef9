//! Thin wrappers over the browser APIs the views need.

use dioxus_logger::tracing;
use wasm_bindgen::JsValue;

use crate::notification::LandingNotice;

/// CSRF token rendered by the server into `<meta name="csrf-token">`.
pub fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name=\"csrf-token\"]")
        .ok()
        .flatten()?;

    meta.get_attribute("content")
}

/// Read landing notices from the current URL and strip the query so a reload
/// does not announce them again.
pub fn take_landing_notices() -> Vec<LandingNotice> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let location = window.location();

    let query = location.search().unwrap_or_default();
    let notices = LandingNotice::from_query(&query);

    if !notices.is_empty() {
        let path = location.pathname().unwrap_or_else(|_| "/".to_string());
        let replaced = window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&path)));

        if let Err(e) = replaced {
            tracing::warn!("Failed to clean up landing URL: {:?}", e);
        }
    }

    notices
}

/// Blocking yes/no question; false when no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Free-text question; `None` when cancelled or left blank.
pub fn prompt(message: &str) -> Option<String> {
    web_sys::window()?
        .prompt_with_message(message)
        .ok()
        .flatten()
        .map(|answer| answer.trim().to_string())
        .filter(|answer| !answer.is_empty())
}
