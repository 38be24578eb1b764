//! Thin wrappers over window APIs used by pages

/// Blocking confirmation dialog. Returns `false` if the dialog cannot be shown.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Equivalent of the browser back button.
pub fn go_back() {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        history.back().ok();
    }
}

/// Full page navigation, dropping all in-memory state.
pub fn hard_redirect(path: &str) {
    if let Err(e) = gloo_utils::window().location().set_href(path) {
        log::error!("Redirect to {} failed: {:?}", path, e);
    }
}
