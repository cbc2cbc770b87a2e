//! Blocking browser dialogs used for action confirmations and results.

use web_sys::window;

/// Native confirm dialog; an unavailable window counts as "no".
pub fn confirm(message: &str) -> bool {
    window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// Native alert dialog.
pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}
