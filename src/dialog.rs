//! Blocking browser dialogs

/// Show a blocking alert. Falls back to the console outside a browser window.
pub fn alert(message: &str) {
    let shown = web_sys::window()
        .map(|win| win.alert_with_message(message).is_ok())
        .unwrap_or(false);
    if !shown {
        log::warn!("[DIALOG] Alert not shown: {}", message);
    }
}
