//! Blocking browser alert used to surface request failures.

/// Show `message` in a `window.alert`. No-op outside the browser.
pub fn show(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        log::warn!("{message}");
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
