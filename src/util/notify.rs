//! Blocking user notifications.
//!
//! User-input errors and not-found lookups surface synchronously through
//! `window.alert`, matching the submission workflow's blocking-notification
//! contract. Requires a browser environment; a no-op elsewhere.

/// Show a blocking notification.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}
