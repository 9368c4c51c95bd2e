//! Blocking user notifications (the browser `alert` dialog).

pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Production notifier. On the web this is a synchronous `window.alert`;
/// native shells route it through the webview.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    #[cfg(target_arch = "wasm32")]
    fn notify(&self, message: &str) {
        let shown = web_sys::window().map(|win| win.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            tracing::warn!(message, "alert dialog unavailable");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn notify(&self, message: &str) {
        let literal = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
        let _ = dioxus::prelude::document::eval(&format!("window.alert({literal});"));
    }
}

/// Collects messages instead of showing them.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
