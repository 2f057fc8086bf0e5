use alert_detail::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock Notifier that records every toast for assertions
#[derive(Clone, Default)]
pub struct MockNotifier {
    toasts: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toast_count(&self) -> usize {
        self.toasts.lock().unwrap().len()
    }

    pub fn messages(&self) -> Vec<String> {
        self.toasts
            .lock()
            .unwrap()
            .iter()
            .map(|(message, _)| message.clone())
            .collect()
    }

    pub fn details(&self) -> Vec<String> {
        self.toasts
            .lock()
            .unwrap()
            .iter()
            .map(|(_, detail)| detail.clone())
            .collect()
    }
}

impl Notifier for MockNotifier {
    fn error(&self, message: &str, detail: &str, _options: &ToastOptions) {
        self.toasts
            .lock()
            .unwrap()
            .push((message.to_string(), detail.to_string()));
    }
}
