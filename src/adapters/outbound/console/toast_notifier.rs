use owo_colors::OwoColorize;

use crate::constants::ToastOptions;
use crate::ports::outbound::Notifier;

/// StderrToastNotifier adapter for rendering error toasts on stderr
///
/// Writes to stderr so toasts never interleave with the rendered model on
/// stdout. A terminal has no timed dismissal, so the display options are
/// accepted and ignored.
#[derive(Default)]
pub struct StderrToastNotifier;

impl StderrToastNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for StderrToastNotifier {
    fn error(&self, message: &str, detail: &str, _options: &ToastOptions) {
        eprintln!("❌ {} {}", message.red().bold(), detail.dimmed());
    }
}
