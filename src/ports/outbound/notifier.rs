use crate::constants::ToastOptions;

/// Notifier port for user-facing error toasts
///
/// Fire-and-forget: no return value is consumed, and a notifier must never
/// fail the caller. Every loader failure goes through this single channel
/// with the fixed display options.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str, detail: &str, options: &ToastOptions);
}
