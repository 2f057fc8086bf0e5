pub mod toast_notifier;

pub use toast_notifier::StderrToastNotifier;
