pub mod load_alert_detail;

pub use load_alert_detail::LoadAlertDetailUseCase;
