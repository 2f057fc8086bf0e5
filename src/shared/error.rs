use thiserror::Error;

/// Errors raised while loading the alert detail view.
///
/// The variants keep the three failure classes apart (endpoint status,
/// transport, YAML parse) so toast details can say which one actually
/// happened. All of them are recovered locally: the loader reports the
/// toast and leaves the affected field unset.
#[derive(Debug, Error)]
pub enum AlertDetailError {
    #[error("detection endpoint returned status {status} for alert {alert_id}")]
    DetectionStatus { alert_id: String, status: u16 },

    #[error("subscription group endpoint returned status {status} for alert {alert_id}")]
    SubscriptionGroupStatus { alert_id: String, status: u16 },

    #[error("subscription group query returned status {status}")]
    GroupQueryStatus { status: u16 },

    #[error("request to {url} failed: {details}")]
    Transport { url: String, details: String },

    #[error("failed to parse detection yaml for alert {alert_id}: {details}")]
    YamlParse { alert_id: String, details: String },

    #[error("invalid alert id {alert_id:?}: {reason}")]
    InvalidAlertId { alert_id: String, reason: String },
}
