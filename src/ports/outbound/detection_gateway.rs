use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Response envelope of the detection-lookup endpoint.
///
/// The yaml text is the detection definition itself; the remaining fields
/// are the audit/activity envelope merged into the parsed view. Everything
/// except `active` is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectionEnvelope {
    #[serde(default)]
    pub yaml: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default, rename = "createdBy")]
    pub created_by: Option<String>,
    #[serde(default, rename = "updatedBy")]
    pub updated_by: Option<String>,
    #[serde(default)]
    pub dimensions: Vec<String>,
    /// Epoch millis or a parseable date string; the backend is not
    /// consistent about which.
    #[serde(default, rename = "lastTimestamp")]
    pub last_timestamp: Option<serde_json::Value>,
}

/// DetectionGateway port for the detection-lookup endpoint
///
/// Implementations must be `Send + Sync`; the loader issues this fetch
/// concurrently with the subscription-group fetches.
#[async_trait]
pub trait DetectionGateway: Send + Sync {
    /// Fetches the detection envelope for one alert.
    ///
    /// # Errors
    /// Returns an error if the request fails in transport, or the endpoint
    /// answers with a non-success status.
    async fn fetch_detection(&self, alert_id: &str) -> Result<DetectionEnvelope>;
}
