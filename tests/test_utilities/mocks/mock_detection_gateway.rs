use alert_detail::prelude::*;
use async_trait::async_trait;

enum DetectionResponse {
    Envelope(Box<DetectionEnvelope>),
    Status(u16),
    Transport,
}

/// Mock DetectionGateway for testing
pub struct MockDetectionGateway {
    response: DetectionResponse,
}

impl MockDetectionGateway {
    pub fn with_envelope(envelope: DetectionEnvelope) -> Self {
        Self {
            response: DetectionResponse::Envelope(Box::new(envelope)),
        }
    }

    /// 200 response whose envelope carries the given yaml text.
    pub fn with_yaml(yaml: &str) -> Self {
        Self::with_envelope(DetectionEnvelope {
            yaml: Some(yaml.to_string()),
            active: true,
            created_by: Some("smcclung".to_string()),
            updated_by: Some("apucher".to_string()),
            dimensions: vec!["country".to_string()],
            last_timestamp: Some(serde_json::json!(1596455400000i64)),
        })
    }

    /// Non-success endpoint status.
    pub fn with_status(status: u16) -> Self {
        Self {
            response: DetectionResponse::Status(status),
        }
    }

    /// Transport-level failure (connection refused and friends).
    pub fn with_transport_failure() -> Self {
        Self {
            response: DetectionResponse::Transport,
        }
    }
}

#[async_trait]
impl DetectionGateway for MockDetectionGateway {
    async fn fetch_detection(&self, alert_id: &str) -> Result<DetectionEnvelope> {
        match &self.response {
            DetectionResponse::Envelope(envelope) => Ok((**envelope).clone()),
            DetectionResponse::Status(status) => Err(AlertDetailError::DetectionStatus {
                alert_id: alert_id.to_string(),
                status: *status,
            }
            .into()),
            DetectionResponse::Transport => Err(AlertDetailError::Transport {
                url: "http://mock/detection".to_string(),
                details: "connection refused".to_string(),
            }
            .into()),
        }
    }
}
