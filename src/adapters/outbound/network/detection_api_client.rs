use async_trait::async_trait;
use std::time::Duration;

use crate::ports::outbound::{
    DetectionEnvelope, DetectionGateway, SubscriptionGroup, SubscriptionGroupGateway,
};
use crate::shared::{AlertDetailError, Result};

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// DetectionApiClient adapter for the detection backend HTTP API
///
/// Implements both gateway ports against the same base URL, providing
/// async access to the detection-lookup and subscription-group endpoints.
///
/// # Async Support
/// Uses the async reqwest client for non-blocking requests, so the loader
/// can issue its three fetches concurrently. Cloning is cheap; the inner
/// client is shared.
#[derive(Clone)]
pub struct DetectionApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl DetectionApiClient {
    /// Creates a new client with the default timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("alert-detail/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Validates an alert id before interpolating it into a URL path
    fn validate_alert_id(alert_id: &str) -> Result<()> {
        if alert_id.trim().is_empty() {
            return Err(AlertDetailError::InvalidAlertId {
                alert_id: alert_id.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if alert_id.contains('/') || alert_id.contains('\\') {
            return Err(AlertDetailError::InvalidAlertId {
                alert_id: alert_id.to_string(),
                reason: "contains path separators".to_string(),
            }
            .into());
        }

        if alert_id.contains("..") {
            return Err(AlertDetailError::InvalidAlertId {
                alert_id: alert_id.to_string(),
                reason: "contains '..'".to_string(),
            }
            .into());
        }

        if alert_id.contains('#') || alert_id.contains('?') || alert_id.contains('@') {
            return Err(AlertDetailError::InvalidAlertId {
                alert_id: alert_id.to_string(),
                reason: "contains URL-unsafe characters".to_string(),
            }
            .into());
        }

        Ok(())
    }

    async fn get_response(&self, url: &str) -> Result<reqwest::Response> {
        self.client.get(url).send().await.map_err(|e| {
            AlertDetailError::Transport {
                url: url.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    async fn decode_json<T: serde::de::DeserializeOwned>(
        url: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        response.json().await.map_err(|e| {
            AlertDetailError::Transport {
                url: url.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl DetectionGateway for DetectionApiClient {
    async fn fetch_detection(&self, alert_id: &str) -> Result<DetectionEnvelope> {
        Self::validate_alert_id(alert_id)?;

        let url = format!(
            "{}/detection/{}",
            self.base_url,
            urlencoding::encode(alert_id)
        );
        let response = self.get_response(&url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AlertDetailError::DetectionStatus {
                alert_id: alert_id.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        Self::decode_json(&url, response).await
    }
}

#[async_trait]
impl SubscriptionGroupGateway for DetectionApiClient {
    async fn groups_for_alert(&self, alert_id: &str) -> Result<Vec<SubscriptionGroup>> {
        Self::validate_alert_id(alert_id)?;

        let url = format!(
            "{}/detection/subscription-groups/{}",
            self.base_url,
            urlencoding::encode(alert_id)
        );
        let response = self.get_response(&url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AlertDetailError::SubscriptionGroupStatus {
                alert_id: alert_id.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        Self::decode_json(&url, response).await
    }

    async fn query_all_groups(&self) -> Result<Vec<SubscriptionGroup>> {
        let url = format!("{}/detection/subscription-groups", self.base_url);
        let response = self.get_response(&url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AlertDetailError::GroupQueryStatus {
                status: status.as_u16(),
            }
            .into());
        }

        Self::decode_json(&url, response).await
    }
}
