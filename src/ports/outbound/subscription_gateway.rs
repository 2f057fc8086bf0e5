use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A subscription group record as the backend returns it.
///
/// The same shape is used for the by-alert fetch, the all-groups query and
/// the local cache; no normalization happens at fetch time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SubscriptionGroup {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub yaml: Option<String>,
    #[serde(default)]
    pub active: bool,
}

/// SubscriptionGroupGateway port for the subscription-group endpoints
#[async_trait]
pub trait SubscriptionGroupGateway: Send + Sync {
    /// Fetches the groups currently subscribed to one alert.
    async fn groups_for_alert(&self, alert_id: &str) -> Result<Vec<SubscriptionGroup>>;

    /// Queries every subscription group known to the backend. Takes no
    /// parameters; the caller projects whatever view it needs.
    async fn query_all_groups(&self) -> Result<Vec<SubscriptionGroup>>;
}
