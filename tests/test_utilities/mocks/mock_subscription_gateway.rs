use alert_detail::prelude::*;
use async_trait::async_trait;

/// Mock SubscriptionGroupGateway for testing
///
/// `None` for either field simulates a failed call.
pub struct MockSubscriptionGroupGateway {
    groups_for_alert: Option<Vec<SubscriptionGroup>>,
    all_groups: Option<Vec<SubscriptionGroup>>,
}

impl MockSubscriptionGroupGateway {
    pub fn new() -> Self {
        Self {
            groups_for_alert: Some(vec![]),
            all_groups: Some(vec![]),
        }
    }

    pub fn with_groups(mut self, groups: Vec<SubscriptionGroup>) -> Self {
        self.groups_for_alert = Some(groups);
        self
    }

    pub fn with_all_groups(mut self, groups: Vec<SubscriptionGroup>) -> Self {
        self.all_groups = Some(groups);
        self
    }

    pub fn with_groups_failure(mut self) -> Self {
        self.groups_for_alert = None;
        self
    }

    pub fn with_all_groups_failure(mut self) -> Self {
        self.all_groups = None;
        self
    }
}

impl Default for MockSubscriptionGroupGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubscriptionGroupGateway for MockSubscriptionGroupGateway {
    async fn groups_for_alert(&self, alert_id: &str) -> Result<Vec<SubscriptionGroup>> {
        match &self.groups_for_alert {
            Some(groups) => Ok(groups.clone()),
            None => Err(AlertDetailError::SubscriptionGroupStatus {
                alert_id: alert_id.to_string(),
                status: 500,
            }
            .into()),
        }
    }

    async fn query_all_groups(&self) -> Result<Vec<SubscriptionGroup>> {
        match &self.all_groups {
            Some(groups) => Ok(groups.clone()),
            None => Err(AlertDetailError::GroupQueryStatus { status: 500 }.into()),
        }
    }
}
