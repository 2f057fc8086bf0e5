use futures::join;

use crate::application::dto::{AlertDetailModel, ControllerInit};
use crate::application::read_models::{DetectionView, DisplayGroupSection, GroupOption};
use crate::constants::{CREATE_GROUP_ID, DEFAULT_SUBSCRIPTION_YAML, TOAST_OPTIONS};
use crate::ports::outbound::{
    DetectionGateway, GroupStore, Notifier, SubscriptionGroup, SubscriptionGroupGateway,
};

const DETECTION_FAILED_TEXT: &str = "Retrieval of alert yaml failed.";
const GROUPS_FAILED_TEXT: &str = "Retrieving subscription groups failed.";

/// LoadAlertDetailUseCase - assembles the detail view of one alert
///
/// Issues the three backend fetches concurrently, converts every failure
/// into a toast plus an unset field, and produces the aggregate model and
/// the initial controller bindings. The aggregate never fails; partial
/// results render as empty.
///
/// # Type Parameters
/// * `D` - DetectionGateway implementation
/// * `S` - SubscriptionGroupGateway implementation
/// * `G` - GroupStore implementation
/// * `N` - Notifier implementation
pub struct LoadAlertDetailUseCase<D, S, G, N> {
    detection_gateway: D,
    subscription_gateway: S,
    group_store: G,
    notifier: N,
}

impl<D, S, G, N> LoadAlertDetailUseCase<D, S, G, N>
where
    D: DetectionGateway,
    S: SubscriptionGroupGateway,
    G: GroupStore,
    N: Notifier,
{
    /// Creates a new LoadAlertDetailUseCase with injected dependencies
    pub fn new(detection_gateway: D, subscription_gateway: S, group_store: G, notifier: N) -> Self {
        Self {
            detection_gateway,
            subscription_gateway,
            group_store,
            notifier,
        }
    }

    /// Assembles the aggregate model for one alert.
    ///
    /// The three fetches have no ordering dependency and run
    /// concurrently; the join waits for all of them to settle. Each is
    /// independently guarded, so one failure never empties the others.
    pub async fn execute(&self, alert_id: &str) -> AlertDetailModel {
        let (detection, subscription_groups, subscription_group_names) = join!(
            self.load_detection(alert_id),
            self.load_subscription_groups(alert_id),
            self.load_all_group_names(),
        );

        let (alert_data, detection_yaml) = match detection {
            Some((view, raw_yaml)) => (Some(view), Some(raw_yaml)),
            None => (None, None),
        };
        let subscribed_groups = join_group_names(subscription_groups.as_deref());

        AlertDetailModel {
            alert_id: alert_id.to_string(),
            alert_data,
            detection_yaml,
            subscription_groups,
            subscribed_groups,
            subscription_group_names,
        }
    }

    /// Fetches and normalizes the detection definition.
    ///
    /// Returns the view paired with the raw yaml text retained for
    /// round-trip editing, or `None` after toasting the failure. A 2xx
    /// response without yaml is silently `None`.
    pub async fn load_detection(&self, alert_id: &str) -> Option<(DetectionView, String)> {
        let envelope = match self.detection_gateway.fetch_detection(alert_id).await {
            Ok(envelope) => envelope,
            Err(e) => {
                self.notifier
                    .error(DETECTION_FAILED_TEXT, &e.to_string(), &TOAST_OPTIONS);
                return None;
            }
        };

        let raw_yaml = envelope.yaml.clone()?;
        match DetectionView::from_envelope(alert_id, &envelope) {
            Ok(view) => view.map(|view| (view, raw_yaml)),
            Err(e) => {
                self.notifier
                    .error(DETECTION_FAILED_TEXT, &e.to_string(), &TOAST_OPTIONS);
                None
            }
        }
    }

    /// Fetches the groups subscribed to this alert, caching the records.
    pub async fn load_subscription_groups(&self, alert_id: &str) -> Option<Vec<SubscriptionGroup>> {
        match self.subscription_gateway.groups_for_alert(alert_id).await {
            Ok(groups) => {
                self.group_store.put_all(&groups);
                Some(groups)
            }
            Err(e) => {
                self.notifier
                    .error(GROUPS_FAILED_TEXT, &e.to_string(), &TOAST_OPTIONS);
                None
            }
        }
    }

    /// Queries every known subscription group and projects the name list.
    ///
    /// Always attempted regardless of the other fetches; a failure toasts
    /// once and contributes an empty list to the aggregate. The full
    /// records feed the local cache.
    pub async fn load_all_group_names(&self) -> Vec<String> {
        match self.subscription_gateway.query_all_groups().await {
            Ok(groups) => {
                self.group_store.put_all(&groups);
                groups.into_iter().map(|group| group.name).collect()
            }
            Err(e) => {
                self.notifier
                    .error(GROUPS_FAILED_TEXT, &e.to_string(), &TOAST_OPTIONS);
                Vec::new()
            }
        }
    }

    /// Builds the initial controller bindings from an assembled model.
    ///
    /// Other Groups come from the local record cache: active groups with
    /// non-empty yaml, name ascending.
    pub fn controller_defaults(&self, model: &AlertDetailModel) -> ControllerInit {
        let create_group = GroupOption::create_group();

        let subscribed: Vec<GroupOption> = model
            .subscription_groups
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(GroupOption::from_record)
            .collect();

        let mut others: Vec<GroupOption> = self
            .group_store
            .peek_all()
            .iter()
            .filter(|group| {
                group.active && group.yaml.as_deref().is_some_and(|yaml| !yaml.is_empty())
            })
            .map(GroupOption::from_record)
            .collect();
        others.sort_by(|a, b| a.name.cmp(&b.name));

        let sections = vec![
            DisplayGroupSection::new("Create Group", vec![create_group.clone()]),
            DisplayGroupSection::new("Subscribed Groups", subscribed),
            DisplayGroupSection::new("Other Groups", others),
        ];

        ControllerInit {
            alert_id: model.alert_id.clone(),
            selected_group: create_group.clone(),
            selected_group_id: CREATE_GROUP_ID.to_string(),
            subscription_yaml: DEFAULT_SUBSCRIPTION_YAML.to_string(),
            detection_yaml: model.detection_yaml.clone(),
            sections,
            create_group,
        }
    }
}

/// Comma-joins group names in enumeration order, skipping empty names.
fn join_group_names(groups: Option<&[SubscriptionGroup]>) -> String {
    let Some(groups) = groups else {
        return String::new();
    };
    groups
        .iter()
        .filter(|group| !group.name.is_empty())
        .map(|group| group.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
