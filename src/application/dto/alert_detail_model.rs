use serde::Serialize;

use crate::application::read_models::DetectionView;
use crate::ports::outbound::SubscriptionGroup;

/// The assembled detail-view aggregate for one alert.
///
/// Request-scoped: one value per load, threaded through the renderer
/// instead of mutated shared fields. Unset fields mean the corresponding
/// fetch failed (already toasted) and simply render as empty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDetailModel {
    pub alert_id: String,
    /// Parsed detection view; `None` when the fetch or parse failed, or
    /// the envelope carried no yaml.
    pub alert_data: Option<DetectionView>,
    /// Raw yaml text retained verbatim for round-trip editing.
    pub detection_yaml: Option<String>,
    /// Groups subscribed to this alert, as the backend returned them.
    pub subscription_groups: Option<Vec<SubscriptionGroup>>,
    /// Comma-joined group names; empty when no groups were retrieved.
    pub subscribed_groups: String,
    /// Names of every subscription group known to the backend.
    pub subscription_group_names: Vec<String>,
}
