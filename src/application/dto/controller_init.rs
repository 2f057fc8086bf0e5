use serde::Serialize;

use crate::application::read_models::{DisplayGroupSection, GroupOption};

/// Initial controller bindings for the edit form.
///
/// The selection defaults to the sentinel create-group entry so a new
/// group can be authored immediately.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerInit {
    pub alert_id: String,
    pub create_group: GroupOption,
    /// The three fixed dropdown sections: Create Group, Subscribed
    /// Groups, Other Groups.
    pub sections: Vec<DisplayGroupSection>,
    pub selected_group: GroupOption,
    pub selected_group_id: String,
    pub subscription_yaml: String,
    pub detection_yaml: Option<String>,
}
