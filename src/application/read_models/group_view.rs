use serde::Serialize;

use crate::constants::{CREATE_GROUP_ID, CREATE_GROUP_TEXT, DEFAULT_SUBSCRIPTION_YAML};
use crate::ports::outbound::SubscriptionGroup;

/// One entry of the subscription-group dropdown.
///
/// Backend ids render as decimal strings; the sentinel create-group entry
/// carries the literal id `"n/a"` and the default yaml template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupOption {
    pub name: String,
    pub id: String,
    pub yaml: String,
}

impl GroupOption {
    /// The sentinel entry that opens the editor on a blank template.
    /// Never persisted.
    pub fn create_group() -> Self {
        Self {
            name: CREATE_GROUP_TEXT.to_string(),
            id: CREATE_GROUP_ID.to_string(),
            yaml: DEFAULT_SUBSCRIPTION_YAML.to_string(),
        }
    }

    pub fn from_record(record: &SubscriptionGroup) -> Self {
        Self {
            name: record.name.clone(),
            id: record
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| CREATE_GROUP_ID.to_string()),
            yaml: record.yaml.clone().unwrap_or_default(),
        }
    }

    pub fn is_create_group(&self) -> bool {
        self.id == CREATE_GROUP_ID
    }
}

/// One titled section of the grouped dropdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayGroupSection {
    pub group_name: String,
    pub options: Vec<GroupOption>,
}

impl DisplayGroupSection {
    pub fn new(group_name: &str, options: Vec<GroupOption>) -> Self {
        Self {
            group_name: group_name.to_string(),
            options,
        }
    }
}
