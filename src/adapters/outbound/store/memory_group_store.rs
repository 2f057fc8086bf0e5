use dashmap::DashMap;
use std::sync::Arc;

use crate::ports::outbound::{GroupStore, SubscriptionGroup};

/// MemoryGroupStore adapter - in-memory subscription-group record cache
///
/// Thread-safe and cheap to clone; records fetched by the loader land
/// here keyed by id, and the controller-defaults step scans them back
/// out. Records without an id are skipped: they cannot be addressed for
/// replacement on a later fetch.
#[derive(Clone, Default)]
pub struct MemoryGroupStore {
    records: Arc<DashMap<u64, SubscriptionGroup>>,
}

impl MemoryGroupStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(DashMap::new()),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl GroupStore for MemoryGroupStore {
    fn peek_all(&self) -> Vec<SubscriptionGroup> {
        self.records
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn put_all(&self, groups: &[SubscriptionGroup]) {
        for group in groups {
            if let Some(id) = group.id {
                self.records.insert(id, group.clone());
            }
        }
    }
}
