use super::subscription_gateway::SubscriptionGroup;

/// GroupStore port for the local subscription-group record cache
///
/// Fetched records land here as a side effect of the network calls; the
/// controller-defaults step reads them back with a full scan. The cache
/// outlives a single load only if the caller keeps it around.
pub trait GroupStore: Send + Sync {
    /// Snapshot of every cached record, in no particular order.
    fn peek_all(&self) -> Vec<SubscriptionGroup>;

    /// Inserts or replaces records by id. Records without an id are
    /// ignored; they cannot be addressed for replacement.
    fn put_all(&self, groups: &[SubscriptionGroup]);
}
