/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the loader uses to reach external
/// systems (detection backend, local record cache, toast channel).
pub mod detection_gateway;
pub mod group_store;
pub mod notifier;
pub mod subscription_gateway;

pub use detection_gateway::{DetectionEnvelope, DetectionGateway};
pub use group_store::GroupStore;
pub use notifier::Notifier;
pub use subscription_gateway::{SubscriptionGroup, SubscriptionGroupGateway};
