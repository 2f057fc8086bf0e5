/// Mock implementations for testing
mod mock_detection_gateway;
mod mock_notifier;
mod mock_subscription_gateway;

pub use mock_detection_gateway::MockDetectionGateway;
pub use mock_notifier::MockNotifier;
pub use mock_subscription_gateway::MockSubscriptionGroupGateway;
