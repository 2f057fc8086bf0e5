//! alert-detail - Detail-view loader for anomaly-detection alerts
//!
//! This library fetches a detection definition (a YAML document plus its
//! audit envelope) and the related subscription groups from a detection
//! backend, normalizes them into display models, and assembles the
//! aggregate the detail page renders along with the initial edit-form
//! defaults.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Application Layer** (`application`): the loader use case, read
//!   models, and DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common result and error types
//!
//! Every backend fetch is independently fault-tolerant: a failure is
//! reported through the notification channel and leaves its field unset,
//! and the aggregate always resolves.
//!
//! # Example
//!
//! ```no_run
//! use alert_detail::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let client = DetectionApiClient::new("http://localhost:1426")?;
//! let store = MemoryGroupStore::new();
//! let notifier = StderrToastNotifier::new();
//!
//! // Create use case
//! let use_case = LoadAlertDetailUseCase::new(client.clone(), client, store, notifier);
//!
//! // Execute
//! let model = use_case.execute("1234").await;
//! let controller = use_case.controller_defaults(&model);
//!
//! println!("{}", model.subscribed_groups);
//! println!("{} sections", controller.sections.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrToastNotifier;
    pub use crate::adapters::outbound::network::DetectionApiClient;
    pub use crate::adapters::outbound::store::MemoryGroupStore;
    pub use crate::application::dto::{AlertDetailModel, ControllerInit};
    pub use crate::application::read_models::{DetectionView, DisplayGroupSection, GroupOption};
    pub use crate::application::use_cases::LoadAlertDetailUseCase;
    pub use crate::constants::{
        ToastOptions, ToastPosition, CREATE_GROUP_ID, CREATE_GROUP_TEXT,
        DEFAULT_SUBSCRIPTION_YAML, TOAST_OPTIONS,
    };
    pub use crate::ports::outbound::{
        DetectionEnvelope, DetectionGateway, GroupStore, Notifier, SubscriptionGroup,
        SubscriptionGroupGateway,
    };
    pub use crate::shared::{AlertDetailError, Result};
}
