pub mod alert_detail_model;
pub mod controller_init;

pub use alert_detail_model::AlertDetailModel;
pub use controller_init::ControllerInit;
