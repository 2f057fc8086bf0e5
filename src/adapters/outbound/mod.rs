/// Outbound adapters - concrete implementations of the driven ports
pub mod console;
pub mod network;
pub mod store;
