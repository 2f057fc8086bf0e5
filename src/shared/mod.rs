/// Shared utilities and error types
pub mod error;
pub mod result;

pub use error::AlertDetailError;
pub use result::Result;
