/// Ports layer - Interface definitions
///
/// Only driven (outbound) ports exist here; the loader itself is invoked
/// directly by the CLI.
pub mod outbound;
