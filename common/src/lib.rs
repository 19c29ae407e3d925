pub mod config;
pub mod error;
pub mod log;
pub mod model;

// Re-exported so the logging macros can expand inside downstream crates
// without forcing each of them to depend on `tracing` directly.
pub use tracing;
