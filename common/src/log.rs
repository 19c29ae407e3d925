//! Leveled logging macros shared across the workspace.
//!
//! Thin wrappers around `tracing` so call sites read as intent
//! (`success!`, `warn!`) while the CLI formatter decides how each level
//! is rendered. `success!` logs at INFO under a dedicated target, which
//! the formatter picks up to draw a check mark instead of the plain
//! info symbol.

/// Target used by [`success!`]; the CLI formatter matches on it.
pub const SUCCESS_TARGET: &str = "cloudmappr::success";

/// Target for raw, pre-formatted terminal output (no level symbol).
pub const RAW_TARGET: &str = "cloudmappr::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "cloudmappr::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!($($arg)*)
    };
}
