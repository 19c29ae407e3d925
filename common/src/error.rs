//! Fatal failure taxonomy for one mapping run.
//!
//! Every variant names the pipeline stage that failed so an operator can
//! tell a bad graph description apart from a renderer that choked on a
//! good one. Incomplete inventory records never show up here: assembly
//! drops them silently, and a denied load-balancer listing degrades to an
//! empty collection with a warning.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StageError {
    /// The snapshot source could not produce an inventory at all.
    #[error("snapshot source failed: {0}")]
    Snapshot(#[source] anyhow::Error),

    #[error("failed to write inventory to {}: {source}", .path.display())]
    InventoryWrite { path: PathBuf, source: io::Error },

    #[error("failed to write graph description to {}: {source}", .path.display())]
    GraphWrite { path: PathBuf, source: io::Error },

    /// The renderer binary could not be started (missing install, perms).
    #[error("failed to launch graph renderer '{command}': {source}")]
    RenderSpawn { command: String, source: io::Error },

    /// The renderer ran on a valid graph description and still failed.
    #[error("graph renderer exited with {status}: {stderr}")]
    RenderFailed { status: ExitStatus, stderr: String },
}
