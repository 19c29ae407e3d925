//! The **abstraction** over where an inventory snapshot comes from.
//!
//! The pipeline only ever sees a [`RawSnapshot`]; how it was obtained
//! (live provider query, file on disk, test fixture) is the source's
//! business. High-level code should depend on this trait rather than a
//! concrete source, so the provider query layer can stay out of the
//! core entirely.

use async_trait::async_trait;
use cloudmappr_common::model::snapshot::RawSnapshot;

mod file;

pub use file::SnapshotFile;

/// Produces one inventory snapshot per run.
#[async_trait]
pub trait InventorySource {
    /// Fetches the full snapshot. A failure here is fatal for the run;
    /// the pipeline never works from a partial snapshot.
    async fn fetch(&self) -> anyhow::Result<RawSnapshot>;
}
