use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use cloudmappr_common::model::snapshot::RawSnapshot;

use super::InventorySource;

/// A snapshot source backed by a provider-shaped JSON file on disk.
///
/// This is the stand-in for the live provider query layer: a collector
/// dumps its inventory once, and every later stage works from that file.
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl InventorySource for SnapshotFile {
    async fn fetch(&self) -> anyhow::Result<RawSnapshot> {
        let bytes: Vec<u8> = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("reading snapshot file {}", self.path.display()))?;
        let snapshot: RawSnapshot = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing snapshot file {}", self.path.display()))?;
        Ok(snapshot)
    }
}
