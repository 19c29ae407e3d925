use std::path::{Path, PathBuf};

use cloudmappr_common::config::Config;
use cloudmappr_common::model::entity::Topology;
use cloudmappr_common::success;
use cloudmappr_core::render;

use super::{GRAPH_FILE, load_topology};

pub async fn graph(snapshot: &Path, cfg: &Config) -> anyhow::Result<()> {
    let topology: Topology = load_topology(snapshot).await?;
    let graph_text: String = cloudmappr_core::graph::serialize(&topology);

    let graph_path: PathBuf = cfg.out_dir.join(GRAPH_FILE);
    render::write_graph(&graph_path, &graph_text).await?;
    success!("Graph description saved to {}", graph_path.display());
    Ok(())
}
