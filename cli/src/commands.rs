pub mod audit;
pub mod graph;
pub mod map;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use cloudmappr_common::config::RenderFormat;
use cloudmappr_common::model::entity::Topology;
use cloudmappr_common::success;
use cloudmappr_core::assembly;
use cloudmappr_core::source::SnapshotFile;
use tracing::info_span;

/// Machine-readable inventory written by `map`.
pub const INVENTORY_FILE: &str = "aws_resources.json";
/// Graph description handed to the external renderer.
pub const GRAPH_FILE: &str = "network_map.dot";
/// Stem of the rendered image; the extension follows the render format.
pub const IMAGE_STEM: &str = "network_map";

#[derive(Parser)]
#[command(name = "cloudmappr")]
#[command(about = "A cloud network topology mapper.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress decorative output (repeat to also drop report sections)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Stop after writing the graph description (skip the renderer)
    #[arg(long, global = true)]
    pub no_render: bool,

    /// Image format produced by the external renderer
    #[arg(long, global = true, default_value = "png")]
    pub format: RenderFormat,

    /// Directory receiving the run's output files
    #[arg(long, global = true, default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map the topology: inventory, graph, rendered diagram, findings
    #[command(alias = "m")]
    Map { snapshot: PathBuf },
    /// Evaluate the risk rules and report findings only
    #[command(alias = "a")]
    Audit {
        snapshot: PathBuf,
        /// Emit findings as JSON instead of report lines
        #[arg(long)]
        json: bool,
    },
    /// Write the graph description without invoking the renderer
    #[command(alias = "g")]
    Graph { snapshot: PathBuf },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Loads and assembles the snapshot every subcommand starts from.
pub(crate) async fn load_topology(snapshot: &Path) -> anyhow::Result<Topology> {
    let span = info_span!("assembling topology", indicatif.pb_show = true);
    let guard = span.enter();

    let source = SnapshotFile::new(snapshot);
    let topology: Topology = assembly::build_topology(&source).await?;

    drop(guard);

    success!(
        "Assembled {} resources from {}",
        topology.resource_count(),
        snapshot.display()
    );
    Ok(topology)
}
