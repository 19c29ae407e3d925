use std::path::{Path, PathBuf};
use std::time::Instant;

use cloudmappr_common::config::Config;
use cloudmappr_common::model::entity::Topology;
use cloudmappr_common::success;
use cloudmappr_core::render;

use crate::mprint;
use crate::terminal::{format, print, spinner};

use super::{GRAPH_FILE, IMAGE_STEM, INVENTORY_FILE, load_topology};

pub async fn map(snapshot: &Path, cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();

    let topology: Topology = load_topology(snapshot).await?;

    let inventory_path: PathBuf = cfg.out_dir.join(INVENTORY_FILE);
    render::write_inventory(&inventory_path, &topology).await?;
    success!("Raw inventory saved to {}", inventory_path.display());

    let (findings, graph_text) = cloudmappr_core::run_passes(&topology);

    let graph_path: PathBuf = cfg.out_dir.join(GRAPH_FILE);
    render::write_graph(&graph_path, &graph_text).await?;
    success!("Graph description saved to {}", graph_path.display());

    if !cfg.no_render {
        let image_path: PathBuf = cfg
            .out_dir
            .join(format!("{IMAGE_STEM}.{}", cfg.format.extension()));

        let pb = spinner::start_stage_spinner("Rendering diagram...");
        let rendered = render::render_image(&graph_path, &image_path, cfg.format).await;
        pb.finish_and_clear();
        rendered?;

        success!("Diagram saved as {}", image_path.display());
    }

    inventory_summary(&topology, cfg);
    topology_trees(&topology, cfg);
    print::findings_report(&findings, cfg);
    print::run_summary("Mapping", topology.resource_count(), findings.len(), start_time.elapsed(), cfg);
    Ok(())
}

fn inventory_summary(topology: &Topology, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    print::header("Inventory", cfg.quiet);
    let keys: [&str; 5] = [
        "Networks",
        "Subnets",
        "Instances",
        "Security Groups",
        "Load Balancers",
    ];
    print::set_key_width(&keys);
    print::aligned_line(keys[0], topology.networks.len().to_string());
    print::aligned_line(keys[1], topology.subnets.len().to_string());
    print::aligned_line(keys[2], topology.instances.len().to_string());
    print::aligned_line(keys[3], topology.security_groups.len().to_string());
    print::aligned_line(keys[4], topology.load_balancers.len().to_string());
}

fn topology_trees(topology: &Topology, cfg: &Config) {
    if cfg.quiet > 0 || topology.networks.is_empty() {
        return;
    }

    print::header("Network Topology", cfg.quiet);
    for (idx, network) in topology.networks.iter().enumerate() {
        print::tree_head(idx, &network.name);
        print::as_tree_one_level(format::network_details(network, topology));
        if idx + 1 != topology.networks.len() {
            mprint!();
        }
    }
}
