use std::path::Path;
use std::time::Instant;

use cloudmappr_common::config::Config;
use cloudmappr_common::model::entity::Topology;
use cloudmappr_common::model::findings::Finding;
use cloudmappr_core::analysis;

use crate::terminal::print;

use super::load_topology;

pub async fn audit(snapshot: &Path, json: bool, cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();

    let topology: Topology = load_topology(snapshot).await?;
    let findings: Vec<Finding> = analysis::analyze(&topology);

    if json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
        return Ok(());
    }

    print::findings_report(&findings, cfg);
    print::run_summary(
        "Audit",
        topology.resource_count(),
        findings.len(),
        start_time.elapsed(),
        cfg,
    );
    Ok(())
}
