//! Core pipeline: snapshot source, topology assembly, risk analysis and
//! graph serialization, plus the output/render stage.
//!
//! The model is built once per run and never mutated afterwards, so the
//! two read-only passes over it are free to run side by side.

pub mod analysis;
pub mod assembly;
pub mod graph;
pub mod render;
pub mod source;

use cloudmappr_common::model::entity::Topology;
use cloudmappr_common::model::findings::Finding;

/// Runs the analysis and serialization passes over one topology.
///
/// Both passes are pure and the topology is read-only, so they run
/// concurrently; neither depends on the other's output.
pub fn run_passes(topology: &Topology) -> (Vec<Finding>, String) {
    rayon::join(
        || analysis::analyze(topology),
        || graph::serialize(topology),
    )
}
