//! Output stage: inventory dump, graph description file, and the
//! external renderer invocation.
//!
//! Rendering is the only place the core shells out. The graph write and
//! the renderer run fail as distinct stages, so "we produced a bad graph
//! description" never gets mistaken for "the renderer fell over on a
//! good one".

use std::path::Path;

use cloudmappr_common::config::RenderFormat;
use cloudmappr_common::error::StageError;
use cloudmappr_common::model::entity::Topology;
use tokio::process::Command;

/// External renderer binary, resolved through `PATH`.
const RENDERER: &str = "dot";

/// Writes the assembled inventory as indented JSON.
pub async fn write_inventory(path: &Path, topology: &Topology) -> Result<(), StageError> {
    // Serialization of plain data cannot fail; only the write can.
    let json: String =
        serde_json::to_string_pretty(topology).expect("inventory model serializes to JSON");
    tokio::fs::write(path, json)
        .await
        .map_err(|source| StageError::InventoryWrite {
            path: path.to_path_buf(),
            source,
        })
}

/// Writes the graph description text to `path`.
pub async fn write_graph(path: &Path, text: &str) -> Result<(), StageError> {
    tokio::fs::write(path, text)
        .await
        .map_err(|source| StageError::GraphWrite {
            path: path.to_path_buf(),
            source,
        })
}

/// Invokes the external renderer on an already-written graph description.
pub async fn render_image(
    graph_path: &Path,
    image_path: &Path,
    format: RenderFormat,
) -> Result<(), StageError> {
    run_renderer(RENDERER, graph_path, image_path, format).await
}

async fn run_renderer(
    command: &str,
    graph_path: &Path,
    image_path: &Path,
    format: RenderFormat,
) -> Result<(), StageError> {
    let output = Command::new(command)
        .arg(format.renderer_flag())
        .arg(graph_path)
        .arg("-o")
        .arg(image_path)
        .output()
        .await
        .map_err(|source| StageError::RenderSpawn {
            command: command.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(StageError::RenderFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}
