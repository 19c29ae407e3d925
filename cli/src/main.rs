mod commands;
mod terminal;

use commands::{CommandLine, Commands, audit, graph, map};
use cloudmappr_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        no_render: commands.no_render,
        format: commands.format,
        out_dir: commands.out_dir.clone(),
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Map { snapshot } => map::map(&snapshot, &cfg).await,
        Commands::Audit { snapshot, json } => audit::audit(&snapshot, json, &cfg).await,
        Commands::Graph { snapshot } => graph::graph(&snapshot, &cfg).await,
    }
}
