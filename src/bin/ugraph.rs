//! CLI entry point for the `ugraph` command-line tool.

use std::io;
use std::process;

use clap::{Parser, Subcommand};

use undigraph::cli::commands;
use undigraph::GraphError;

#[derive(Parser)]
#[command(
    name = "ugraph",
    about = "ugraph — run DFS, completeness, isomorphism and MST checks on example graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available preset graphs
    Presets,
    /// Print a preset's adjacency and counts
    Show {
        /// Preset name
        graph: String,
    },
    /// Check whether a preset is complete
    Complete {
        /// Preset name
        graph: String,
    },
    /// Degree-signature isomorphism check between two presets
    Iso {
        /// First preset
        first: String,
        /// Second preset
        second: String,
    },
    /// Depth-first traversal
    Dfs {
        /// Preset name
        graph: String,
        /// Start vertex
        start: String,
        /// Print discovery edges instead of visited vertices
        #[arg(long)]
        edges: bool,
    },
    /// Minimum spanning tree (Prim)
    Mst {
        /// Preset name
        graph: String,
        /// Start vertex (defaults to the first vertex)
        #[arg(long)]
        start: Option<String>,
    },
    /// Run the demonstration sequence
    Demo,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Presets => commands::cmd_presets(&mut out, json),
        Commands::Show { graph } => commands::cmd_show(&mut out, &graph, json),
        Commands::Complete { graph } => commands::cmd_complete(&mut out, &graph, json),
        Commands::Iso { first, second } => commands::cmd_iso(&mut out, &first, &second, json),
        Commands::Dfs {
            graph,
            start,
            edges,
        } => commands::cmd_dfs(&mut out, &graph, &start, edges, json),
        Commands::Mst { graph, start } => {
            commands::cmd_mst(&mut out, &graph, start.as_deref(), json)
        }
        Commands::Demo => commands::cmd_demo(&mut out, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) | GraphError::Json(_) => 1,
            GraphError::UnknownPreset(_) => 3,
            GraphError::VertexNotFound(_) => 4,
            GraphError::EmptyGraph | GraphError::Disconnected(_) => 5,
        };
        process::exit(code);
    }
}
