//! CLI entry point for the `pgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use pathgraph::cli::commands;
use pathgraph::config::{Config, OutputFormat};
use pathgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "pgraph",
    about = "pgraph — distance and shortest-path queries over undirected edge lists"
)]
struct Cli {
    /// Output format: "text" or "json" (defaults to the config value)
    #[arg(long)]
    format: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize an edge-list file
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// List the neighbours of a vertex
    Neighbours {
        /// Path to the edge-list file
        file: PathBuf,
        /// Vertex name
        vertex: String,
    },
    /// Distance between two vertices ("inf" when unreachable)
    Distance {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex
        start: String,
        /// Target vertex
        target: String,
    },
    /// BFS distance tree from start, stopping at target
    Tree {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex
        start: String,
        /// Target vertex
        target: String,
    },
    /// A shortest path between two vertices
    Path {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex
        start: String,
        /// Target vertex
        target: String,
    },
    /// Distances to every vertex reachable from start
    Reach {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex
        start: String,
    },
}

fn exit_code(err: &GraphError) -> i32 {
    match err {
        GraphError::Io(_) => 1,
        GraphError::Parse { .. } | GraphError::Config(_) => 2,
        GraphError::NotFound(_) | GraphError::EdgeNotFound { .. } => 4,
        GraphError::NotConnected { .. } | GraphError::SelfLoop(_) => 5,
    }
}

fn fail(err: GraphError) -> ! {
    eprintln!("Error: {}", err);
    process::exit(exit_code(&err));
}

fn main() {
    let cli = Cli::parse();

    let (config, source) = Config::resolve(cli.config.as_deref()).unwrap_or_else(|e| fail(e));

    let filter = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
    source.report();

    let format = match cli.format.as_deref() {
        None => config.output.format,
        Some(name) => match OutputFormat::from_name(name) {
            Some(format) => format,
            None => {
                eprintln!("Invalid output format: {}", name);
                process::exit(3);
            }
        },
    };
    let graph_config = &config.graph;

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, graph_config, format),
        Commands::Neighbours { file, vertex } => {
            commands::cmd_neighbours(&file, &vertex, graph_config, format)
        }
        Commands::Distance {
            file,
            start,
            target,
        } => commands::cmd_distance(&file, &start, &target, graph_config, format),
        Commands::Tree {
            file,
            start,
            target,
        } => commands::cmd_tree(&file, &start, &target, graph_config, format),
        Commands::Path {
            file,
            start,
            target,
        } => commands::cmd_path(&file, &start, &target, graph_config, format),
        Commands::Reach { file, start } => commands::cmd_reach(&file, &start, graph_config, format),
    };

    if let Err(e) = result {
        fail(e);
    }
}
