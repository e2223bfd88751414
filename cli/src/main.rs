//! CLI entry point for the `graph-search` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use graph_search_core::{GraphError, VertexId};

mod commands;

use commands::{Algorithm, Format};

#[derive(Parser)]
#[command(
    name = "graph-search",
    about = "Reachability and shortest unweighted paths over undirected graphs"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Breadth-first search over the built-in 13-vertex sample graph
    Demo,
    /// Print every arc of an edge-list file as "v -> w"
    Dump {
        /// Edge-list file: vertex count, edge count, then "v w" lines
        file: PathBuf,
    },
    /// Traverse an edge-list file from a source vertex
    Search {
        /// Edge-list file: vertex count, edge count, then "v w" lines
        file: PathBuf,
        /// Source vertex
        #[arg(long, default_value = "0")]
        source: VertexId,
        /// Traversal algorithm
        #[arg(long, value_enum, default_value_t = Algorithm::Bfs)]
        algorithm: Algorithm,
        /// Vertices to report on (default: every reachable vertex)
        #[arg(long = "target")]
        targets: Vec<VertexId>,
    },
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder
            .filter_module("graph_search", LevelFilter::Debug)
            .filter_module("graph_search_core", LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Demo => commands::cmd_demo(cli.format),
        Commands::Dump { file } => commands::cmd_dump(&file, cli.format),
        Commands::Search {
            file,
            source,
            algorithm,
            targets,
        } => commands::cmd_search(&file, source, algorithm, &targets, cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } => 2,
            GraphError::EmptyGraph
            | GraphError::TooLarge { .. }
            | GraphError::VertexOutOfRange { .. } => 4,
        };
        process::exit(code);
    }
}
