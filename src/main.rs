use std::path::PathBuf;
use std::process::ExitCode;

use bfs_paths::{loader, logging, sample_graph, shortest_paths, Graph, ShortestPaths};
use clap::Parser;
use tracing::{error, info};

/// Prints the shortest path from a source vertex to every vertex of a graph.
#[derive(Debug, Parser)]
#[command(name = "bfs_paths", version)]
struct Cli {
    /// CSV edge list with a `from,to` header; the built-in sample graph is used if omitted
    #[arg(long, value_name = "FILE")]
    edges: Option<PathBuf>,

    /// Vertex to measure paths from
    #[arg(long, default_value = "1")]
    source: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Explicit log level or filter directive
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// One output line per vertex in registration order.
fn format_paths(graph: &Graph<String>, paths: &ShortestPaths<String>) -> Vec<String> {
    graph
        .vertices()
        .map(|vertex| match paths.path_to(vertex) {
            Ok(path) => format!("shortest path to {:>2}: {}", vertex, path.join(", ")),
            Err(_) => format!("shortest path to {:>2}: unreachable", vertex),
        })
        .collect()
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let graph = match &cli.edges {
        Some(path) => loader::load_edge_list(path)?,
        None => sample_graph()?,
    };
    info!(vertices = graph.vertex_count(), edges = graph.edge_count(), "graph ready");

    let paths = shortest_paths(&graph, cli.source.clone())?;
    for line in format_paths(&graph, &paths) {
        println!("{}", line);
    } // prints source-first path for every vertex
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("failed to initialize logging: {}", err);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "aborting");
            ExitCode::FAILURE
        }
    }
}
