use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use dense_dijkstra::graph::generators::{generate_random_graph, rng_for};
use dense_dijkstra::{AdjacencyMatrix, GeneratorConfig};

/// Generate the adjacency matrix of a random graph with the given number of vertices and edges
#[derive(Parser, Debug)]
#[command(name = "generate_graph", version)]
struct Cli {
    /// Number of edges
    #[arg(short, long, value_name = "E", default_value_t = 10)]
    edges: usize,

    /// Number of vertices
    #[arg(short, long, value_name = "V", default_value_t = 10)]
    vertices: usize,

    /// Name of output file
    #[arg(short, long, value_name = "FILE", default_value = "graph.dat")]
    file: PathBuf,

    /// Seed for a reproducible graph
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = GeneratorConfig {
        vertices: cli.vertices,
        edges: cli.edges,
        output_file: cli.file,
        seed: cli.seed,
    };

    let mut rng = rng_for(&config);
    let saved = generate_random_graph(&config, &mut rng)
        .and_then(|generated| AdjacencyMatrix::from_graph(&generated.graph).save(&config.output_file));
    match saved {
        Ok(()) => {
            info!("Saved adjacency matrix to {}", config.output_file.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
