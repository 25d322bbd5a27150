use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use dense_dijkstra::{solver, OutputFormat, SolverConfig};

/// Shortest paths from one vertex of a graph stored as an adjacency matrix
#[derive(Parser, Debug)]
#[command(name = "dijkstra", version)]
struct Cli {
    /// Input file with the adjacency matrix
    #[arg(value_name = "FILE")]
    input_file: PathBuf,

    /// Vertex to start the algorithm from
    #[arg(value_name = "VERTEX")]
    start_vertex: usize,

    /// Output file with distances and paths
    #[arg(short, long, value_name = "FILE", default_value = "output.dat")]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl From<Cli> for SolverConfig {
    fn from(cli: Cli) -> Self {
        SolverConfig {
            input_file: cli.input_file,
            source: cli.start_vertex,
            output_file: cli.output,
            format: cli.format,
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SolverConfig::from(Cli::parse());
    match solver::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
