use std::time::Instant;
use log::info;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::config::SolverConfig;
use crate::io::{load_graph, ResultWriter};
use crate::{DenseDijkstra, Result};

/// Runs one solver pass: load the graph, compute shortest paths from the
/// configured source, write them out. Phase timings are logged at `info`.
pub fn run(config: &SolverConfig) -> Result<ShortestPathResult<f64>> {
    let t_start = Instant::now();
    let graph = load_graph(&config.input_file)?;

    let t_algorithm = Instant::now();
    let dijkstra = DenseDijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, config.source)?;
    info!(
        "{} reached {} of {} vertices from {}",
        dijkstra.name(),
        result.reachable_count(),
        result.distances.len(),
        config.source
    );

    let t_write = Instant::now();
    ResultWriter::new(config.format).write(&result.distances, &result.paths, &config.output_file)?;
    let t_end = Instant::now();

    info!("Total elapsed time: {:?}", t_end - t_start);
    info!("Setup took: {:?}", t_algorithm - t_start);
    info!("Algorithm took: {:?}", t_write - t_algorithm);
    info!("Writing results took: {:?}", t_end - t_write);

    Ok(result)
}
