use std::path::Path;
use log::info;

use crate::graph::{AdjacencyMatrix, Graph, UndirectedGraph};
use crate::Result;

/// Loads an adjacency matrix file into a graph.
///
/// Fails with [`crate::Error::Format`] when the row or column counts disagree
/// with the header, when a token is not a number, or when the file is empty or
/// truncated, and with [`crate::Error::Io`] when the file cannot be read.
pub fn load_graph(path: impl AsRef<Path>) -> Result<UndirectedGraph<f64>> {
    let path = path.as_ref();
    let graph = AdjacencyMatrix::load(path)?.to_graph();
    info!(
        "Loaded {} with {} vertices and {} edges",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
