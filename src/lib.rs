//! Dense Dijkstra - single-source shortest paths over adjacency-matrix graphs
//!
//! The library loads a weighted, undirected graph from a dense adjacency
//! matrix file, runs Dijkstra's algorithm from one source vertex without a
//! priority queue (a linear scan of the frontier per round, which suits small
//! or nearly complete graphs), and writes the resulting distances and
//! predecessor paths back to a text file.

use std::path::PathBuf;

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod solver;

pub use algorithm::{dijkstra::DenseDijkstra, ShortestPathAlgorithm, ShortestPathResult};
pub use config::{GeneratorConfig, OutputFormat, SolverConfig};
/// Re-export main types for convenient use
pub use graph::{AdjacencyMatrix, Edge, UndirectedGraph, WeightedEdge};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Malformed adjacency matrix at line {line}: {message}")]
    Format { line: usize, message: String },

    #[error("Source vertex {vertex} is not in the graph (vertex count {vertex_count})")]
    MissingVertex { vertex: usize, vertex_count: usize },

    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Error::Format {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
