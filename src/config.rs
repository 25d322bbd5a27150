use std::path::PathBuf;

/// Format of the results file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `vertex path_weight path_verticles` table, one line per vertex
    #[default]
    Text,
    /// JSON array of `{ vertex, distance, path }` records
    Json,
}

/// Configuration for one solver run
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Adjacency matrix file to read
    pub input_file: PathBuf,
    /// Vertex the distances are measured from
    pub source: usize,
    /// Results file, created or overwritten
    pub output_file: PathBuf,
    pub format: OutputFormat,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("graph.dat"),
            source: 0,
            output_file: PathBuf::from("output.dat"),
            format: OutputFormat::Text,
        }
    }
}

/// Configuration for random graph generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub vertices: usize,
    /// Requested edge count; clamped when it exceeds `vertices * (vertices - 1) / 2`
    pub edges: usize,
    pub output_file: PathBuf,
    /// Fixed seed for reproducible graphs
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vertices: 10,
            edges: 10,
            output_file: PathBuf::from("graph.dat"),
            seed: None,
        }
    }
}
