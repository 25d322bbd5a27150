pub mod traits;
pub mod edge;
pub mod undirected;
pub mod matrix;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use edge::{Edge, WeightedEdge};
pub use undirected::UndirectedGraph;
pub use matrix::AdjacencyMatrix;
