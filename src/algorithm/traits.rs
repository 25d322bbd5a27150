use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex; `W::infinity()` marks an unreachable vertex
    pub distances: Vec<W>,

    /// For each vertex, the vertices on its shortest path from the source up to,
    /// but not including, the vertex itself. Empty for the source and for
    /// unreachable vertices.
    pub paths: Vec<Vec<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns true if `vertex` has a finite distance
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distances.get(vertex).map_or(false, |d| d.is_finite())
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// The vertex visited right before `vertex` on its shortest path
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.paths.get(vertex).and_then(|path| path.last().copied())
    }

    /// The shortest path from the source to `target`, both ends included.
    /// Returns `None` if the target is unknown or unreachable.
    pub fn full_path(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = self.paths[target].clone();
        path.push(target);
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target, both ends included
    fn full_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.full_path(target)
    }
}
