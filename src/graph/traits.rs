use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::WeightedEdge;

/// Trait representing a weighted undirected graph with vertices `0..vertex_count()`
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the neighbors of a vertex and the connecting edge weights
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns an iterator over every edge, each unordered pair reported once
    fn edges(&self) -> Box<dyn Iterator<Item = WeightedEdge<W>> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Gets the weight of the edge between `a` and `b` in either order
    fn edge_weight(&self, a: usize, b: usize) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds (or re-weights) the undirected edge between `a` and `b`.
    /// Returns false for self-loops and unknown vertices.
    fn add_edge(&mut self, a: usize, b: usize, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, a: usize, b: usize) -> bool;
}
