use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::{Edge, WeightedEdge};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// An undirected graph with a fixed vertex set.
///
/// Weights live in a map keyed by the canonical [`Edge`], so a weight lookup
/// for either orientation of a pair is a single hash probe. Adjacency lists
/// are kept sorted so neighbor iteration is deterministic.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Weight of every edge, keyed by canonical pair
    weights: HashMap<Edge, W>,

    /// Neighbor ids for each vertex, ascending
    adjacency: Vec<Vec<usize>>,
}

impl<W> UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a graph with the given number of vertices and no edges
    pub fn with_vertices(vertices: usize) -> Self {
        UndirectedGraph {
            vertex_count: vertices,
            weights: HashMap::new(),
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Builds a graph from a list of weighted edges.
    /// Edges touching unknown vertices are skipped; a repeated pair keeps the last weight.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = WeightedEdge<W>>,
    {
        let mut graph = Self::with_vertices(vertices);
        for WeightedEdge { edge, weight } in edges {
            graph.add_edge(edge.low(), edge.high(), weight);
        }
        graph
    }

    /// Returns the edges sorted by canonical pair
    pub fn sorted_edges(&self) -> Vec<WeightedEdge<W>> {
        let mut edges: Vec<_> = self.edges().collect();
        edges.sort_by_key(|e| e.edge);
        edges
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.weights.len()
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(list) => Box::new(list.iter().filter_map(move |&n| {
                Edge::new(vertex, n)
                    .and_then(|edge| self.weights.get(&edge))
                    .map(|&w| (n, w))
            })),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edges(&self) -> Box<dyn Iterator<Item = WeightedEdge<W>> + '_> {
        Box::new(
            self.weights
                .iter()
                .map(|(&edge, &weight)| WeightedEdge::new(edge, weight)),
        )
    }

    fn edge_weight(&self, a: usize, b: usize) -> Option<W> {
        Edge::new(a, b).and_then(|edge| self.weights.get(&edge).copied())
    }
}

impl<W> MutableGraph<W> for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_edge(&mut self, a: usize, b: usize, weight: W) -> bool {
        if !self.has_vertex(a) || !self.has_vertex(b) {
            return false;
        }
        let edge = match Edge::new(a, b) {
            Some(edge) => edge,
            None => return false,
        };

        if self.weights.insert(edge, weight).is_none() {
            for (from, to) in [(a, b), (b, a)] {
                let list = &mut self.adjacency[from];
                if let Err(pos) = list.binary_search(&to) {
                    list.insert(pos, to);
                }
            }
        }
        true
    }

    fn remove_edge(&mut self, a: usize, b: usize) -> bool {
        let removed = Edge::new(a, b)
            .and_then(|edge| self.weights.remove(&edge))
            .is_some();

        if removed {
            for (from, to) in [(a, b), (b, a)] {
                let list = &mut self.adjacency[from];
                if let Ok(pos) = list.binary_search(&to) {
                    list.remove(pos);
                }
            }
        }
        removed
    }
}
