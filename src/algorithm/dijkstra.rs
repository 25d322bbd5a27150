use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::{Error, Result};

/// Dijkstra's algorithm without a priority queue.
///
/// Each round scans the whole frontier for the closest vertex, which costs
/// O(V) per round and O(V^2) overall. That beats a heap on dense graphs,
/// where the edge count is already close to V^2.
#[derive(Debug, Default)]
pub struct DenseDijkstra;

impl DenseDijkstra {
    pub const NAME: &'static str = "Dense Dijkstra";

    /// Creates a new dense Dijkstra instance
    pub fn new() -> Self {
        DenseDijkstra
    }

    /// Get the name of the algorithm
    pub fn name(&self) -> &'static str {
        Self::NAME
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for DenseDijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Stops as soon as the closest frontier vertex is unreachable, so the
    /// frontier may still hold the unreachable vertices on return. Their
    /// distances and paths are already final at that point.
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        if !graph.has_vertex(source) {
            return Err(Error::MissingVertex {
                vertex: source,
                vertex_count: n,
            });
        }

        let mut distances = vec![W::infinity(); n];
        let mut paths: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut frontier = Frontier::full(n);
        distances[source] = W::zero();

        while let Some((vmin, dist_min)) = frontier.min_by_key(|v| distances[v]) {
            // Everything left is unreachable; relaxing from it cannot change anything.
            if dist_min.is_infinite() {
                debug!("{} vertices unreachable from {}", frontier.len(), source);
                break;
            }

            for (neighbor, weight) in graph.neighbors(vmin) {
                if !frontier.contains(neighbor) {
                    continue;
                }
                let candidate = dist_min + weight;
                if distances[neighbor] > candidate {
                    distances[neighbor] = candidate;
                    let mut path = paths[vmin].clone();
                    path.push(vmin);
                    paths[neighbor] = path;
                }
            }

            frontier.remove(vmin);
        }

        Ok(ShortestPathResult {
            distances,
            paths,
            source,
        })
    }
}
