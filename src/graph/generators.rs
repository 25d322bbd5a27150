use crate::config::GeneratorConfig;
use crate::graph::{Edge, UndirectedGraph, WeightedEdge};
use crate::{Error, Result};
use log::{info, warn};
use rand::prelude::*;
use rand::seq::index;

/// Smallest weight the generator hands out; a zero entry would read back as "no edge"
const MIN_WEIGHT: f64 = 0.01;
const MAX_WEIGHT: f64 = 10.0;

/// Largest vertex count the generator accepts; the saved matrix grows with its square
pub const MAX_GENERATED_VERTICES: usize = 10_000;

/// Record of an edge count that had to be lowered to fit the vertex count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeClamp {
    pub vertices: usize,
    pub requested: usize,
    pub maximum: usize,
    pub chosen: usize,
}

impl EdgeClamp {
    /// The two warnings emitted for this clamp: the overflow, then the replacement value
    pub fn warnings(&self) -> [String; 2] {
        [
            format!(
                "Maximum number of edges for {} vertices is {} (requested {})",
                self.vertices,
                self.maximum,
                self.requested
            ),
            format!("Changing the number of edges to {}", self.chosen),
        ]
    }
}

/// A generated graph plus the clamp applied to its edge count, if any
#[derive(Debug, Clone)]
pub struct GeneratedGraph {
    pub graph: UndirectedGraph<f64>,
    pub clamp: Option<EdgeClamp>,
}

/// Maximum number of edges of a simple undirected graph on `vertices` vertices,
/// or `None` if that count does not fit in a `usize`
pub fn max_edges(vertices: usize) -> Option<usize> {
    vertices
        .checked_mul(vertices.saturating_sub(1))
        .map(|product| product / 2)
}

/// Maps `0..max_edges(v)` onto the pairs `{j, i}` with `j < i`, ordered by `i` then `j`
fn pair_at(k: usize) -> Option<Edge> {
    let mut i = ((1.0 + (1.0 + 8.0 * k as f64).sqrt()) / 2.0) as usize;
    while i > 1 && i * (i - 1) / 2 > k {
        i -= 1;
    }
    while (i + 1) * i / 2 <= k {
        i += 1;
    }
    Edge::new(k - i * (i - 1) / 2, i)
}

/// Generates a random undirected graph with `config.vertices` vertices and
/// `config.edges` distinct edges.
///
/// If more edges are requested than the vertex count allows, the count is
/// replaced by a random value in `0..=max_edges` and both facts are logged as
/// warnings. Weights are uniform in `[0.01, 10.0]`, rounded to two decimals.
///
/// Fails with [`Error::InvalidConfig`] when more than
/// [`MAX_GENERATED_VERTICES`] vertices are requested.
pub fn generate_random_graph<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<GeneratedGraph> {
    let maximum = match max_edges(config.vertices) {
        Some(maximum) if config.vertices <= MAX_GENERATED_VERTICES => maximum,
        _ => {
            return Err(Error::InvalidConfig(format!(
                "at most {} vertices can be generated, {} requested",
                MAX_GENERATED_VERTICES, config.vertices
            )))
        }
    };

    let clamp = if config.edges > maximum {
        let chosen = rng.gen_range(0..=maximum);
        let clamp = EdgeClamp {
            vertices: config.vertices,
            requested: config.edges,
            maximum,
            chosen,
        };
        for message in clamp.warnings() {
            warn!("{}", message);
        }
        Some(clamp)
    } else {
        None
    };
    let edge_count = clamp.map_or(config.edges, |c| c.chosen);

    // Distinct pair indices, without materializing every pair
    let chosen: Vec<Edge> = index::sample(rng, maximum, edge_count)
        .into_iter()
        .filter_map(pair_at)
        .collect();

    let edges: Vec<_> = chosen
        .into_iter()
        .map(|edge| {
            let weight = (rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT) * 100.0).round() / 100.0;
            WeightedEdge::new(edge, weight.max(MIN_WEIGHT))
        })
        .collect();

    info!(
        "Generated graph with {} vertices and {} edges",
        config.vertices,
        edges.len()
    );

    Ok(GeneratedGraph {
        graph: UndirectedGraph::from_edges(config.vertices, edges),
        clamp,
    })
}

/// Builds the RNG for a generator run: seeded when a seed is configured
pub fn rng_for(config: &GeneratorConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
