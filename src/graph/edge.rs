/// An unordered pair of distinct vertices.
///
/// The pair is stored in canonical form (smaller id first), so `Edge::new(a, b)`
/// and `Edge::new(b, a)` are equal and hash to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    low: usize,
    high: usize,
}

impl Edge {
    /// Creates the canonical edge between `a` and `b`.
    /// Returns `None` for a self-loop.
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Edge { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Edge { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The smaller endpoint
    pub fn low(&self) -> usize {
        self.low
    }

    /// The larger endpoint
    pub fn high(&self) -> usize {
        self.high
    }
}

/// An edge together with its weight.
///
/// Weights are expected to be nonnegative; this is a precondition of the
/// shortest path engine and is not checked here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge<W> {
    pub edge: Edge,
    pub weight: W,
}

impl<W> WeightedEdge<W> {
    pub fn new(edge: Edge, weight: W) -> Self {
        WeightedEdge { edge, weight }
    }
}
