/// The set of vertices whose shortest distance is not final yet.
///
/// Backed by a membership flag per vertex rather than a list of ids, so
/// "all vertices" and "remaining vertices" never share storage.
#[derive(Debug, Clone)]
pub struct Frontier {
    /// `pending[v]` is true while `v` is still in the frontier
    pending: Vec<bool>,
    /// Number of true entries in `pending`
    remaining: usize,
}

impl Frontier {
    /// Creates a frontier holding every vertex in `0..vertex_count`
    pub fn full(vertex_count: usize) -> Self {
        Frontier {
            pending: vec![true; vertex_count],
            remaining: vertex_count,
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Returns the number of vertices still in the frontier
    pub fn len(&self) -> usize {
        self.remaining
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.pending.get(vertex).copied().unwrap_or(false)
    }

    /// Removes a vertex. Returns false if it was not in the frontier.
    pub fn remove(&mut self, vertex: usize) -> bool {
        match self.pending.get_mut(vertex) {
            Some(flag) if *flag => {
                *flag = false;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }

    /// Returns the vertices still in the frontier, ascending
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.pending
            .iter()
            .enumerate()
            .filter_map(|(v, &pending)| pending.then_some(v))
    }

    /// Returns the frontier vertex with the smallest key.
    ///
    /// Ties go to the lowest vertex id: vertices are scanned in ascending order
    /// and a later vertex only wins with a strictly smaller key.
    pub fn min_by_key<K, F>(&self, mut key: F) -> Option<(usize, K)>
    where
        K: PartialOrd + Copy,
        F: FnMut(usize) -> K,
    {
        let mut best: Option<(usize, K)> = None;
        for v in self.iter() {
            let k = key(v);
            let better = match best {
                Some((_, best_key)) => k < best_key,
                None => true,
            };
            if better {
                best = Some((v, k));
            }
        }
        best
    }
}
