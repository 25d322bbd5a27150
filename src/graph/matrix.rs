use log::{debug, warn};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::graph::{Edge, Graph, UndirectedGraph, WeightedEdge};
use crate::{Error, Result};

/// A dense, square adjacency matrix as stored in graph files.
///
/// The text form is a header line holding the vertex count `V`, followed by
/// `V` rows of `V` whitespace-separated numbers. A positive entry at `[i][j]`
/// is an edge of that weight; `0` means no edge.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    size: usize,
    /// Row-major entries
    data: Vec<f64>,
}

impl AdjacencyMatrix {
    /// Creates an all-zero matrix for `size` vertices
    pub fn zeros(size: usize) -> Self {
        AdjacencyMatrix {
            size,
            data: vec![0.0; size * size],
        }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at `[row][col]`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`size`](Self::size).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.size && col < self.size,
            "index [{}][{}] out of range for a {}x{} matrix",
            row,
            col,
            self.size,
            self.size
        );
        self.data[row * self.size + col]
    }

    /// Sets `[a][b]` and `[b][a]` to `weight`
    pub fn set_symmetric(&mut self, a: usize, b: usize, weight: f64) {
        self.data[a * self.size + b] = weight;
        self.data[b * self.size + a] = weight;
    }

    /// Parses the text form of a matrix.
    pub fn parse(input: &str) -> Result<Self> {
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (header_line, header) = lines
            .next()
            .ok_or_else(|| Error::format(1, "file is empty"))?;
        let size: usize = header.parse().map_err(|_| {
            Error::format(
                header_line,
                format!("expected the vertex count, found `{}`", header),
            )
        })?;

        if size.checked_mul(size).is_none() {
            return Err(Error::format(
                header_line,
                format!("vertex count {} is too large", size),
            ));
        }

        // Grows with the rows actually read, never with the header value.
        let mut data = Vec::new();
        let mut last_line = header_line;
        for row in 0..size {
            let (line_no, line) = lines.next().ok_or_else(|| {
                Error::format(
                    last_line + 1,
                    format!("file is truncated: expected {} rows, found {}", size, row),
                )
            })?;
            last_line = line_no;

            let before = data.len();
            for token in line.split_whitespace() {
                let value: f64 = token.parse().map_err(|_| {
                    Error::format(line_no, format!("non-numeric token `{}`", token))
                })?;
                data.push(value);
            }
            let columns = data.len() - before;
            if columns != size {
                return Err(Error::format(
                    line_no,
                    format!("expected {} columns, found {}", size, columns),
                ));
            }
        }

        if let Some((line_no, _)) = lines.next() {
            return Err(Error::format(
                line_no,
                format!("expected {} rows, found more", size),
            ));
        }

        Ok(AdjacencyMatrix { size, data })
    }

    /// Reads and parses a matrix file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let matrix = Self::parse(&contents)?;
        debug!("Read {}x{} matrix from {}", matrix.size, matrix.size, path.display());
        Ok(matrix)
    }

    /// Writes the text form of the matrix, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|e| Error::io(path, e))
    }

    /// Builds the symmetric matrix of a graph
    pub fn from_graph<G: Graph<f64>>(graph: &G) -> Self {
        let mut matrix = Self::zeros(graph.vertex_count());
        for WeightedEdge { edge, weight } in graph.edges() {
            matrix.set_symmetric(edge.low(), edge.high(), weight);
        }
        matrix
    }

    /// Extracts the graph from the lower triangle: every `[i][j]` with `i > j`
    /// and a positive value becomes an edge.
    ///
    /// Nonzero diagonal entries, asymmetric pairs and negative entries are
    /// reported as warnings and otherwise ignored.
    pub fn to_graph(&self) -> UndirectedGraph<f64> {
        let mut edges = Vec::new();
        let mut asymmetric = 0usize;
        let mut negative = 0usize;

        for i in 0..self.size {
            for j in 0..i {
                let weight = self.get(i, j);
                if weight != self.get(j, i) {
                    asymmetric += 1;
                }
                if weight < 0.0 {
                    negative += 1;
                }
                if weight > 0.0 {
                    if let Some(edge) = Edge::new(i, j) {
                        edges.push(WeightedEdge::new(edge, weight));
                    }
                }
            }
        }

        let diagonal = (0..self.size).filter(|&i| self.get(i, i) != 0.0).count();
        if diagonal > 0 {
            warn!("{} nonzero diagonal entries ignored", diagonal);
        }
        if asymmetric > 0 {
            warn!(
                "{} asymmetric vertex pairs; using the lower triangle",
                asymmetric
            );
        }
        if negative > 0 {
            warn!("{} negative entries ignored", negative);
        }

        UndirectedGraph::from_edges(self.size, edges)
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size)?;
        for row in self.data.chunks(self.size.max(1)).take(self.size) {
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str("  ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
