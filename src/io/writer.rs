use std::fmt::{Debug, Display};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;
use num_traits::Float;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::{Error, Result};

/// Header line of the text results format
pub const TEXT_HEADER: &str = "vertex path_weight path_verticles";

#[derive(Debug, Serialize)]
struct VertexRecord<'a> {
    vertex: usize,
    /// `None` for unreachable vertices
    distance: Option<f64>,
    path: &'a [usize],
}

/// Serializes distances and predecessor paths, one entry per vertex
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultWriter {
    format: OutputFormat,
}

impl ResultWriter {
    pub fn new(format: OutputFormat) -> Self {
        ResultWriter { format }
    }

    /// Writes the results to `out`.
    ///
    /// Text lines read `<id> <distance> [<p0>, <p1>, ...]`, with `inf` as the
    /// distance of an unreachable vertex.
    pub fn write_to<W, O>(&self, distances: &[W], paths: &[Vec<usize>], out: &mut O) -> io::Result<()>
    where
        W: Float + Display + Debug,
        O: Write,
    {
        match self.format {
            OutputFormat::Text => {
                writeln!(out, "{}", TEXT_HEADER)?;
                for (vertex, (distance, path)) in distances.iter().zip(paths).enumerate() {
                    writeln!(out, "{} {} {:?}", vertex, distance, path)?;
                }
            }
            OutputFormat::Json => {
                let records: Vec<_> = distances
                    .iter()
                    .zip(paths)
                    .enumerate()
                    .map(|(vertex, (distance, path))| VertexRecord {
                        vertex,
                        distance: distance.is_finite().then(|| distance.to_f64()).flatten(),
                        path,
                    })
                    .collect();
                serde_json::to_writer_pretty(&mut *out, &records)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Writes the results to `path`, creating or truncating the file.
    /// I/O failures are returned as is; a partially written file is left behind.
    pub fn write<W>(&self, distances: &[W], paths: &[Vec<usize>], path: impl AsRef<Path>) -> Result<()>
    where
        W: Float + Display + Debug,
    {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut out = BufWriter::new(file);
        self.write_to(distances, paths, &mut out)
            .and_then(|()| out.flush())
            .map_err(|e| Error::io(path, e))?;
        debug!("Wrote {} result lines to {}", distances.len(), path.display());
        Ok(())
    }
}

/// Writes results in the text format
pub fn write_results<W>(distances: &[W], paths: &[Vec<usize>], path: impl AsRef<Path>) -> Result<()>
where
    W: Float + Display + Debug,
{
    ResultWriter::new(OutputFormat::Text).write(distances, paths, path)
}
