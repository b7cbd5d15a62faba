//! Loading and saving graphs in the flat adjacency-list text format.
//!
//! ```text
//! <vertexCount> <edgeCount>
//! <source> <target> <cost>      one line per edge
//! <isolatedVertexId>            one line per vertex with no edges
//! ```
//!
//! Both directions go through [`GraphStore`]'s public operations only.
//!
//! # Loading
//!
//! When every id in the file is below the header's vertex count, vertices
//! `0..vertexCount` are all tracked up front, so a trailing vertex that no
//! line names is kept as an isolated vertex. Otherwise the ids are sparse and
//! vertices are tracked from the records alone: each edge line tracks both
//! endpoints and each single-id line tracks an isolated vertex.
//!
//! The header counts are then compared with what was built. A mismatch does
//! not fail the load; it is returned as a [`LoadWarning`] and logged.
//!
//! Malformed lines and duplicate edges are fatal and carry the line number.
//!
//! # Saving
//!
//! Edges are written in the order they were added, followed by the isolated
//! vertices. [`save_to_path`] writes atomically.

use crate::domain::VertexId;
use crate::error::{Error, Result};
use crate::store::GraphStore;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use wgraph_text::{Header, Record, TextReader, TextWriter};

/// Largest header vertex count that is tracked up front on load.
const MAX_PRESIZED_VERTICES: usize = 1 << 24;

/// Non-fatal problems found while loading a graph file.
///
/// The graph that was built is still consistent; these only report that the
/// file disagreed with itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The header's vertex count differs from the number of vertices read.
    ///
    /// **Effect**: the vertices actually present in the file win.
    VertexCountMismatch {
        /// Count declared in the header.
        declared: usize,
        /// Count of vertices tracked after loading.
        actual: usize,
    },

    /// The header's edge count differs from the number of edge lines read.
    ///
    /// **Effect**: the edges actually present in the file win.
    EdgeCountMismatch {
        /// Count declared in the header.
        declared: usize,
        /// Count of edges loaded.
        actual: usize,
    },

    /// A single-id line named a vertex that an earlier line already named.
    ///
    /// **Effect**: the line is ignored.
    RedundantVertex {
        /// The 1-based line number of the record.
        line_number: usize,
        /// The vertex named on that line.
        vertex: VertexId,
    },
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VertexCountMismatch { declared, actual } => write!(
                f,
                "header declares {declared} vertices but {actual} were read"
            ),
            Self::EdgeCountMismatch { declared, actual } => {
                write!(f, "header declares {declared} edges but {actual} were read")
            }
            Self::RedundantVertex {
                line_number,
                vertex,
            } => write!(
                f,
                "line {line_number}: vertex {vertex} is already present"
            ),
        }
    }
}

/// Read a graph from any buffered reader.
///
/// Returns the graph together with any non-fatal warnings.
///
/// # Errors
///
/// Returns an error if reading fails, the header is missing or malformed,
/// a body line is malformed, or the same edge appears twice.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<(GraphStore, Vec<LoadWarning>)> {
    let mut reader = TextReader::new(reader);
    let header = reader.read_header()?;

    let mut records = Vec::new();
    while let Some(record) = reader.read_record()? {
        records.push((reader.line_number(), record));
    }

    let dense = header.vertex_count <= MAX_PRESIZED_VERTICES
        && records.iter().all(|(_, record)| {
            record_vertices(record).all(|v| (v as usize) < header.vertex_count)
        });
    let mut graph = match VertexId::try_from(header.vertex_count) {
        Ok(n) if dense => GraphStore::with_vertices(n),
        _ => GraphStore::new(),
    };

    let mut named = HashSet::new();
    let mut warnings = Vec::new();

    for (line_number, record) in records {
        match record {
            Record::Edge {
                source,
                target,
                cost,
            } => {
                for v in [source, target] {
                    named.insert(v);
                    if !graph.has_vertex(v) {
                        graph.add_vertex(v)?;
                    }
                }
                graph
                    .add_edge(source, target, cost)
                    .map_err(|error| Error::InvalidRecord { line_number, error })?;
            }
            Record::Vertex(v) => {
                if !named.insert(v) {
                    warnings.push(LoadWarning::RedundantVertex {
                        line_number,
                        vertex: v,
                    });
                } else if !graph.has_vertex(v) {
                    graph.add_vertex(v)?;
                }
            }
        }
    }

    if header.vertex_count != graph.vertex_count() {
        warnings.push(LoadWarning::VertexCountMismatch {
            declared: header.vertex_count,
            actual: graph.vertex_count(),
        });
    }
    if header.edge_count != graph.edge_count() {
        warnings.push(LoadWarning::EdgeCountMismatch {
            declared: header.edge_count,
            actual: graph.edge_count(),
        });
    }
    for warning in &warnings {
        tracing::warn!(%warning, "Graph file inconsistency");
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        dense,
        warnings = warnings.len(),
        "Loaded graph"
    );
    Ok((graph, warnings))
}

fn record_vertices(record: &Record) -> impl Iterator<Item = VertexId> {
    let ids = match *record {
        Record::Edge { source, target, .. } => [Some(source), Some(target)],
        Record::Vertex(v) => [Some(v), None],
    };
    ids.into_iter().flatten()
}

/// Read a graph from a file.
///
/// # Errors
///
/// See [`load_from_reader`]; additionally fails if the file cannot be opened.
pub fn load_from_path(path: &Path) -> Result<(GraphStore, Vec<LoadWarning>)> {
    let file = File::open(path)?;
    tracing::debug!(path = %path.display(), "Loading graph file");
    load_from_reader(BufReader::new(file))
}

/// Write a graph to any writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn save_to_writer<W: Write>(writer: W, graph: &GraphStore) -> Result<()> {
    let mut writer = TextWriter::new(writer);
    write_graph(&mut writer, graph)?;
    writer.flush()?;
    Ok(())
}

/// Write a graph to a file, replacing it atomically.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be written or renamed.
pub fn save_to_path(path: &Path, graph: &GraphStore) -> Result<()> {
    wgraph_text::write_atomic(path, |writer| write_graph(writer, graph))?;
    Ok(())
}

fn write_graph<W: Write>(writer: &mut TextWriter<W>, graph: &GraphStore) -> wgraph_text::Result<()> {
    writer.write_header(Header::new(graph.vertex_count(), graph.edge_count()))?;
    for edge in graph.edges() {
        writer.write_record(&Record::Edge {
            source: edge.source,
            target: edge.target,
            cost: edge.cost,
        })?;
    }
    for v in graph.isolated_vertices() {
        writer.write_record(&Record::Vertex(v))?;
    }
    Ok(())
}
