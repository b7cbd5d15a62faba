//! Error types for wgraph operations.
//!
//! Errors come in two layers:
//!
//! - **`GraphError`**: precondition failures of a single graph operation.
//!   These are recoverable and leave the graph untouched.
//! - **`Error`**: everything a caller of the crate can see, including I/O and
//!   file-format failures which are fatal for the operation that hit them.

use crate::domain::VertexId;
use std::io;
use thiserror::Error;

/// A violated precondition of a [`GraphStore`](crate::store::GraphStore) operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The referenced vertex is not tracked by the graph.
    #[error("vertex {0} does not exist")]
    VertexNotFound(VertexId),

    /// Attempted to add a vertex that is already tracked.
    #[error("vertex {0} already exists")]
    VertexAlreadyExists(VertexId),

    /// No edge is recorded for the given ordered pair.
    #[error("edge {from} -> {to} does not exist")]
    EdgeNotFound {
        /// Tail of the missing edge.
        from: VertexId,
        /// Head of the missing edge.
        to: VertexId,
    },

    /// Attempted to add an edge that already exists.
    #[error("edge {from} -> {to} already exists")]
    EdgeAlreadyExists {
        /// Tail of the existing edge.
        from: VertexId,
        /// Head of the existing edge.
        to: VertexId,
    },
}

/// The error type for wgraph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A graph operation was rejected.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The graph file could not be parsed.
    #[error("graph file error: {0}")]
    Format(#[from] wgraph_text::Error),

    /// A well-formed line of the graph file describes an operation the graph
    /// rejects, such as a second edge between the same pair.
    #[error("invalid line {line_number}: {error}")]
    InvalidRecord {
        /// The 1-based line number of the record.
        line_number: usize,
        /// The rejected operation.
        error: GraphError,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// An argument is outside the range an operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// The 1-based line number of the graph file line that caused this error,
    /// if there is one.
    #[must_use]
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::InvalidRecord { line_number, .. } => Some(*line_number),
            Self::Format(e) => e.line_number(),
            _ => None,
        }
    }
}

/// A specialized Result type for wgraph operations.
pub type Result<T> = std::result::Result<T, Error>;
