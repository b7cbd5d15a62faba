//! Error types for wgraph-text operations.

use std::io;
use thiserror::Error;

/// The error type for wgraph-text operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input ended before the header line was read.
    #[error("missing header line: expected `<vertexCount> <edgeCount>`")]
    MissingHeader,

    /// A line could not be parsed.
    #[error("invalid line {line_number}: {reason}")]
    InvalidFormat {
        /// The 1-based line number of the offending line.
        line_number: usize,
        /// What was wrong with the line.
        reason: String,
    },
}

impl Error {
    /// Returns the line number for format errors, if any.
    #[must_use]
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::InvalidFormat { line_number, .. } => Some(*line_number),
            Self::Io(_) | Self::MissingHeader => None,
        }
    }
}

/// A specialized Result type for wgraph-text operations.
pub type Result<T> = std::result::Result<T, Error>;
