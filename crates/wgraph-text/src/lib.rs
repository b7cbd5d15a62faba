//! Line-oriented codec for flat adjacency-list graph files.
//!
//! A graph file is a header line followed by one record per line:
//!
//! ```text
//! <vertexCount> <edgeCount>
//! <source> <target> <cost>
//! <isolatedVertexId>
//! ```
//!
//! This crate only knows about lines and records. Building a graph out of the
//! records is left to the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod atomic;
pub mod error;
pub mod reader;
pub mod record;
pub mod writer;

pub use atomic::write_atomic;
pub use error::{Error, Result};
pub use reader::TextReader;
pub use record::{Cost, Header, Record, VertexId};
pub use writer::TextWriter;
