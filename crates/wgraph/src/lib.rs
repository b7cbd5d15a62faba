//! Wgraph - a directed weighted graph store with shortest paths.
//!
//! This crate provides both a CLI application and a library. The library
//! centres on [`store::GraphStore`], an in-memory directed graph with integer
//! edge costs that keeps inbound and outbound adjacency in step, and on
//! [`path::shortest_path`], a queue-based Bellman-Ford search that tolerates
//! negative costs and reports reachable negative cycles.
//!
//! # Example
//!
//! ```
//! use wgraph::path::shortest_path;
//! use wgraph::store::GraphStore;
//!
//! let mut g = GraphStore::with_vertices(3);
//! g.add_edge(0, 1, 5).unwrap();
//! g.add_edge(1, 2, -2).unwrap();
//!
//! let result = shortest_path(&g, 0, 2).unwrap();
//! assert_eq!(result.path, vec![0, 1, 2]);
//! assert_eq!(result.total_cost(), Some(3));
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod domain;
pub mod error;
pub mod generate;
pub mod io;
pub mod path;
pub mod store;

// Public CLI module (needed by binary)
pub mod cli;

// Application context and configuration
pub mod app;
pub mod config;

// Output formatting
pub mod output;

pub use error::{Error, GraphError, Result};
pub use store::GraphStore;
