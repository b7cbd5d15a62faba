//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation. Cost arguments accept a leading `-`.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{Cost, Direction, VertexId};

/// Arguments for the `init` command
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,

    /// Suppress output messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for commands that name a single vertex
#[derive(Parser, Debug, Clone)]
pub struct VertexArgs {
    /// Vertex id
    pub vertex: VertexId,
}

/// Arguments for commands that name an edge
#[derive(Parser, Debug, Clone)]
pub struct EdgeArgs {
    /// Source vertex
    pub source: VertexId,

    /// Target vertex
    pub target: VertexId,
}

/// Arguments for commands that name an edge and a cost
#[derive(Parser, Debug, Clone)]
pub struct EdgeCostArgs {
    /// Source vertex
    pub source: VertexId,

    /// Target vertex
    pub target: VertexId,

    /// Edge cost (may be negative)
    #[arg(allow_negative_numbers = true)]
    pub cost: Cost,
}

/// Arguments for the `neighbors` command
#[derive(Parser, Debug, Clone)]
pub struct NeighborsArgs {
    /// Vertex id
    pub vertex: VertexId,

    /// List vertices with an edge into this one instead of out of it
    #[arg(short, long)]
    pub inbound: bool,
}

impl NeighborsArgs {
    /// Direction selected by the flags.
    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.inbound {
            Direction::Inbound
        } else {
            Direction::Outbound
        }
    }
}

/// Arguments for the `path` command
#[derive(Parser, Debug, Clone)]
pub struct PathArgs {
    /// Start vertex
    pub start: VertexId,

    /// End vertex
    pub end: VertexId,
}

/// Arguments for the `generate` command
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of vertices, numbered from 0
    pub vertices: VertexId,

    /// Number of edges
    pub edges: usize,

    /// Random seed (defaults to the configured seed, else random)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Inclusive lower bound on costs (defaults to the configured value)
    #[arg(long, allow_negative_numbers = true)]
    pub min_cost: Option<Cost>,

    /// Inclusive upper bound on costs (defaults to the configured value)
    #[arg(long, allow_negative_numbers = true)]
    pub max_cost: Option<Cost>,

    /// Write the graph here instead of the working graph file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
