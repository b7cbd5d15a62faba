//! Application context for CLI command execution.
//!
//! [`App`] resolves configuration, loads the graph file the command operates
//! on, and writes it back after mutating commands.
//!
//! # Example
//!
//! ```no_run
//! use wgraph::app::App;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut app = App::from_directory(Path::new("."), None, None)?;
//!     app.graph_mut().add_vertex(3)?;
//!     app.save()?;
//!     Ok(())
//! }
//! ```

use crate::config::WgraphConfig;
use crate::error::Result;
use crate::io::{load_from_path, save_to_path, LoadWarning};
use crate::store::GraphStore;
use std::path::{Path, PathBuf};

/// Application context for CLI operations.
#[derive(Debug)]
pub struct App {
    /// The graph being operated on
    graph: GraphStore,

    /// Where the graph is read from and saved to
    graph_path: PathBuf,

    /// Effective configuration
    config: WgraphConfig,

    /// Non-fatal problems found while loading the graph file
    warnings: Vec<LoadWarning>,
}

impl App {
    /// Create an App for the given working directory.
    ///
    /// Configuration is read from `config_path` if given, otherwise
    /// discovered in `working_dir`. Both paths are resolved against
    /// `working_dir`. The graph file is `graph_path` if given,
    /// otherwise the configured `graph-file`, resolved against `working_dir`.
    /// A graph file that does not exist yet yields an empty graph; it is
    /// created on the first [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file exists but cannot be loaded
    /// - The graph file exists but cannot be read or parsed
    pub fn from_directory(
        working_dir: &Path,
        config_path: Option<&Path>,
        graph_path: Option<&Path>,
    ) -> Result<Self> {
        let config = WgraphConfig::resolve(working_dir, config_path)?;

        let graph_path = working_dir.join(graph_path.unwrap_or(&config.graph_file));

        let (graph, warnings) = if graph_path.exists() {
            load_from_path(&graph_path)?
        } else {
            tracing::info!(path = %graph_path.display(), "Graph file not found, starting empty");
            (GraphStore::new(), Vec::new())
        };

        Ok(Self {
            graph,
            graph_path,
            config,
            warnings,
        })
    }

    /// Get an immutable reference to the graph.
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// Get a mutable reference to the graph.
    pub fn graph_mut(&mut self) -> &mut GraphStore {
        &mut self.graph
    }

    /// Replace the graph wholesale.
    pub fn replace_graph(&mut self, graph: GraphStore) {
        self.graph = graph;
    }

    /// Path of the graph file.
    pub fn graph_path(&self) -> &Path {
        &self.graph_path
    }

    /// Effective configuration.
    pub fn config(&self) -> &WgraphConfig {
        &self.config
    }

    /// Warnings collected while loading the graph file.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Save the graph back to its file.
    ///
    /// This should be called after any mutating operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the atomic write fails.
    pub fn save(&self) -> Result<()> {
        save_to_path(&self.graph_path, &self.graph)
    }
}
