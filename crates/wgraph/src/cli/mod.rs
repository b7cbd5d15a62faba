//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for wgraph using clap's
//! derive API. Every command operates on one graph file: `--graph` if given,
//! otherwise the `graph-file` from `wgraph.yaml`, otherwise `graph.txt`.
//!
//! # Commands
//!
//! - `init`: Write a default `wgraph.yaml`
//! - `info`: Show vertex and edge counts
//! - `vertices`, `edges`: List the graph
//! - `add-vertex`, `remove-vertex`, `add-edge`, `remove-edge`, `set-cost`:
//!   Mutate the graph and save it
//! - `cost`, `has-edge`, `degree`, `neighbors`: Query the graph
//! - `path`: Shortest path between two vertices
//! - `generate`: Write a random graph
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `-v`: Raise log verbosity (repeatable)
//!
//! # Example
//!
//! ```bash
//! wgraph generate 100 400 --seed 7
//! wgraph add-edge 3 9 -12
//! wgraph path 0 42
//! wgraph --json neighbors 5 --inbound
//! ```

mod args;
mod execute;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use args::{
    EdgeArgs, EdgeCostArgs, GenerateArgs, InitArgs, NeighborsArgs, PathArgs, VertexArgs,
};

/// Wgraph - directed weighted graphs from the command line
///
/// Stores a directed graph with integer edge costs in a flat text file and
/// answers shortest-path queries, including over negative costs.
#[derive(Parser, Debug)]
#[command(name = "wgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph file to operate on
    #[arg(short, long, global = true)]
    pub graph: Option<PathBuf>,

    /// Configuration file (defaults to `wgraph.yaml` in the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default configuration file
    ///
    /// Creates `wgraph.yaml` (or the `--config` path) with every setting at
    /// its default value.
    Init(InitArgs),

    /// Show graph information
    ///
    /// Displays the graph file path, vertex and edge counts, and any
    /// inconsistencies found while loading.
    Info,

    /// List every vertex
    Vertices,

    /// List every edge with its cost
    Edges,

    /// Add an isolated vertex
    AddVertex(VertexArgs),

    /// Remove a vertex together with all its edges
    RemoveVertex(VertexArgs),

    /// Add an edge between two existing vertices
    ///
    /// The cost may be negative: `wgraph add-edge 0 1 -5`.
    AddEdge(EdgeCostArgs),

    /// Remove an edge
    RemoveEdge(EdgeArgs),

    /// Show the cost of an edge
    Cost(EdgeArgs),

    /// Change the cost of an existing edge
    SetCost(EdgeCostArgs),

    /// Check whether an edge exists
    HasEdge(EdgeArgs),

    /// Show the in and out degree of a vertex
    Degree(VertexArgs),

    /// List the neighbours of a vertex
    Neighbors(NeighborsArgs),

    /// Find the cheapest path between two vertices
    ///
    /// Negative costs are allowed. If a negative cycle is reachable from the
    /// start vertex no path is reported.
    Path(PathArgs),

    /// Generate a random graph
    ///
    /// Vertices are numbered `0..vertices`. The graph is written to
    /// `--output`, or replaces the working graph file.
    Generate(GenerateArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Log filter matching the `-v` count.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Execute the CLI command in the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the graph file cannot be loaded,
    /// the graph operation fails, or the graph cannot be saved.
    pub fn execute(&self) -> Result<()> {
        self.execute_in(&std::env::current_dir()?)
    }

    /// Execute the CLI command with `working_dir` as the base for relative
    /// paths.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn execute_in(&self, working_dir: &std::path::Path) -> Result<()> {
        use crate::app::App;
        use crate::config::WgraphConfig;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let open = || -> Result<App> {
            let app = App::from_directory(
                working_dir,
                self.config.as_deref(),
                self.graph.as_deref(),
            )?;
            crate::output::print_warnings(app.warnings(), output_mode);
            Ok(app)
        };

        match &self.command {
            Some(Commands::Init(args)) => {
                execute::execute_init(working_dir, self.config.as_deref(), args, output_mode)
            }
            Some(Commands::Info) => execute::execute_info(&open()?, output_mode),
            Some(Commands::Vertices) => execute::execute_vertices(&open()?, output_mode),
            Some(Commands::Edges) => execute::execute_edges(&open()?, output_mode),
            Some(Commands::AddVertex(args)) => {
                execute::execute_add_vertex(&mut open()?, args, output_mode)
            }
            Some(Commands::RemoveVertex(args)) => {
                execute::execute_remove_vertex(&mut open()?, args, output_mode)
            }
            Some(Commands::AddEdge(args)) => {
                execute::execute_add_edge(&mut open()?, args, output_mode)
            }
            Some(Commands::RemoveEdge(args)) => {
                execute::execute_remove_edge(&mut open()?, args, output_mode)
            }
            Some(Commands::Cost(args)) => execute::execute_cost(&open()?, args, output_mode),
            Some(Commands::SetCost(args)) => {
                execute::execute_set_cost(&mut open()?, args, output_mode)
            }
            Some(Commands::HasEdge(args)) => {
                execute::execute_has_edge(&open()?, args, output_mode)
            }
            Some(Commands::Degree(args)) => execute::execute_degree(&open()?, args, output_mode),
            Some(Commands::Neighbors(args)) => {
                execute::execute_neighbors(&open()?, args, output_mode)
            }
            Some(Commands::Path(args)) => execute::execute_path(&open()?, args, output_mode),
            Some(Commands::Generate(args)) => match &args.output {
                Some(output) => {
                    let config = WgraphConfig::resolve(working_dir, self.config.as_deref())?;
                    execute::execute_generate_to(working_dir, &config, output, args, output_mode)
                }
                None => execute::execute_generate(&mut open()?, args, output_mode),
            },
            None => {
                println!("wgraph directed weighted graph tool");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;

    #[test]
    fn test_parse_no_command() {
        let cli = Cli::try_parse_from(["wgraph"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["wgraph", "info", "--json", "--graph", "g.txt", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.graph, Some(PathBuf::from("g.txt")));
        assert_eq!(cli.log_filter(), "debug");
        assert!(matches!(cli.command, Some(Commands::Info)));
    }

    #[test]
    fn test_parse_add_edge_with_negative_cost() {
        let cli = Cli::try_parse_from(["wgraph", "add-edge", "0", "1", "-7"]).unwrap();
        match cli.command {
            Some(Commands::AddEdge(args)) => {
                assert_eq!((args.source, args.target, args.cost), (0, 1, -7));
            }
            _ => panic!("Expected AddEdge command"),
        }
    }

    #[test]
    fn test_parse_set_cost_after_double_dash() {
        let cli = Cli::try_parse_from(["wgraph", "set-cost", "2", "3", "--", "-1"]).unwrap();
        match cli.command {
            Some(Commands::SetCost(args)) => assert_eq!(args.cost, -1),
            _ => panic!("Expected SetCost command"),
        }
    }

    #[test]
    fn test_parse_negative_vertex_is_rejected() {
        assert!(Cli::try_parse_from(["wgraph", "add-vertex", "-1"]).is_err());
    }

    #[test]
    fn test_parse_missing_cost_is_rejected() {
        assert!(Cli::try_parse_from(["wgraph", "add-edge", "0", "1"]).is_err());
    }

    #[test]
    fn test_parse_neighbors_direction() {
        let cli = Cli::try_parse_from(["wgraph", "neighbors", "4", "--inbound"]).unwrap();
        match cli.command {
            Some(Commands::Neighbors(args)) => {
                assert_eq!(args.vertex, 4);
                assert_eq!(args.direction(), Direction::Inbound);
            }
            _ => panic!("Expected Neighbors command"),
        }

        let cli = Cli::try_parse_from(["wgraph", "neighbors", "4"]).unwrap();
        match cli.command {
            Some(Commands::Neighbors(args)) => assert_eq!(args.direction(), Direction::Outbound),
            _ => panic!("Expected Neighbors command"),
        }
    }

    #[test]
    fn test_parse_generate_full() {
        let cli = Cli::try_parse_from([
            "wgraph",
            "generate",
            "10",
            "30",
            "--seed",
            "99",
            "--min-cost",
            "-5",
            "--max-cost",
            "5",
            "--output",
            "random.txt",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.vertices, 10);
                assert_eq!(args.edges, 30);
                assert_eq!(args.seed, Some(99));
                assert_eq!(args.min_cost, Some(-5));
                assert_eq!(args.max_cost, Some(5));
                assert_eq!(args.output, Some(PathBuf::from("random.txt")));
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["wgraph", "generate", "5", "0"]).unwrap();
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert!(args.seed.is_none());
                assert!(args.min_cost.is_none());
                assert!(args.output.is_none());
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_parse_init_force() {
        let cli = Cli::try_parse_from(["wgraph", "init", "--force", "-q"]).unwrap();
        match cli.command {
            Some(Commands::Init(args)) => assert!(args.force && args.quiet),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_log_filter_levels() {
        for (flags, expected) in [
            (vec!["wgraph"], "warn"),
            (vec!["wgraph", "-v"], "info"),
            (vec!["wgraph", "-vvv"], "trace"),
            (vec!["wgraph", "-vvvvv"], "trace"),
        ] {
            assert_eq!(Cli::try_parse_from(flags).unwrap().log_filter(), expected);
        }
    }

    #[test]
    fn test_generate_output_ignores_unreadable_working_graph() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("graph.txt"), "garbage\n").unwrap();

        let cli = Cli::try_parse_from([
            "wgraph", "generate", "4", "3", "--seed", "1", "-o", "out.txt",
        ])
        .unwrap();
        cli.execute_in(temp_dir.path()).unwrap();

        let (generated, _) = crate::io::load_from_path(&temp_dir.path().join("out.txt")).unwrap();
        assert_eq!(generated.vertex_count(), 4);
        assert_eq!(generated.edge_count(), 3);
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("graph.txt")).unwrap(),
            "garbage\n"
        );
    }

    #[test]
    fn test_init_and_commands_share_relative_config_path() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("conf")).unwrap();

        let init = Cli::try_parse_from(["wgraph", "-c", "conf/w.yaml", "init", "-q"]).unwrap();
        init.execute_in(temp_dir.path()).unwrap();
        assert!(temp_dir.path().join("conf/w.yaml").is_file());

        let add = Cli::try_parse_from(["wgraph", "-c", "conf/w.yaml", "add-vertex", "2"]).unwrap();
        add.execute_in(temp_dir.path()).unwrap();
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("graph.txt")).unwrap(),
            "1 0\n2\n"
        );
    }
}
