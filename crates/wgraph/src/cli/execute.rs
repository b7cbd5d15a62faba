//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands. Mutating
//! commands save the graph only after the store accepted the change.

use std::path::Path;

use anyhow::{Context, Result, bail};

use super::args::{
    EdgeArgs, EdgeCostArgs, GenerateArgs, InitArgs, NeighborsArgs, PathArgs, VertexArgs,
};
use crate::app::App;
use crate::config::{GeneratorSettings, WgraphConfig, config_file_path};
use crate::generate::{GeneratorConfig, random_graph};
use crate::io::save_to_path;
use crate::output::{self, DegreeReport, GraphSummary, OutputMode, PathReport};
use crate::path::shortest_path;

/// Execute the init command
pub fn execute_init(
    working_dir: &Path,
    config_path: Option<&Path>,
    args: &InitArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let path = config_file_path(working_dir, config_path);
    if path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    WgraphConfig::default()
        .save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Wrote default configuration");

    if !args.quiet {
        output::print_success(&format!("Created {}", path.display()), output_mode)?;
    }
    Ok(())
}

/// Execute the info command
pub fn execute_info(app: &App, output_mode: OutputMode) -> Result<()> {
    let graph = app.graph();
    let summary = GraphSummary {
        graph_file: app.graph_path().display().to_string(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        isolated: graph.isolated_vertices().count(),
        warnings: app.warnings().iter().map(ToString::to_string).collect(),
    };
    output::print_summary(&summary, output_mode)?;
    Ok(())
}

/// Execute the vertices command
pub fn execute_vertices(app: &App, output_mode: OutputMode) -> Result<()> {
    let vertices: Vec<_> = app.graph().vertices().collect();
    output::print_vertices("Vertices", &vertices, output_mode)?;
    Ok(())
}

/// Execute the edges command
pub fn execute_edges(app: &App, output_mode: OutputMode) -> Result<()> {
    let edges: Vec<_> = app.graph().edges().collect();
    output::print_edges(&edges, output_mode)?;
    Ok(())
}

/// Execute the add-vertex command
pub fn execute_add_vertex(app: &mut App, args: &VertexArgs, output_mode: OutputMode) -> Result<()> {
    app.graph_mut().add_vertex(args.vertex)?;
    app.save()?;
    output::print_success(&format!("Added vertex {}", args.vertex), output_mode)?;
    Ok(())
}

/// Execute the remove-vertex command
pub fn execute_remove_vertex(
    app: &mut App,
    args: &VertexArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let incident = app.graph().in_degree(args.vertex)? + app.graph().out_degree(args.vertex)?;
    app.graph_mut().remove_vertex(args.vertex)?;
    app.save()?;
    output::print_success(
        &format!("Removed vertex {} and {incident} incident edges", args.vertex),
        output_mode,
    )?;
    Ok(())
}

/// Execute the add-edge command
pub fn execute_add_edge(app: &mut App, args: &EdgeCostArgs, output_mode: OutputMode) -> Result<()> {
    app.graph_mut()
        .add_edge(args.source, args.target, args.cost)?;
    app.save()?;
    output::print_success(
        &format!(
            "Added edge {} -> {} ({})",
            args.source, args.target, args.cost
        ),
        output_mode,
    )?;
    Ok(())
}

/// Execute the remove-edge command
pub fn execute_remove_edge(app: &mut App, args: &EdgeArgs, output_mode: OutputMode) -> Result<()> {
    let cost = app.graph_mut().remove_edge(args.source, args.target)?;
    app.save()?;
    output::print_success(
        &format!("Removed edge {} -> {} ({cost})", args.source, args.target),
        output_mode,
    )?;
    Ok(())
}

/// Execute the cost command
pub fn execute_cost(app: &App, args: &EdgeArgs, output_mode: OutputMode) -> Result<()> {
    let cost = app.graph().cost(args.source, args.target)?;
    output::print_cost(args.source, args.target, cost, output_mode)?;
    Ok(())
}

/// Execute the set-cost command
pub fn execute_set_cost(app: &mut App, args: &EdgeCostArgs, output_mode: OutputMode) -> Result<()> {
    let previous = app
        .graph_mut()
        .update_cost(args.source, args.target, args.cost)?;
    app.save()?;
    output::print_success(
        &format!(
            "Changed cost of {} -> {} from {previous} to {}",
            args.source, args.target, args.cost
        ),
        output_mode,
    )?;
    Ok(())
}

/// Execute the has-edge command
pub fn execute_has_edge(app: &App, args: &EdgeArgs, output_mode: OutputMode) -> Result<()> {
    let exists = app.graph().has_edge(args.source, args.target)?;
    output::print_has_edge(args.source, args.target, exists, output_mode)?;
    Ok(())
}

/// Execute the degree command
pub fn execute_degree(app: &App, args: &VertexArgs, output_mode: OutputMode) -> Result<()> {
    let report = DegreeReport {
        vertex: args.vertex,
        in_degree: app.graph().in_degree(args.vertex)?,
        out_degree: app.graph().out_degree(args.vertex)?,
    };
    output::print_degree(&report, output_mode)?;
    Ok(())
}

/// Execute the neighbors command
pub fn execute_neighbors(app: &App, args: &NeighborsArgs, output_mode: OutputMode) -> Result<()> {
    let direction = args.direction();
    let neighbors = app.graph().neighbors(args.vertex, direction)?;
    output::print_neighbors(args.vertex, direction, neighbors, output_mode)?;
    Ok(())
}

/// Execute the path command
pub fn execute_path(app: &App, args: &PathArgs, output_mode: OutputMode) -> Result<()> {
    let result = shortest_path(app.graph(), args.start, args.end)?;
    let report = PathReport::new(&result, app.graph().vertices());
    output::print_path(&report, output_mode)?;
    Ok(())
}

fn generator_config(args: &GenerateArgs, defaults: &GeneratorSettings) -> GeneratorConfig {
    let mut config = GeneratorConfig::new(args.vertices, args.edges).with_cost_range(
        args.min_cost.unwrap_or(defaults.min_cost),
        args.max_cost.unwrap_or(defaults.max_cost),
    );
    config.seed = args.seed.or(defaults.seed);
    config
}

fn print_generated(args: &GenerateArgs, target: &Path, output_mode: OutputMode) -> Result<()> {
    output::print_success(
        &format!(
            "Generated {} vertices and {} edges into {}",
            args.vertices,
            args.edges,
            target.display()
        ),
        output_mode,
    )?;
    Ok(())
}

/// Execute the generate command with `--output`
///
/// Only the configuration is read; the working graph file is left alone.
pub fn execute_generate_to(
    working_dir: &Path,
    config: &WgraphConfig,
    output: &Path,
    args: &GenerateArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let graph = random_graph(&generator_config(args, &config.generator))?;
    let path = working_dir.join(output);
    save_to_path(&path, &graph)?;
    print_generated(args, &path, output_mode)
}

/// Execute the generate command, replacing the working graph
pub fn execute_generate(app: &mut App, args: &GenerateArgs, output_mode: OutputMode) -> Result<()> {
    let graph = random_graph(&generator_config(args, &app.config().generator))?;
    app.replace_graph(graph);
    app.save()?;
    print_generated(args, app.graph_path(), output_mode)
}
