//! Output formatting for CLI commands.
//!
//! Every command can print either human-readable colored text or a JSON
//! document for programmatic use.
//!
//! Semantic color theme:
//!   - Success:   green   (completed mutations, finite distances)
//!   - Warning:   yellow  (load warnings, negative cycles)
//!   - Error:     red     (unreachable targets)
//!   - Reference: cyan    (vertex ids)
//!   - Muted:     dimmed  (field labels)

use crate::domain::{Cost, Direction, Edge, VertexId};
use crate::io::LoadWarning;
use crate::path::ShortestPaths;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Print any serializable value as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(handle, "{json}")
}

/// Print a one-line confirmation of a mutation.
pub fn print_success(message: &str, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(&serde_json::json!({ "ok": true, "message": message })),
        OutputMode::Text => {
            println!("{}", message.green());
            Ok(())
        }
    }
}

/// Print load warnings to stderr. Text mode only; JSON consumers get them
/// from the `info` command.
pub fn print_warnings(warnings: &[LoadWarning], mode: OutputMode) {
    if mode == OutputMode::Json {
        return;
    }
    for warning in warnings {
        eprintln!("{}: {warning}", "warning".yellow().bold());
    }
}

/// Summary of the graph for the `info` command.
#[derive(Debug, Serialize)]
pub struct GraphSummary {
    /// Graph file path
    pub graph_file: String,
    /// Number of vertices
    pub vertices: usize,
    /// Number of edges
    pub edges: usize,
    /// Number of isolated vertices
    pub isolated: usize,
    /// Warnings found while loading
    pub warnings: Vec<String>,
}

/// Print the graph summary.
pub fn print_summary(summary: &GraphSummary, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(summary),
        OutputMode::Text => {
            println!("{}", "Graph".cyan().bold());
            println!("  {}: {}", "File".dimmed(), summary.graph_file);
            println!("  {}: {}", "Vertices".dimmed(), summary.vertices);
            println!("  {}: {}", "Edges".dimmed(), summary.edges);
            println!("  {}: {}", "Isolated".dimmed(), summary.isolated);
            for warning in &summary.warnings {
                println!("  {}: {warning}", "warning".yellow());
            }
            Ok(())
        }
    }
}

/// Print a list of vertex ids.
pub fn print_vertices(label: &str, vertices: &[VertexId], mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(&vertices),
        OutputMode::Text => {
            println!("{} ({})", label.bold(), vertices.len());
            for v in vertices {
                println!("  {}", v.to_string().cyan());
            }
            Ok(())
        }
    }
}

/// Print a list of edges.
pub fn print_edges(edges: &[Edge], mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(&edges),
        OutputMode::Text => {
            println!("{} ({})", "Edges".bold(), edges.len());
            for edge in edges {
                println!(
                    "  {} -> {}  {}",
                    edge.source.to_string().cyan(),
                    edge.target.to_string().cyan(),
                    edge.cost
                );
            }
            Ok(())
        }
    }
}

/// Print a single edge cost.
pub fn print_cost(source: VertexId, target: VertexId, cost: Cost, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(&Edge::new(source, target, cost)),
        OutputMode::Text => {
            println!(
                "{} -> {}: {}",
                source.to_string().cyan(),
                target.to_string().cyan(),
                cost
            );
            Ok(())
        }
    }
}

/// Print whether an edge exists.
pub fn print_has_edge(source: VertexId, target: VertexId, exists: bool, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(&serde_json::json!({
            "source": source,
            "target": target,
            "exists": exists,
        })),
        OutputMode::Text => {
            let verdict = if exists { "yes".green() } else { "no".red() };
            println!(
                "{} -> {}: {verdict}",
                source.to_string().cyan(),
                target.to_string().cyan()
            );
            Ok(())
        }
    }
}

/// In and out degree of a vertex.
#[derive(Debug, Serialize)]
pub struct DegreeReport {
    /// The vertex
    pub vertex: VertexId,
    /// Number of inbound edges
    pub in_degree: usize,
    /// Number of outbound edges
    pub out_degree: usize,
}

/// Print a degree report.
pub fn print_degree(report: &DegreeReport, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(report),
        OutputMode::Text => {
            println!("{} {}", "Vertex".bold(), report.vertex.to_string().cyan());
            println!("  {}: {}", "in".dimmed(), report.in_degree);
            println!("  {}: {}", "out".dimmed(), report.out_degree);
            Ok(())
        }
    }
}

/// Print the neighbours of a vertex.
pub fn print_neighbors(
    vertex: VertexId,
    direction: Direction,
    neighbors: &[VertexId],
    mode: OutputMode,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(&serde_json::json!({
            "vertex": vertex,
            "direction": direction,
            "neighbors": neighbors,
        })),
        OutputMode::Text => print_vertices(
            &format!("{direction} neighbours of {vertex}"),
            neighbors,
            OutputMode::Text,
        ),
    }
}

/// JSON view of a shortest-path result. Unreachable distances are `null`.
#[derive(Debug, Serialize)]
pub struct PathReport {
    /// Source vertex
    pub start: VertexId,
    /// Target vertex
    pub end: VertexId,
    /// Whether a negative cycle is reachable from `start`
    pub negative_cycle: bool,
    /// Total cost of the path, `null` if unreachable
    pub cost: Option<Cost>,
    /// Vertices on the path, empty if unreachable
    pub path: Vec<VertexId>,
    /// Distance to every vertex in tracking order
    pub distances: Vec<(VertexId, Option<Cost>)>,
}

impl PathReport {
    /// Build a report, listing distances in the given vertex order.
    pub fn new(result: &ShortestPaths, order: impl IntoIterator<Item = VertexId>) -> Self {
        let distances = if result.negative_cycle {
            Vec::new()
        } else {
            order.into_iter().map(|v| (v, result.distance(v))).collect()
        };
        Self {
            start: result.start,
            end: result.end,
            negative_cycle: result.negative_cycle,
            cost: result.total_cost(),
            path: result.path.clone(),
            distances,
        }
    }
}

/// Print a shortest-path report.
pub fn print_path(report: &PathReport, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(report),
        OutputMode::Text => {
            if report.negative_cycle {
                println!(
                    "{}",
                    format!("Negative cycle reachable from {}", report.start).yellow().bold()
                );
                return Ok(());
            }
            match report.cost {
                Some(cost) => {
                    let hops: Vec<String> = report.path.iter().map(ToString::to_string).collect();
                    println!("{}: {}", "Path".bold(), hops.join(" -> ").cyan());
                    println!("{}: {}", "Cost".bold(), cost.to_string().green());
                }
                None => println!(
                    "{}",
                    format!("No path from {} to {}", report.start, report.end).red()
                ),
            }
            Ok(())
        }
    }
}
