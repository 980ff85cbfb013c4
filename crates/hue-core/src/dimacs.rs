//! DIMACS graph file format parser.
//!
//! This module reads and writes DIMACS .col graph files, the standard format
//! used for graph coloring benchmark problems.
//!
//! ## Format Specification
//!
//! DIMACS format follows these rules:
//! - Lines starting with 'c' are comments (ignored)
//! - Line starting with 'p edge N M' declares N vertices and M edges
//! - Lines starting with 'e U V' declare an edge between vertices U and V (1-indexed)
//!
//! ## Example
//! ```text
//! c Triangle graph example
//! p edge 3 3
//! e 1 2
//! e 2 3
//! e 1 3
//! ```
//!
//! ## Usage
//! ```no_run
//! use hue_core::dimacs::parse_dimacs_file;
//!
//! let graph = parse_dimacs_file("benchmarks/dimacs/myciel3.col")?;
//! println!("Loaded graph with {} vertices and {} edges", graph.num_vertices(), graph.num_edges());
//! # Ok::<(), hue_core::HueError>(())
//! ```
//!
//! Vertices are named by their DIMACS number ("1".."N"); edges are named
//! "e1", "e2", ... in the order they are kept.

use crate::{Graph, HueError, VertexId};
use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Vertex limit applied by [`parse_dimacs_str`] and [`parse_dimacs_file`].
pub const DEFAULT_MAX_VERTICES: usize = 10_000_000;

/// Helper to create a validation error for DIMACS parsing
fn parse_error(message: impl Into<String>) -> HueError {
    HueError::validation(message.into())
}

fn parse_vertex_id(token: &str, line_num: usize, num_vertices: usize) -> Result<usize, HueError> {
    let id = token.parse::<usize>().map_err(|_| {
        parse_error(format!(
            "Invalid vertex ID '{}' at line {}: must be a positive integer",
            token, line_num
        ))
    })?;

    // DIMACS uses 1-indexed vertices
    if id == 0 || id > num_vertices {
        return Err(parse_error(format!(
            "Vertex ID {} at line {} out of range [1, {}]",
            id, line_num, num_vertices
        )));
    }
    Ok(id)
}

/// Parses a DIMACS .col file into a Graph.
///
/// ## Errors
/// - `HueError::IoError`: file not found or read error
/// - `HueError::ValidationError`: invalid DIMACS format
pub fn parse_dimacs_file<P: AsRef<Path>>(path: P) -> Result<Graph, HueError> {
    parse_dimacs_file_with_limit(path, DEFAULT_MAX_VERTICES)
}

/// Parses a DIMACS .col file, rejecting headers that declare more than
/// `max_vertices` vertices.
pub fn parse_dimacs_file_with_limit<P: AsRef<Path>>(
    path: P,
    max_vertices: usize,
) -> Result<Graph, HueError> {
    let path_ref = path.as_ref();
    let content = fs::read_to_string(path_ref)?;
    log::debug!("Parsing DIMACS file '{}'", path_ref.display());
    parse_dimacs_str_with_limit(&content, max_vertices)
}

/// Parses DIMACS .col text into a Graph.
///
/// Self-loops are skipped and repeated vertex pairs (in either orientation)
/// keep only their first edge, both with a warning.
pub fn parse_dimacs_str(content: &str) -> Result<Graph, HueError> {
    parse_dimacs_str_with_limit(content, DEFAULT_MAX_VERTICES)
}

/// Parses DIMACS .col text, rejecting a problem line that declares more than
/// `max_vertices` vertices before anything is allocated for them.
pub fn parse_dimacs_str_with_limit(content: &str, max_vertices: usize) -> Result<Graph, HueError> {
    let mut num_vertices = 0;
    let mut num_edges_declared = 0;
    let mut edges = Vec::new();
    let mut problem_line_found = false;

    for (index, line) in content.lines().enumerate() {
        let line_num = index + 1;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('c') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts[0] {
            "p" => {
                // Problem line: p edge N M
                if problem_line_found {
                    return Err(parse_error(format!(
                        "Duplicate problem line at line {}",
                        line_num
                    )));
                }
                if parts.len() < 4 {
                    return Err(parse_error(format!(
                        "Invalid problem line format at line {}: expected 'p edge N M', got '{}'",
                        line_num, line
                    )));
                }
                if parts[1] != "edge" && parts[1] != "col" {
                    return Err(parse_error(format!(
                        "Unsupported problem type '{}' at line {}: expected 'edge' or 'col'",
                        parts[1], line_num
                    )));
                }

                num_vertices = parts[2].parse::<usize>().map_err(|_| {
                    parse_error(format!(
                        "Invalid vertex count '{}' at line {}: must be a positive integer",
                        parts[2], line_num
                    ))
                })?;
                if num_vertices > max_vertices {
                    return Err(parse_error(format!(
                        "Problem line at line {} declares {} vertices, above the limit of {}",
                        line_num, num_vertices, max_vertices
                    )));
                }

                num_edges_declared = parts[3].parse::<usize>().map_err(|_| {
                    parse_error(format!(
                        "Invalid edge count '{}' at line {}: must be a non-negative integer",
                        parts[3], line_num
                    ))
                })?;

                problem_line_found = true;
            }
            "e" => {
                // Edge line: e U V
                if !problem_line_found {
                    return Err(parse_error(format!(
                        "Edge definition at line {} before problem line (expected 'p edge N M' first)",
                        line_num
                    )));
                }

                if parts.len() < 3 {
                    return Err(parse_error(format!(
                        "Invalid edge line format at line {}: expected 'e U V', got '{}'",
                        line_num, line
                    )));
                }

                let u = parse_vertex_id(parts[1], line_num, num_vertices)?;
                let v = parse_vertex_id(parts[2], line_num, num_vertices)?;

                // Convert to 0-indexed
                edges.push((u - 1, v - 1, line_num));
            }
            _ => {
                // Ignore unknown line types (forward compatibility)
                log::debug!(
                    "Ignoring unknown DIMACS line type '{}' at line {}",
                    parts[0],
                    line_num
                );
            }
        }
    }

    if !problem_line_found {
        return Err(parse_error(
            "No problem line found in DIMACS file (expected 'p edge N M')",
        ));
    }

    // Edge lines bound how many vertices the file really exercises.
    let reserve = num_vertices.min(edges.len().saturating_mul(2).saturating_add(1));
    let mut graph = Graph::with_capacity(reserve, edges.len());
    for id in 1..=num_vertices {
        graph.add_vertex(id.to_string());
    }

    let mut seen = HashSet::with_capacity(edges.len());
    for (u, v, line_num) in edges {
        if u == v {
            log::warn!("Skipping self-loop on vertex {} at line {}", u + 1, line_num);
            continue;
        }
        if !seen.insert((u.min(v), u.max(v))) {
            log::warn!(
                "Skipping repeated edge ({}, {}) at line {}",
                u + 1,
                v + 1,
                line_num
            );
            continue;
        }
        let name = format!("e{}", graph.num_edges() + 1);
        graph.add_edge(name, VertexId(u), VertexId(v))?;
    }

    if graph.num_edges() != num_edges_declared {
        log::warn!(
            "DIMACS file declared {} edges but actual edge count is {} (after deduplication)",
            num_edges_declared,
            graph.num_edges()
        );
    }

    Ok(graph)
}

/// Renders a graph as DIMACS .col text.
///
/// Vertex numbers follow stored order. Names are not preserved.
pub fn write_dimacs(graph: &Graph) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "c written by hue");
    let _ = writeln!(out, "p edge {} {}", graph.num_vertices(), graph.num_edges());
    for edge in graph.edges() {
        let (a, b) = edge.endpoints();
        let _ = writeln!(out, "e {} {}", a.index() + 1, b.index() + 1);
    }
    out
}
