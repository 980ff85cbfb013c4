//! Greedy vertex coloring.
//!
//! The engine walks the vertices in the configured outer order. For each
//! vertex that is still uncolored it assigns the smallest color not used by
//! an already-colored neighbor, then immediately colors every still-uncolored
//! direct neighbor with the same rule. Vertices that were colored as someone's
//! neighbor are skipped by the outer loop, neighbor pass included.
//!
//! Each assignment avoids every neighbor colored at that moment, and every
//! later assignment checks against it in turn, so no edge ends up with equal
//! colors. The result is not guaranteed to use the minimum number of colors.
//!
//! ## Usage
//! ```rust
//! use hue_core::{color_graph, Graph};
//!
//! let mut graph = Graph::from_parts(["a", "b"], [("ab", 0, 1)])?;
//! color_graph(&mut graph);
//! assert_eq!(graph.to_string(),
//!     "Graph ( V = (Vertex (a, 1), Vertex (b, 2)), E = (Edge (Vertex (a, 1), Vertex (b, 2))))");
//! # Ok::<(), hue_core::HueError>(())
//! ```

use crate::errors::HueError;
use crate::types::{Color, Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// Outer iteration order of the greedy pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VertexOrder {
    /// Stored vertex order
    #[default]
    Insertion,
    /// Highest degree first; equal degrees keep stored order
    LargestDegreeFirst,
}

impl VertexOrder {
    /// All orders, for help texts.
    pub const ALL: [VertexOrder; 2] = [VertexOrder::Insertion, VertexOrder::LargestDegreeFirst];

    pub fn as_str(self) -> &'static str {
        match self {
            VertexOrder::Insertion => "insertion",
            VertexOrder::LargestDegreeFirst => "largest-degree-first",
        }
    }

    /// Vertex handles in the order the outer loop visits them.
    pub fn arrange(self, graph: &Graph) -> Vec<VertexId> {
        let mut order: Vec<VertexId> = graph.vertex_ids().collect();
        if self == VertexOrder::LargestDegreeFirst {
            // sort_by_key is stable
            order.sort_by_key(|&v| Reverse(graph.degree(v)));
        }
        order
    }
}

impl fmt::Display for VertexOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VertexOrder {
    type Err = HueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VertexOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| {
                HueError::validation(format!(
                    "Unknown vertex order '{}': expected 'insertion' or 'largest-degree-first'",
                    s
                ))
            })
    }
}

/// One color assignment, in the order the engine made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub vertex: VertexId,
    pub color: Color,
}

/// Outcome of a coloring run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColoringReport {
    /// Outer order that was used
    pub order: VertexOrder,

    /// Assignments in the exact order they were made
    pub assignments: Vec<Assignment>,

    /// Highest color assigned (0 for an empty graph)
    pub colors_used: u32,

    /// Computation time in milliseconds
    pub elapsed_ms: f64,
}

/// Returns the smallest color not held by any currently-colored neighbor.
///
/// Uncolored neighbors are ignored. Parallel edges only repeat a check.
pub fn smallest_free_color(graph: &Graph, vertex: VertexId) -> Color {
    // degree + 1 slots: at most `degree` of them can be taken
    let mut used = vec![false; graph.degree(vertex) + 1];
    for neighbor in graph.neighbors(vertex) {
        if let Some(color) = graph.color_of(neighbor) {
            let slot = (color.get() - 1) as usize;
            if slot < used.len() {
                used[slot] = true;
            }
        }
    }
    let mut candidate = Color::FIRST;
    for &taken in &used {
        if !taken {
            break;
        }
        candidate = candidate.next();
    }
    candidate
}

/// Applies the color-assignment rule to one vertex.
///
/// A vertex that already has a color keeps it and that color is returned.
pub fn color_vertex(graph: &mut Graph, vertex: VertexId) -> Color {
    if let Some(color) = graph.color_of(vertex) {
        return color;
    }
    let color = smallest_free_color(graph, vertex);
    graph.set_color(vertex, color);
    log::debug!("Colored '{}' with {}", graph.vertex(vertex).name(), color);
    color
}

/// Colors every vertex of `graph` in place, using stored vertex order.
pub fn color_graph(graph: &mut Graph) {
    GreedyColoring::default().run(graph);
}

/// Greedy coloring engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyColoring {
    order: VertexOrder,
}

impl GreedyColoring {
    pub fn new(order: VertexOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> VertexOrder {
        self.order
    }

    /// Colors `graph` in place and reports what was assigned.
    ///
    /// Colors already present on the graph are kept and not reported.
    pub fn run(&self, graph: &mut Graph) -> ColoringReport {
        let start = Instant::now();
        let mut assignments = Vec::with_capacity(graph.num_vertices());

        for vertex in self.order.arrange(graph) {
            if graph.color_of(vertex).is_some() {
                continue;
            }
            let color = color_vertex(graph, vertex);
            assignments.push(Assignment { vertex, color });

            for slot in 0..graph.degree(vertex) {
                let edge = graph.vertex(vertex).edges()[slot];
                let opposite = graph.edge(edge).opposite(vertex);
                if graph.color_of(opposite).is_some() {
                    continue;
                }
                let color = color_vertex(graph, opposite);
                assignments.push(Assignment {
                    vertex: opposite,
                    color,
                });
            }
        }

        let colors_used = graph
            .vertices()
            .iter()
            .filter_map(|v| v.color())
            .map(Color::get)
            .max()
            .unwrap_or(0);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let check = check_coloring(graph);
        if !check.is_valid() {
            log::warn!(
                "Coloring finished with {} conflicts and {} uncolored vertices",
                check.conflicts,
                check.uncolored
            );
        }
        log::info!(
            "Greedy coloring ({}): {} vertices, {} edges, {} colors, {:.3} ms",
            self.order,
            graph.num_vertices(),
            graph.num_edges(),
            colors_used,
            elapsed_ms
        );

        ColoringReport {
            order: self.order,
            assignments,
            colors_used,
            elapsed_ms,
        }
    }
}

/// Validation of a colored graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringCheck {
    /// Edges whose two endpoints share a color
    pub conflicts: usize,

    /// Vertices without a color
    pub uncolored: usize,
}

impl ColoringCheck {
    /// Checks if the coloring is complete and conflict-free.
    pub fn is_valid(&self) -> bool {
        self.conflicts == 0 && self.uncolored == 0
    }
}

/// Counts conflicting edges and uncolored vertices.
pub fn check_coloring(graph: &Graph) -> ColoringCheck {
    let conflicts = graph
        .edges()
        .iter()
        .filter(|edge| {
            let (a, b) = edge.endpoints();
            matches!(
                (graph.color_of(a), graph.color_of(b)),
                (Some(ca), Some(cb)) if ca == cb
            )
        })
        .count();

    ColoringCheck {
        conflicts,
        uncolored: graph.uncolored_vertices().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(graph: &Graph) -> Vec<u32> {
        graph
            .colors()
            .into_iter()
            .map(|c| c.map(Color::get).unwrap_or(0))
            .collect()
    }

    #[test]
    fn test_single_vertex_gets_first_color() {
        let mut graph = Graph::new();
        graph.add_vertex("solo");
        color_graph(&mut graph);
        assert_eq!(colors(&graph), vec![1]);
    }

    #[test]
    fn test_single_edge() {
        let mut graph = Graph::from_parts(["a", "b"], [("ab", 0, 1)]).unwrap();
        color_graph(&mut graph);
        assert_eq!(colors(&graph), vec![1, 2]);
    }

    #[test]
    fn test_triangle_needs_three_colors() {
        let mut graph =
            Graph::from_parts(["a", "b", "c"], [("ab", 0, 1), ("bc", 1, 2), ("ca", 2, 0)])
                .unwrap();
        let report = GreedyColoring::default().run(&mut graph);
        assert_eq!(colors(&graph), vec![1, 2, 3]);
        assert_eq!(report.colors_used, 3);
        assert!(check_coloring(&graph).is_valid());
    }

    #[test]
    fn test_empty_graph_is_noop() {
        let mut graph = Graph::new();
        let report = GreedyColoring::default().run(&mut graph);
        assert!(report.assignments.is_empty());
        assert_eq!(report.colors_used, 0);
    }

    #[test]
    fn test_color_vertex_is_idempotent() {
        let mut graph = Graph::from_parts(["a", "b"], [("ab", 0, 1)]).unwrap();
        let first = color_vertex(&mut graph, VertexId(1));
        assert_eq!(first, Color::FIRST);

        // Neighbor now takes 2; recoloring `b` must not move it
        color_vertex(&mut graph, VertexId(0));
        assert_eq!(graph.color_of(VertexId(0)).map(Color::get), Some(2));
        assert_eq!(color_vertex(&mut graph, VertexId(1)), first);
    }

    #[test]
    fn test_smallest_free_color_skips_taken() {
        // Star: center 0 with leaves 1..=3
        let mut graph =
            Graph::from_parts(["c", "l1", "l2", "l3"], [("e1", 0, 1), ("e2", 0, 2), ("e3", 0, 3)])
                .unwrap();
        color_vertex(&mut graph, VertexId(1)); // 1
        color_vertex(&mut graph, VertexId(2)); // 1, leaves are independent
        assert_eq!(smallest_free_color(&graph, VertexId(0)).get(), 2);
        assert_eq!(smallest_free_color(&graph, VertexId(3)).get(), 1);
    }

    #[test]
    fn test_smallest_free_color_walks_past_taken_run() {
        // Center sees colors 1 and 2 on its leaves, so the scan stops at 3
        let mut graph =
            Graph::from_parts(["c", "l1", "l2"], [("e1", 0, 1), ("e2", 0, 2)]).unwrap();
        graph.set_color(VertexId(1), Color::FIRST);
        graph.set_color(VertexId(2), Color::FIRST.next());
        assert_eq!(smallest_free_color(&graph, VertexId(0)).get(), 3);
    }

    #[test]
    fn test_neighbor_pass_order_recorded() {
        // Path a - b - c, started from the middle by degree order
        let mut graph = Graph::from_parts(["a", "b", "c"], [("ab", 0, 1), ("bc", 1, 2)]).unwrap();
        let report = GreedyColoring::new(VertexOrder::LargestDegreeFirst).run(&mut graph);

        let visited: Vec<_> = report.assignments.iter().map(|a| a.vertex.index()).collect();
        assert_eq!(visited, vec![1, 0, 2]);
        assert_eq!(colors(&graph), vec![2, 1, 2]);
    }

    #[test]
    fn test_degree_order_is_stable() {
        let graph = Graph::from_parts(
            ["a", "b", "c", "d"],
            [("e1", 0, 3), ("e2", 1, 3), ("e3", 2, 3)],
        )
        .unwrap();
        let order = VertexOrder::LargestDegreeFirst.arrange(&graph);
        let indices: Vec<_> = order.iter().map(|v| v.index()).collect();
        assert_eq!(indices, vec![3, 0, 1, 2]);
    }

    #[test]
    fn test_vertex_order_parsing() {
        assert_eq!("insertion".parse::<VertexOrder>().unwrap(), VertexOrder::Insertion);
        assert_eq!(
            "largest-degree-first".parse::<VertexOrder>().unwrap(),
            VertexOrder::LargestDegreeFirst
        );
        assert!(matches!(
            "random".parse::<VertexOrder>(),
            Err(HueError::ValidationError(_))
        ));
    }

    #[test]
    fn test_check_counts_uncolored_and_conflicts() {
        let mut graph = Graph::from_parts(["a", "b", "c"], [("ab", 0, 1)]).unwrap();
        let check = check_coloring(&graph);
        assert_eq!(check.uncolored, 3);
        assert_eq!(check.conflicts, 0);

        graph.set_color(VertexId(0), Color::FIRST);
        graph.set_color(VertexId(1), Color::FIRST);
        let check = check_coloring(&graph);
        assert_eq!(check.conflicts, 1);
        assert_eq!(check.uncolored, 1);
        assert!(!check.is_valid());
    }
}
