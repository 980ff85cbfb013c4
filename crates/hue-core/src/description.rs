//! Serializable graph descriptions and colored-graph snapshots.
//!
//! A [`GraphDescription`] is the JSON input form of a graph: vertex names in
//! order, and edges naming their endpoints by vertex name.
//!
//! ```json
//! {
//!   "vertices": ["v1", "v2", "v3"],
//!   "edges": [
//!     { "name": "e1", "a": "v1", "b": "v2" },
//!     { "name": "e2", "a": "v2", "b": "v3" }
//!   ]
//! }
//! ```
//!
//! A [`ColoredGraph`] is what rendering or reporting callers read back after
//! coloring: each vertex name with its color.

use crate::{Color, Graph, HueError, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Edge of a [`GraphDescription`], endpoints given by vertex name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDescription {
    pub name: String,
    pub a: String,
    pub b: String,
}

/// Name-based description of a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    #[serde(default)]
    pub vertices: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
}

impl GraphDescription {
    /// Parses a description from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, HueError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Describes an existing graph (colors are not part of a description).
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            vertices: graph
                .vertices()
                .iter()
                .map(|v| v.name().to_string())
                .collect(),
            edges: graph
                .edges()
                .iter()
                .map(|edge| {
                    let (a, b) = edge.endpoints();
                    EdgeDescription {
                        name: edge.name().to_string(),
                        a: graph.vertex(a).name().to_string(),
                        b: graph.vertex(b).name().to_string(),
                    }
                })
                .collect(),
        }
    }

    /// Builds the graph, preserving vertex and edge order.
    ///
    /// When a vertex name is declared twice, both vertices are created but
    /// edges resolve the name to the first one.
    ///
    /// ## Errors
    /// - `HueError::UnknownVertex` for an endpoint name never declared
    /// - `HueError::SelfLoop` for an edge whose endpoints resolve to one vertex
    pub fn build(&self) -> Result<Graph, HueError> {
        let mut graph = Graph::with_capacity(self.vertices.len(), self.edges.len());
        let mut by_name: HashMap<&str, VertexId> = HashMap::with_capacity(self.vertices.len());

        for name in &self.vertices {
            let id = graph.add_vertex(name.as_str());
            if by_name.contains_key(name.as_str()) {
                log::warn!("Vertex name '{}' declared more than once", name);
            } else {
                by_name.insert(name.as_str(), id);
            }
        }

        for edge in &self.edges {
            let resolve = |name: &str| {
                by_name
                    .get(name)
                    .copied()
                    .ok_or_else(|| HueError::unknown_vertex(&edge.name, name))
            };
            let a = resolve(&edge.a)?;
            let b = resolve(&edge.b)?;
            graph.add_edge(edge.name.as_str(), a, b)?;
        }

        log::debug!(
            "Built graph from description: {} vertices, {} edges",
            graph.num_vertices(),
            graph.num_edges()
        );
        Ok(graph)
    }
}

/// Vertex entry of a [`ColoredGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoredVertex {
    pub name: String,

    /// `None` while uncolored
    pub color: Option<Color>,
}

/// Snapshot of a graph with its current colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoredGraph {
    pub vertices: Vec<ColoredVertex>,
    pub edges: Vec<EdgeDescription>,
}

impl ColoredGraph {
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            vertices: graph
                .vertices()
                .iter()
                .map(|v| ColoredVertex {
                    name: v.name().to_string(),
                    color: v.color(),
                })
                .collect(),
            edges: GraphDescription::from_graph(graph).edges,
        }
    }

    /// Color of the first vertex named `name`.
    pub fn color_of(&self, name: &str) -> Option<Color> {
        self.vertices
            .iter()
            .find(|v| v.name == name)
            .and_then(|v| v.color)
    }
}
