//! Core data types: vertices, edges and the graph arena that owns them.
//!
//! The [`Graph`] is the only owner of vertex and edge storage. Vertices and
//! edges refer to each other through the stable [`VertexId`] and [`EdgeId`]
//! handles, so there are no ownership cycles between the two.
//!
//! ## Example
//! ```rust
//! use hue_core::Graph;
//!
//! let mut graph = Graph::new();
//! let v1 = graph.add_vertex("v1");
//! let v2 = graph.add_vertex("v2");
//! let e1 = graph.add_edge("e1", v1, v2)?;
//!
//! assert_eq!(graph.edge(e1).opposite(v1), v2);
//! assert_eq!(graph.vertex(v1).edges(), &[e1]);
//! # Ok::<(), hue_core::HueError>(())
//! ```

use crate::errors::{HueError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Handle of a vertex inside its [`Graph`] (insertion index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Position of the vertex in the graph's vertex sequence.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle of an edge inside its [`Graph`] (insertion index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub usize);

impl EdgeId {
    /// Position of the edge in the graph's edge sequence.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A positive integer color. Colors start at 1.
///
/// An uncolored vertex holds `None` rather than a sentinel color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(NonZeroU32);

impl Color {
    /// The smallest color, 1.
    pub const FIRST: Color = Color(NonZeroU32::MIN);

    /// Creates a color from its integer value. Returns `None` for 0.
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Color)
    }

    /// Integer value of the color (always >= 1).
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The next candidate color.
    pub fn next(self) -> Self {
        Color(self.0.saturating_add(1))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named graph node holding an optional color and its incident edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    name: String,
    color: Option<Color>,
    /// Incident edges in the order they were created
    edges: Vec<EdgeId>,
}

impl Vertex {
    fn new(name: String) -> Self {
        Self {
            name,
            color: None,
            edges: Vec::new(),
        }
    }

    /// Display name of the vertex. Not required to be unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assigned color, or `None` while uncolored.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn is_colored(&self) -> bool {
        self.color.is_some()
    }

    /// Incident edges, in creation order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Number of incident edges (parallel edges counted separately).
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "Vertex ({}, {})", self.name, color),
            None => write!(f, "Vertex ({}, uncolored)", self.name),
        }
    }
}

/// An undirected, immutable connection between two distinct vertices.
///
/// The `a`/`b` order carries no meaning beyond resolving the opposite endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    name: String,
    a: VertexId,
    b: VertexId,
}

impl Edge {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Both endpoints, in construction order.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    /// The endpoint that is not `vertex`.
    ///
    /// If `vertex` is not an endpoint at all, `b` is returned.
    pub fn opposite(&self, vertex: VertexId) -> VertexId {
        if self.b == vertex {
            self.a
        } else {
            self.b
        }
    }

    /// Whether `vertex` is one of the two endpoints.
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.a == vertex || self.b == vertex
    }
}

/// Graph arena: the ordered vertex and edge sequences.
///
/// Vertex order is significant. It drives the outer loop of the greedy
/// coloring and therefore the resulting colors, though never their validity.
///
/// Construction rules:
/// - self-loops are rejected with [`HueError::SelfLoop`]
/// - endpoints outside the graph are rejected with [`HueError::DanglingEndpoint`]
/// - parallel edges and duplicate vertex names are accepted
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with preallocated storage.
    pub fn with_capacity(num_vertices: usize, num_edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(num_vertices),
            edges: Vec::with_capacity(num_edges),
        }
    }

    /// Assembles a graph from ordered vertex names and `(name, a, b)` edges,
    /// where `a` and `b` are indices into the vertex sequence.
    ///
    /// ## Errors
    /// - `HueError::DanglingEndpoint` if an index is out of range
    /// - `HueError::SelfLoop` if `a == b`
    pub fn from_parts<V, E>(
        vertex_names: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = (E, usize, usize)>,
    ) -> Result<Self>
    where
        V: Into<String>,
        E: Into<String>,
    {
        let mut graph = Graph::new();
        for name in vertex_names {
            graph.add_vertex(name);
        }
        for (name, a, b) in edges {
            graph.add_edge(name, VertexId(a), VertexId(b))?;
        }
        Ok(graph)
    }

    /// Appends an uncolored vertex with no edges.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(name.into()));
        id
    }

    /// Creates an edge and registers it in the incidence lists of both endpoints.
    pub fn add_edge(&mut self, name: impl Into<String>, a: VertexId, b: VertexId) -> Result<EdgeId> {
        let name = name.into();
        let num_vertices = self.vertices.len();
        for endpoint in [a, b] {
            if endpoint.0 >= num_vertices {
                return Err(HueError::dangling(name, endpoint.0, num_vertices));
            }
        }
        if a == b {
            return Err(HueError::self_loop(name, self.vertices[a.0].name.clone()));
        }

        let parallel = log::log_enabled!(log::Level::Debug)
            && self.vertices[a.0]
                .edges
                .iter()
                .any(|e| self.edges[e.0].touches(b));
        if parallel {
            log::debug!(
                "Edge '{}' is parallel to an existing edge between '{}' and '{}'",
                name,
                self.vertices[a.0].name,
                self.vertices[b.0].name
            );
        }

        let id = EdgeId(self.edges.len());
        self.vertices[a.0].edges.push(id);
        self.vertices[b.0].edges.push(id);
        self.edges.push(Edge { name, a, b });
        Ok(id)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex behind a handle.
    ///
    /// # Panics
    /// If `id` does not belong to this graph.
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    /// Returns the edge behind a handle.
    ///
    /// # Panics
    /// If `id` does not belong to this graph.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All vertex handles in stored order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    /// All edge handles in stored order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId)
    }

    /// Opposite endpoints of `vertex`'s incident edges, in incidence order.
    ///
    /// A neighbor reached through parallel edges is yielded once per edge.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices[vertex.0]
            .edges
            .iter()
            .map(move |&e| self.edges[e.0].opposite(vertex))
    }

    pub fn degree(&self, vertex: VertexId) -> usize {
        self.vertices[vertex.0].degree()
    }

    pub fn max_degree(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).max().unwrap_or(0)
    }

    pub fn color_of(&self, vertex: VertexId) -> Option<Color> {
        self.vertices[vertex.0].color
    }

    /// Per-vertex colors in stored order.
    pub fn colors(&self) -> Vec<Option<Color>> {
        self.vertices.iter().map(|v| v.color).collect()
    }

    pub fn uncolored_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex_ids()
            .filter(move |&v| self.vertices[v.0].color.is_none())
    }

    /// First vertex carrying `name`, if any.
    pub fn find_vertex(&self, name: &str) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| v.name == name)
            .map(VertexId)
    }

    /// Only the coloring engine writes colors.
    pub(crate) fn set_color(&mut self, vertex: VertexId, color: Color) {
        self.vertices[vertex.0].color = Some(color);
    }

    /// Diagnostic rendering of one edge with both endpoint vertices.
    pub fn display_edge(&self, id: EdgeId) -> EdgeDisplay<'_> {
        EdgeDisplay { graph: self, id }
    }

    /// Summary statistics of the graph.
    pub fn stats(&self) -> GraphStats {
        GraphStats::from_graph(self)
    }
}

/// Renders `Edge (<vertex a>, <vertex b>)`.
pub struct EdgeDisplay<'g> {
    graph: &'g Graph,
    id: EdgeId,
}

impl fmt::Display for EdgeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.graph.edge(self.id).endpoints();
        write!(f, "Edge ({}, {})", self.graph.vertex(a), self.graph.vertex(b))
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph ( V = (")?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", vertex)?;
        }
        write!(f, "), E = (")?;
        for (i, id) in self.edge_ids().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", self.display_edge(id))?;
        }
        write!(f, "))")
    }
}

/// Graph statistics used in reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of vertices
    pub num_vertices: usize,

    /// Number of edges
    pub num_edges: usize,

    /// Largest vertex degree
    pub max_degree: usize,

    /// Average vertex degree
    pub avg_degree: f64,

    /// Graph density: |E| / (|V| * (|V| - 1) / 2)
    pub density: f64,
}

impl GraphStats {
    /// Computes statistics from a graph.
    pub fn from_graph(graph: &Graph) -> Self {
        let n = graph.num_vertices();
        let m = graph.num_edges();

        let density = if n > 1 {
            (2.0 * m as f64) / (n as f64 * (n - 1) as f64)
        } else {
            0.0
        };

        let avg_degree = if n > 0 {
            (2.0 * m as f64) / n as f64
        } else {
            0.0
        };

        Self {
            num_vertices: n,
            num_edges: m,
            max_degree: graph.max_degree(),
            avg_degree,
            density,
        }
    }
}
