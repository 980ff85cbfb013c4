//! Error types for hue.
//!
//! Every error is raised while a graph is being built or loaded. The coloring
//! engine itself has no failure modes.

use thiserror::Error;

/// Unified error type for all hue operations.
#[derive(Error, Debug)]
pub enum HueError {
    /// An edge whose two endpoints are the same vertex
    #[error("Edge '{edge}' is a self-loop on vertex '{vertex}'")]
    SelfLoop { edge: String, vertex: String },

    /// An edge endpoint handle that does not name a vertex of the graph
    #[error("Edge '{edge}' references vertex #{vertex}, but the graph has {num_vertices} vertices")]
    DanglingEndpoint {
        edge: String,
        vertex: usize,
        num_vertices: usize,
    },

    /// An edge description naming a vertex that was never declared
    #[error("Edge '{edge}' references unknown vertex '{name}'")]
    UnknownVertex { edge: String, name: String },

    /// Input validation errors (malformed DIMACS, bad descriptions)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// I/O errors (file reading)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl HueError {
    /// Creates a self-loop error.
    pub fn self_loop(edge: impl Into<String>, vertex: impl Into<String>) -> Self {
        HueError::SelfLoop {
            edge: edge.into(),
            vertex: vertex.into(),
        }
    }

    /// Creates a dangling endpoint error.
    pub fn dangling(edge: impl Into<String>, vertex: usize, num_vertices: usize) -> Self {
        HueError::DanglingEndpoint {
            edge: edge.into(),
            vertex,
            num_vertices,
        }
    }

    /// Creates an unknown vertex error.
    pub fn unknown_vertex(edge: impl Into<String>, name: impl Into<String>) -> Self {
        HueError::UnknownVertex {
            edge: edge.into(),
            name: name.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        HueError::ValidationError(message.into())
    }

    /// Checks if this error originates from graph construction rules
    /// rather than from reading input.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            HueError::SelfLoop { .. }
                | HueError::DanglingEndpoint { .. }
                | HueError::UnknownVertex { .. }
        )
    }

    /// Returns a user-friendly error message with actionable guidance.
    pub fn user_message(&self) -> String {
        match self {
            HueError::SelfLoop { edge, vertex } => {
                format!(
                    "Edge '{}' connects vertex '{}' to itself.\n\
                     → Self-loops cannot be colored; remove the edge from the input.",
                    edge, vertex
                )
            }
            HueError::DanglingEndpoint {
                edge,
                vertex,
                num_vertices,
            } => {
                format!(
                    "Edge '{}' points at vertex #{} which does not exist ({} vertices).\n\
                     → Add every vertex to the graph before creating edges on it.",
                    edge, vertex, num_vertices
                )
            }
            HueError::UnknownVertex { edge, name } => {
                format!(
                    "Edge '{}' names vertex '{}', which is not in the vertex list.\n\
                     → Declare the vertex in \"vertices\" or fix the spelling.",
                    edge, name
                )
            }
            HueError::ValidationError(msg) => {
                format!(
                    "Validation error: {}\n\
                     → Verify the input graph format (DIMACS .col or JSON description).",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for hue operations.
pub type Result<T> = std::result::Result<T, HueError>;
