//! # hue-core
//!
//! Core types, errors and the greedy coloring engine for hue.
//!
//! - **Types**: the graph arena with its vertices, edges and colors
//! - **Coloring**: greedy vertex coloring and validation
//! - **Errors**: unified error handling with HueError
//! - **I/O**: DIMACS .col files and JSON graph descriptions
//!
//! ## Architecture
//! ```text
//! ┌──────────────┐   ┌────────────────┐
//! │ dimacs       │   │ description    │  ← input formats
//! └──────┬───────┘   └───────┬────────┘
//!        └─────────┬─────────┘
//!          ┌───────▼────────┐
//!          │ types (Graph)  │  ← arena of vertices and edges
//!          └───────┬────────┘
//!          ┌───────▼────────┐
//!          │ coloring       │  ← mutates vertex colors in place
//!          └────────────────┘
//! ```

pub mod coloring;
pub mod description;
pub mod dimacs;
pub mod errors;
pub mod samples;
pub mod types;

// Re-export commonly used items
pub use coloring::{
    check_coloring, color_graph, color_vertex, smallest_free_color, Assignment, ColoringCheck,
    ColoringReport, GreedyColoring, VertexOrder,
};
pub use description::{ColoredGraph, ColoredVertex, EdgeDescription, GraphDescription};
pub use errors::HueError;
pub use types::{Color, Edge, EdgeDisplay, EdgeId, Graph, GraphStats, Vertex, VertexId};
