//! Small named graphs for demos, tests and benchmarks.

use crate::{Graph, VertexId};

/// Upper bound on edge slots reserved up front by [`complete`].
const MAX_RESERVED_EDGES: usize = 1 << 20;

fn link(graph: &mut Graph, name: String, a: VertexId, b: VertexId) {
    let result = graph.add_edge(name, a, b);
    debug_assert!(result.is_ok(), "sample edge rejected: {:?}", result);
}

/// Edge count of K_n, saturating at `usize::MAX`.
fn complete_edge_count(n: usize) -> usize {
    let pairs = n.saturating_mul(n.saturating_sub(1));
    if pairs == usize::MAX {
        pairs
    } else {
        pairs / 2
    }
}

/// Five-vertex graph from MIT 6.042J (Fall 2010), lecture 6 on graph coloring.
///
/// Vertices v1..v5 with edges e1(v1,v2) e2(v1,v3) e3(v1,v4) e4(v2,v3)
/// e5(v3,v4) e6(v4,v5). Greedy coloring in stored order yields
/// v1=1, v2=2, v3=3, v4=2, v5=1.
pub fn lecture_graph() -> Graph {
    let mut graph = Graph::with_capacity(5, 6);
    let v: Vec<VertexId> = (1..=5).map(|i| graph.add_vertex(format!("v{}", i))).collect();
    let edges = [
        (v[0], v[1]),
        (v[0], v[2]),
        (v[0], v[3]),
        (v[1], v[2]),
        (v[2], v[3]),
        (v[3], v[4]),
    ];
    for (i, (a, b)) in edges.into_iter().enumerate() {
        link(&mut graph, format!("e{}", i + 1), a, b);
    }
    graph
}

/// Path v1 - v2 - ... - vn.
pub fn path(n: usize) -> Graph {
    let mut graph = Graph::with_capacity(n, n.saturating_sub(1));
    let vertices: Vec<VertexId> = (1..=n).map(|i| graph.add_vertex(format!("v{}", i))).collect();
    for (i, pair) in vertices.windows(2).enumerate() {
        link(&mut graph, format!("e{}", i + 1), pair[0], pair[1]);
    }
    graph
}

/// Cycle of length n. Below three vertices this is the path of the same size.
pub fn cycle(n: usize) -> Graph {
    let mut graph = path(n);
    if n >= 3 {
        link(&mut graph, format!("e{}", n), VertexId(n - 1), VertexId(0));
    }
    graph
}

/// Complete graph K_n.
pub fn complete(n: usize) -> Graph {
    let mut graph = Graph::with_capacity(n, complete_edge_count(n).min(MAX_RESERVED_EDGES));
    for i in 1..=n {
        graph.add_vertex(format!("v{}", i));
    }
    let mut count = 0;
    for a in 0..n {
        for b in (a + 1)..n {
            count += 1;
            link(&mut graph, format!("e{}", count), VertexId(a), VertexId(b));
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lecture_graph_shape() {
        let graph = lecture_graph();
        assert_eq!(graph.num_vertices(), 5);
        assert_eq!(graph.num_edges(), 6);
        assert_eq!(graph.degree(VertexId(0)), 3);
        assert_eq!(graph.degree(VertexId(4)), 1);
    }

    #[test]
    fn test_builders_edge_counts() {
        assert_eq!(path(4).num_edges(), 3);
        assert_eq!(path(0).num_edges(), 0);
        assert_eq!(cycle(5).num_edges(), 5);
        assert_eq!(cycle(2).num_edges(), 1);
        assert_eq!(complete(5).num_edges(), 10);
        assert_eq!(complete(1).num_edges(), 0);
    }

    #[test]
    fn test_complete_edge_count_saturates() {
        assert_eq!(complete_edge_count(0), 0);
        assert_eq!(complete_edge_count(1), 0);
        assert_eq!(complete_edge_count(6), 15);
        assert_eq!(complete_edge_count(1 << 16), 2_147_450_880);
        assert_eq!(complete_edge_count(usize::MAX), usize::MAX);
    }
}
