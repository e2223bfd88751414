//! Small graphs shared by traversal tests.

use crate::graph::Graph;

pub use crate::sample::SAMPLE_EDGES;

pub fn sample_graph() -> Graph {
    crate::sample::sample_graph().unwrap()
}

/// 0 - 1 - ... - (n-1)
pub fn make_chain(n: usize) -> Graph {
    Graph::from_edges(n, (0..n - 1).map(|i| (i, i + 1))).unwrap()
}

/// Hub 0 joined to leaves 1..=leaves.
pub fn make_star(leaves: usize) -> Graph {
    Graph::from_edges(leaves + 1, (1..=leaves).map(|i| (0, i))).unwrap()
}

/// 0 - 1 - ... - (n-1) - 0
pub fn make_cycle(n: usize) -> Graph {
    Graph::from_edges(n, (0..n).map(|i| (i, (i + 1) % n))).unwrap()
}
