//! The 13-vertex demonstration graph: three components
//! (`0..=6`, `7..=8`, `9..=12`).

use crate::error::GraphResult;
use crate::graph::{Graph, VertexId};

pub const SAMPLE_VERTICES: usize = 13;

/// Edge list in insertion order. Neighbor order, and so traversal order,
/// depends on it.
pub const SAMPLE_EDGES: [(VertexId, VertexId); 13] = [
    (0, 5),
    (4, 3),
    (0, 1),
    (9, 12),
    (6, 4),
    (5, 4),
    (0, 2),
    (11, 12),
    (9, 10),
    (0, 6),
    (7, 8),
    (9, 11),
    (5, 3),
];

pub fn sample_graph() -> GraphResult<Graph> {
    Graph::from_edges(SAMPLE_VERTICES, SAMPLE_EDGES)
}
