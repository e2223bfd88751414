//! graph-search-core: Undirected graph traversal.
//!
//! An adjacency-list graph over dense vertex ids `[0, V)` plus two eager
//! traversals from a single source: depth-first (reachability and a
//! discovery tree) and breadth-first (reachability, shortest unweighted
//! paths and hop distances).
//!
//! Traversals borrow the graph they explore, so the borrow checker keeps
//! the graph alive and unmodified for as long as any traversal exists.

mod error;
mod graph;
mod load;
pub mod sample;
pub mod traversal;

pub use error::{GraphError, GraphResult};
pub use graph::{Arcs, Graph, Iter, VertexId};
pub use load::{parse_edge_list, read_edge_list};
pub use sample::sample_graph;
pub use traversal::{BreadthFirstSearch, DepthFirstSearch, Distance, Search, SearchTree};
