//! Single-source traversals over a [`Graph`].
//!
//! Both traversals run to completion inside their constructor and then only
//! answer read-only queries. They share the [`SearchTree`] result shape and
//! the [`Search`] query surface, so callers can pick one at runtime through
//! `&dyn Search`.

mod bfs;
mod dfs;

#[cfg(test)]
pub(crate) mod fixtures;

pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;

use crate::error::{check_vertex, GraphResult};
use crate::graph::{Graph, VertexId};

/// Hop count from the traversal source.
pub type Distance = u32;

/// Reachability plus parent pointers recorded during a traversal.
///
/// `parent` is `None` for the source and for every unvisited vertex; it is
/// only meaningful where `visited` is set.
#[derive(Debug, Clone)]
pub struct SearchTree {
    source: VertexId,
    visited: Vec<bool>,
    parent: Vec<Option<VertexId>>,
    order: Vec<VertexId>,
}

impl SearchTree {
    /// Empty tree sized for `graph`, with only `source` discovered.
    pub(crate) fn rooted_at(graph: &Graph, source: VertexId) -> GraphResult<Self> {
        let vertex_count = graph.vertex_count();
        check_vertex(source, vertex_count)?;

        let mut tree = Self {
            source,
            visited: vec![false; vertex_count],
            parent: vec![None; vertex_count],
            order: Vec::new(),
        };
        tree.discover(source, None);
        Ok(tree)
    }

    pub(crate) fn is_visited(&self, v: VertexId) -> bool {
        self.visited[v]
    }

    pub(crate) fn discover(&mut self, v: VertexId, parent: Option<VertexId>) {
        self.visited[v] = true;
        self.parent[v] = parent;
        self.order.push(v);
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Number of vertices in the explored graph.
    pub fn vertex_count(&self) -> usize {
        self.visited.len()
    }

    pub fn exists(&self, v: VertexId) -> GraphResult<bool> {
        check_vertex(v, self.vertex_count())?;
        Ok(self.visited[v])
    }

    /// Vertex `v` was discovered from. `None` for the source or when `v`
    /// is unreachable.
    pub fn parent(&self, v: VertexId) -> GraphResult<Option<VertexId>> {
        check_vertex(v, self.vertex_count())?;
        Ok(self.parent[v])
    }

    /// Source-to-`v` path through the parent pointers, both ends included.
    /// Empty when `v` is unreachable.
    pub fn path_to(&self, v: VertexId) -> GraphResult<Vec<VertexId>> {
        if !self.exists(v)? {
            return Ok(Vec::new());
        }

        let mut path = vec![v];
        let mut current = v;
        while let Some(parent) = self.parent[current] {
            path.push(parent);
            current = parent;
        }

        path.reverse();
        Ok(path)
    }

    /// Reachable vertices in ascending id order.
    pub fn reachable(&self) -> Vec<VertexId> {
        self.visited
            .iter()
            .enumerate()
            .filter_map(|(v, &seen)| seen.then_some(v))
            .collect()
    }

    pub fn reached_count(&self) -> usize {
        self.order.len()
    }

    /// Vertices in the order the traversal discovered them, source first.
    pub fn discovery_order(&self) -> &[VertexId] {
        &self.order
    }
}

/// Read-only queries shared by [`DepthFirstSearch`] and [`BreadthFirstSearch`].
///
/// Every vertex argument is range-checked; ids outside the graph return
/// [`crate::GraphError::VertexOutOfRange`].
pub trait Search {
    fn tree(&self) -> &SearchTree;

    fn source(&self) -> VertexId {
        self.tree().source()
    }

    /// True iff `v` is reachable from the source.
    fn exists(&self, v: VertexId) -> GraphResult<bool> {
        self.tree().exists(v)
    }

    /// Path from the source to `v` inclusive, or empty if unreachable.
    fn path_to(&self, v: VertexId) -> GraphResult<Vec<VertexId>> {
        self.tree().path_to(v)
    }

    fn reachable(&self) -> Vec<VertexId> {
        self.tree().reachable()
    }

    fn reached_count(&self) -> usize {
        self.tree().reached_count()
    }

    fn discovery_order(&self) -> &[VertexId] {
        self.tree().discovery_order()
    }
}
