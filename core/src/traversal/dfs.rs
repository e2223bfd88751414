use crate::error::GraphResult;
use crate::graph::{Graph, VertexId};

use super::{Search, SearchTree};

/// Depth-first exploration from a single source.
///
/// Discovery order is the recursive preorder: each vertex's neighbors are
/// tried in adjacency order, and an unvisited neighbor is fully explored
/// before the next one is tried. The walk uses an explicit stack of
/// `(vertex, next neighbor index)` frames, so deep graphs cannot overflow
/// the call stack. Paths follow the discovery tree and are not
/// necessarily shortest.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch<'g> {
    graph: &'g Graph,
    tree: SearchTree,
}

impl<'g> DepthFirstSearch<'g> {
    /// Run the full traversal from `source`.
    pub fn new(graph: &'g Graph, source: VertexId) -> GraphResult<Self> {
        let mut tree = SearchTree::rooted_at(graph, source)?;
        explore(graph, &mut tree, source);

        log::debug!(
            "dfs from {}: reached {} of {} vertices",
            source,
            tree.reached_count(),
            graph.vertex_count()
        );

        Ok(Self { graph, tree })
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }
}

impl Search for DepthFirstSearch<'_> {
    fn tree(&self) -> &SearchTree {
        &self.tree
    }
}

fn explore(graph: &Graph, tree: &mut SearchTree, source: VertexId) {
    let mut stack: Vec<(VertexId, usize)> = vec![(source, 0)];

    while let Some(top) = stack.last_mut() {
        let (current, cursor) = *top;
        match graph.adjacent(current).get(cursor) {
            None => {
                stack.pop();
            }
            Some(&next) => {
                top.1 += 1;
                if !tree.is_visited(next) {
                    tree.discover(next, Some(current));
                    stack.push((next, 0));
                }
            }
        }
    }
}
