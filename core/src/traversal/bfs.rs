use std::collections::VecDeque;

use crate::error::{check_vertex, GraphResult};
use crate::graph::{Graph, VertexId};

use super::{Distance, Search, SearchTree};

/// Breadth-first exploration from a single source.
///
/// Each vertex is discovered at its minimum hop distance, so
/// [`Search::path_to`] returns a shortest path by edge count. Distances are
/// assigned per vertex at discovery as `distance[parent] + 1`, which keeps
/// them non-decreasing along the discovery order.
#[derive(Debug, Clone)]
pub struct BreadthFirstSearch<'g> {
    graph: &'g Graph,
    tree: SearchTree,
    distance: Vec<Distance>,
}

impl<'g> BreadthFirstSearch<'g> {
    /// Run the full traversal from `source`.
    pub fn new(graph: &'g Graph, source: VertexId) -> GraphResult<Self> {
        let mut tree = SearchTree::rooted_at(graph, source)?;
        let mut distance = vec![0; graph.vertex_count()];
        let mut queue: VecDeque<VertexId> = VecDeque::new();
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            let next_distance = distance[current] + 1;
            for &next in graph.adjacent(current) {
                if !tree.is_visited(next) {
                    tree.discover(next, Some(current));
                    distance[next] = next_distance;
                    queue.push_back(next);
                }
            }
        }

        log::debug!(
            "bfs from {}: reached {} of {} vertices",
            source,
            tree.reached_count(),
            graph.vertex_count()
        );

        Ok(Self {
            graph,
            tree,
            distance,
        })
    }

    /// Minimum number of edges from the source to `v`, or `None` when `v`
    /// is unreachable.
    pub fn distance_to(&self, v: VertexId) -> GraphResult<Option<Distance>> {
        check_vertex(v, self.distance.len())?;
        Ok(self.tree.is_visited(v).then(|| self.distance[v]))
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }
}

impl Search for BreadthFirstSearch<'_> {
    fn tree(&self) -> &SearchTree {
        &self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::fixtures::*;
    use crate::traversal::DepthFirstSearch;
    use crate::GraphError;

    #[test]
    fn test_bfs_sample_graph() {
        let g = sample_graph();
        let bfs = BreadthFirstSearch::new(&g, 0).unwrap();

        assert!(bfs.exists(3).unwrap());
        assert!(!bfs.exists(7).unwrap());
        assert_eq!(bfs.path_to(3).unwrap(), vec![0, 5, 3]);
        assert_eq!(bfs.distance_to(3).unwrap(), Some(2));
        assert_eq!(bfs.path_to(4).unwrap(), vec![0, 5, 4]);
        assert_eq!(bfs.distance_to(6).unwrap(), Some(1));
        assert_eq!(bfs.distance_to(7).unwrap(), None);
        assert!(bfs.path_to(7).unwrap().is_empty());
    }

    #[test]
    fn test_bfs_discovery_order() {
        let g = sample_graph();
        let bfs = BreadthFirstSearch::new(&g, 0).unwrap();
        assert_eq!(bfs.discovery_order(), &[0, 5, 1, 2, 6, 4, 3]);
    }

    #[test]
    fn test_bfs_distances_non_decreasing_in_order() {
        let g = sample_graph();
        let bfs = BreadthFirstSearch::new(&g, 0).unwrap();
        let distances: Vec<Distance> = bfs
            .discovery_order()
            .iter()
            .map(|&v| bfs.distance_to(v).unwrap().unwrap())
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_bfs_source() {
        let g = sample_graph();
        let bfs = BreadthFirstSearch::new(&g, 12).unwrap();
        assert_eq!(bfs.path_to(12).unwrap(), vec![12]);
        assert_eq!(bfs.distance_to(12).unwrap(), Some(0));
        assert_eq!(bfs.reachable(), vec![9, 10, 11, 12]);
        assert_eq!(bfs.distance_to(10).unwrap(), Some(2));
    }

    #[test]
    fn test_bfs_chain() {
        let g = make_chain(10);
        let bfs = BreadthFirstSearch::new(&g, 0).unwrap();
        assert_eq!(bfs.reached_count(), 10);
        assert_eq!(bfs.distance_to(9).unwrap(), Some(9));
        assert_eq!(bfs.path_to(9).unwrap(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_bfs_cycle_takes_short_way_round() {
        let g = make_cycle(6);
        let bfs = BreadthFirstSearch::new(&g, 0).unwrap();
        assert_eq!(bfs.path_to(5).unwrap(), vec![0, 5]);
        assert_eq!(bfs.distance_to(4).unwrap(), Some(2));
        assert_eq!(bfs.distance_to(3).unwrap(), Some(3));

        // DFS walks the long way for the same target
        let dfs = DepthFirstSearch::new(&g, 0).unwrap();
        assert_eq!(dfs.path_to(5).unwrap().len(), 6);
    }

    #[test]
    fn test_bfs_star() {
        let g = make_star(50);
        let bfs = BreadthFirstSearch::new(&g, 1).unwrap();
        assert_eq!(bfs.reached_count(), 51);
        assert_eq!(bfs.distance_to(0).unwrap(), Some(1));
        assert_eq!(bfs.distance_to(50).unwrap(), Some(2));
        assert_eq!(bfs.path_to(50).unwrap(), vec![1, 0, 50]);
    }

    #[test]
    fn test_bfs_layers_per_vertex() {
        // A single shared counter bumped per dequeue would give 4 a distance
        // of 4 here; the per-vertex rule gives 2.
        let g = Graph::from_edges(5, [(0, 1), (0, 2), (0, 3), (3, 4)]).unwrap();
        let bfs = BreadthFirstSearch::new(&g, 0).unwrap();
        assert_eq!(bfs.distance_to(1).unwrap(), Some(1));
        assert_eq!(bfs.distance_to(3).unwrap(), Some(1));
        assert_eq!(bfs.distance_to(4).unwrap(), Some(2));
    }

    #[test]
    fn test_bfs_self_loop_and_parallel_edges() {
        let g = Graph::from_edges(3, [(1, 1), (0, 1), (1, 0), (1, 2)]).unwrap();
        let bfs = BreadthFirstSearch::new(&g, 0).unwrap();
        assert_eq!(bfs.path_to(2).unwrap(), vec![0, 1, 2]);
        assert_eq!(bfs.distance_to(2).unwrap(), Some(2));
    }

    #[test]
    fn test_bfs_bad_source() {
        let g = make_chain(3);
        assert!(matches!(
            BreadthFirstSearch::new(&g, 5),
            Err(GraphError::VertexOutOfRange { vertex: 5, .. })
        ));
    }

    #[test]
    fn test_bfs_query_out_of_range() {
        let g = make_chain(3);
        let bfs = BreadthFirstSearch::new(&g, 0).unwrap();
        assert!(bfs.exists(3).is_err());
        assert!(bfs.path_to(3).is_err());
        assert!(bfs.distance_to(3).is_err());
    }

    #[test]
    fn test_bfs_repeated_queries_identical() {
        let g = sample_graph();
        let bfs = BreadthFirstSearch::new(&g, 0).unwrap();
        for v in 0..g.vertex_count() {
            assert_eq!(bfs.exists(v).unwrap(), bfs.exists(v).unwrap());
            assert_eq!(bfs.path_to(v).unwrap(), bfs.path_to(v).unwrap());
            assert_eq!(bfs.distance_to(v).unwrap(), bfs.distance_to(v).unwrap());
        }
    }

    #[test]
    fn test_many_traversals_share_graph() {
        let g = sample_graph();
        let from_zero = BreadthFirstSearch::new(&g, 0).unwrap();
        let from_nine = BreadthFirstSearch::new(&g, 9).unwrap();
        let depth_first = DepthFirstSearch::new(&g, 0).unwrap();
        assert!(from_zero.exists(3).unwrap());
        assert!(!from_nine.exists(3).unwrap());
        assert_eq!(from_zero.reachable(), depth_first.reachable());
        assert!(std::ptr::eq(from_zero.graph(), from_nine.graph()));
    }
}
