use std::fmt;
use std::iter::FusedIterator;

use crate::error::{check_vertex, GraphError, GraphResult};

/// Dense vertex identifier in `[0, vertex_count)`.
pub type VertexId = usize;

/// Undirected graph stored as adjacency lists.
///
/// Every `add_edge(v, w)` appends `w` to `v`'s list and `v` to `w`'s list,
/// so each list keeps edge insertion order. Parallel edges and self-loops
/// are stored as given: a self-loop on `v` puts `v` into its own list twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl Graph {
    /// Create a graph with `vertex_count` isolated vertices.
    ///
    /// Fails with [`GraphError::TooLarge`] instead of aborting when the
    /// adjacency table cannot be allocated.
    pub fn new(vertex_count: usize) -> GraphResult<Self> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let mut adjacency: Vec<Vec<VertexId>> = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::TooLarge { vertex_count })?;
        adjacency.resize_with(vertex_count, Vec::new);

        Ok(Self {
            adjacency,
            edge_count: 0,
        })
    }

    /// Bulk load: `new(vertex_count)` followed by one `add_edge` per pair.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut graph = Self::new(vertex_count)?;
        for (v, w) in edges {
            graph.add_edge(v, w)?;
        }
        Ok(graph)
    }

    /// Add an undirected edge between `v` and `w`.
    ///
    /// Both endpoints are validated before anything is written, so a failed
    /// call leaves the graph unchanged.
    pub fn add_edge(&mut self, v: VertexId, w: VertexId) -> GraphResult<()> {
        check_vertex(v, self.vertex_count())?;
        check_vertex(w, self.vertex_count())?;

        self.adjacency[v].push(w);
        self.adjacency[w].push(v);
        self.edge_count += 1;
        log::trace!("add_edge {} - {} (edges: {})", v, w, self.edge_count);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of `add_edge` calls, counting parallel edges and self-loops.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v < self.vertex_count()
    }

    /// Neighbors of `v` in edge insertion order.
    pub fn neighbors(&self, v: VertexId) -> GraphResult<&[VertexId]> {
        check_vertex(v, self.vertex_count())?;
        Ok(self.adjacent(v))
    }

    pub fn degree(&self, v: VertexId) -> GraphResult<usize> {
        self.neighbors(v).map(<[VertexId]>::len)
    }

    /// Unchecked neighbor access for traversal internals, where every id
    /// has already been validated or came out of an adjacency list.
    pub(crate) fn adjacent(&self, v: VertexId) -> &[VertexId] {
        &self.adjacency[v]
    }

    /// Adjacency lists in vertex order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.adjacency.iter().enumerate(),
        }
    }

    /// Every directed arc `(v, w)`, in the order the dump prints them.
    /// An undirected edge yields two arcs.
    pub fn arcs(&self) -> Arcs<'_> {
        Arcs {
            lists: self.iter(),
            current: None,
        }
    }

    /// Approximate heap usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let lists = self.adjacency.capacity() * size_of::<Vec<VertexId>>();
        let entries: usize = self
            .adjacency
            .iter()
            .map(|list| list.capacity() * size_of::<VertexId>())
            .sum();

        lists + entries
    }
}

/// Writes one `"<v> -> <w>"` line per arc.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, w) in self.arcs() {
            writeln!(f, "{} -> {}", v, w)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = (VertexId, &'a [VertexId]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(vertex, neighbors)` pairs. See [`Graph::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Vec<VertexId>>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (VertexId, &'a [VertexId]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(v, list)| (v, list.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Iterator over directed arcs. See [`Graph::arcs`].
#[derive(Debug, Clone)]
pub struct Arcs<'a> {
    lists: Iter<'a>,
    current: Option<(VertexId, std::slice::Iter<'a, VertexId>)>,
}

impl Iterator for Arcs<'_> {
    type Item = (VertexId, VertexId);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((v, targets)) = self.current.as_mut() {
                if let Some(&w) = targets.next() {
                    return Some((*v, w));
                }
            }
            let (v, list) = self.lists.next()?;
            self.current = Some((v, list.iter()));
        }
    }
}

impl FusedIterator for Arcs<'_> {}
