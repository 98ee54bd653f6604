use std::fmt::Debug;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::error::{GraphError, GraphResult};

/// Undirected, unweighted graph stored as adjacency sets.
///
/// Vertices and neighbor sets keep insertion order, so traversals over the
/// same graph always visit neighbors in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V: Hash + Eq> {
    adjacency: IndexMap<V, IndexSet<V>>,
}

impl<V: Hash + Eq> Default for Graph<V> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<V> Graph<V>
where
    V: Hash + Eq + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph by registering every vertex first, then every edge.
    ///
    /// Stops at the first edge whose endpoints were not both listed in `vertices`.
    pub fn from_parts<I, E>(vertices: I, edges: E) -> GraphResult<Self, V>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for (from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Registers `vertex`. Returns `false` if it was already present, in which
    /// case its existing edges are kept.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, IndexSet::new());
        true
    }

    /// Adds the undirected edge `from`–`to`. Returns `false` if it already existed.
    pub fn add_edge(&mut self, from: V, to: V) -> GraphResult<bool, V> {
        if !self.contains_vertex(&from) || !self.contains_vertex(&to) {
            return Err(GraphError::UnknownEndpoint { from, to });
        }

        let inserted = self
            .adjacency
            .get_mut(&from)
            .is_some_and(|neighbors| neighbors.insert(to.clone()));
        if let Some(neighbors) = self.adjacency.get_mut(&to) {
            neighbors.insert(from); // mirror side; no-op for a self-loop
        }
        Ok(inserted)
    }

    pub fn neighbors(&self, vertex: &V) -> GraphResult<&IndexSet<V>, V> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Vertices in registration order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges; a self-loop counts once.
    pub fn edge_count(&self) -> usize {
        let (degree_sum, loops) = self
            .adjacency
            .iter()
            .fold((0, 0), |(sum, loops), (vertex, neighbors)| {
                (sum + neighbors.len(), loops + usize::from(neighbors.contains(vertex)))
            });
        (degree_sum + loops) / 2
    }

    pub fn degree(&self, vertex: &V) -> GraphResult<usize, V> {
        self.neighbors(vertex).map(IndexSet::len)
    }

    /// Read-only view of the full adjacency mapping.
    pub fn adjacency(&self) -> &IndexMap<V, IndexSet<V>> {
        &self.adjacency
    }
}
