use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Finished breadth-first search from a single source.
///
/// Holds the predecessor of every vertex reached from `source`, along with
/// its depth. Immutable once built; queries never touch the graph again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths<V: Hash + Eq> {
    source: V,
    predecessors: IndexMap<V, V>,
    depths: IndexMap<V, usize>,
}

/// Runs BFS over `graph` from `source` and returns the finished predecessor map.
///
/// Neighbors are expanded in insertion order, so among several shortest paths
/// of equal length the one using the earliest-added edges wins.
pub fn shortest_paths<V>(graph: &Graph<V>, source: V) -> GraphResult<ShortestPaths<V>, V>
where
    V: Hash + Eq + Clone + Debug,
{
    if !graph.contains_vertex(&source) {
        return Err(GraphError::VertexNotFound(source));
    }

    let mut predecessors: IndexMap<V, V> = IndexMap::new();
    let mut depths: IndexMap<V, usize> = IndexMap::new();
    let mut queue: VecDeque<V> = VecDeque::new();
    depths.insert(source.clone(), 0);
    queue.push_back(source.clone());
    // initializes the frontier with only the source

    while let Some(current) = queue.pop_front() {
        let depth = depths[&current];
        for neighbor in graph.neighbors(&current)? {
            if *neighbor == source || predecessors.contains_key(neighbor) {
                continue; // already discovered via a path at least as short
            }
            trace!(vertex = ?neighbor, via = ?current, depth = depth + 1, "discovered");
            predecessors.insert(neighbor.clone(), current.clone());
            depths.insert(neighbor.clone(), depth + 1);
            queue.push_back(neighbor.clone());
        }
    } // each vertex is enqueued at most once, so the loop ends

    debug!(
        source = ?source,
        reached = depths.len(),
        vertices = graph.vertex_count(),
        "breadth-first search finished"
    );

    Ok(ShortestPaths {
        source,
        predecessors,
        depths,
    })
}

/// Walks `predecessors` back from `destination` to `source` and returns the
/// path source-first.
///
/// Fails with [`GraphError::Unreachable`] when `destination` has no recorded
/// predecessor and is not the source itself.
pub fn reconstruct_path<V>(
    predecessors: &IndexMap<V, V>,
    source: &V,
    destination: &V,
) -> GraphResult<Vec<V>, V>
where
    V: Hash + Eq + Clone + Debug,
{
    let mut path = vec![destination.clone()];
    let mut current = destination;
    while current != source {
        current = predecessors
            .get(current)
            .ok_or_else(|| GraphError::Unreachable(destination.clone()))?;
        path.push(current.clone());
    }
    path.reverse();
    Ok(path)
}

impl<V> ShortestPaths<V>
where
    V: Hash + Eq + Clone + Debug,
{
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Shortest path from the source to `destination`, both inclusive.
    pub fn path_to(&self, destination: &V) -> GraphResult<Vec<V>, V> {
        reconstruct_path(&self.predecessors, &self.source, destination)
    }

    /// Number of edges on the shortest path to `destination`.
    pub fn distance_to(&self, destination: &V) -> GraphResult<usize, V> {
        self.depths
            .get(destination)
            .copied()
            .ok_or_else(|| GraphError::Unreachable(destination.clone()))
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.depths.contains_key(vertex)
    }

    /// Vertex `vertex` was first discovered from. `None` for the source and
    /// for vertices that were never reached.
    pub fn predecessor_of(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex)
    }

    /// Reached vertices in discovery order, source first.
    pub fn reachable(&self) -> impl Iterator<Item = &V> {
        self.depths.keys()
    }

    pub fn reachable_count(&self) -> usize {
        self.depths.len()
    }

    pub fn predecessors(&self) -> &IndexMap<V, V> {
        &self.predecessors
    }
}
