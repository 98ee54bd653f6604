//! Single-source shortest paths over undirected, unweighted graphs.
//!
//! ```
//! use bfs_paths::{shortest_paths, Graph};
//!
//! let graph = Graph::from_parts(1..=4, [(1, 2), (2, 3), (1, 4)]).unwrap();
//! let paths = shortest_paths(&graph, 1).unwrap();
//! assert_eq!(paths.path_to(&3).unwrap(), vec![1, 2, 3]);
//! ```

pub mod error;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod path_finder;

pub use error::{GraphError, GraphResult, LoadError};
pub use graph::Graph;
pub use path_finder::{reconstruct_path, shortest_paths, ShortestPaths};

/// The ten-vertex graph the binary runs on when no edge list is given.
pub fn sample_graph() -> GraphResult<Graph<String>, String> {
    let edges = [
        (1, 2), (1, 3), (2, 4), (3, 5), (3, 6), (4, 7),
        (5, 7), (5, 8), (5, 6), (8, 9), (9, 10),
    ];
    Graph::from_parts(
        (1..=10).map(|v: u32| v.to_string()),
        edges.map(|(a, b): (u32, u32)| (a.to_string(), b.to_string())),
    )
}
