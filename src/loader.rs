use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::LoadError;
use crate::graph::Graph;

/// One row of an edge-list CSV. An empty `to` registers `from` on its own.
#[derive(Debug, Deserialize)]
struct EdgeRow {
    from: String,
    #[serde(default)]
    to: Option<String>,
}

/// Opens `file_path` and reads it as an edge list.
pub fn load_edge_list(file_path: impl AsRef<Path>) -> Result<Graph<String>, LoadError> {
    let file = File::open(file_path.as_ref())?;
    parse_edge_list(BufReader::new(file))
}

/// Reads a `from,to` edge list. Vertices are registered in order of first
/// appearance before any edge is added.
pub fn parse_edge_list<R: Read>(reader: R) -> Result<Graph<String>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true) // isolated-vertex rows may omit the `to` column
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut vertices: Vec<String> = Vec::new();
    let mut edges: Vec<(String, String)> = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |pos| pos.line());
        let row: EdgeRow = record.deserialize(Some(&headers))?;
        if row.from.is_empty() {
            return Err(LoadError::EmptyVertex { line });
        }

        vertices.push(row.from.clone());
        if let Some(to) = row.to.filter(|to| !to.is_empty()) {
            vertices.push(to.clone());
            edges.push((row.from, to));
        } // otherwise an isolated vertex
    }

    let graph = Graph::from_parts(vertices, edges)?; // re-registering a vertex is a no-op
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded edge list"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_edge_list() {
        let data = "from,to\n a , b \nb,c\nd,\n";
        let graph = parse_edge_list(data.as_bytes()).unwrap();

        let vertices: Vec<&str> = graph.vertices().map(String::as_str).collect();
        assert_eq!(vertices, vec!["a", "b", "c", "d"]); // first-appearance order, trimmed
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.neighbors(&"d".to_string()).unwrap().is_empty());
    }

    #[test]
    fn test_short_row_is_an_isolated_vertex() {
        let graph = parse_edge_list("from,to\na,b\nz\n".as_bytes()).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.degree(&"z".to_string()).unwrap(), 0);
    }

    #[test]
    fn test_empty_from_is_rejected() {
        let err = parse_edge_list("from,to\na,b\n,c\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::EmptyVertex { line: 3 }));
    }

    #[test]
    fn test_load_edge_list_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "from,to\n1,2\n1,3\n2,4\n").unwrap();

        let graph = load_edge_list(file.path()).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_bundled_sample_edges() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample_edges.csv");
        let graph = load_edge_list(path).unwrap();
        assert_eq!(graph.vertex_count(), 13);

        let paths = crate::shortest_paths(&graph, "1".to_string()).unwrap();
        assert_eq!(paths.path_to(&"10".to_string()).unwrap(), ["1", "3", "5", "8", "9", "10"]);
        assert!(!paths.is_reachable(&"12".to_string()));
        assert!(!paths.is_reachable(&"13".to_string()));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_edge_list(dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
