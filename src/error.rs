use std::fmt::Debug;
use thiserror::Error;

/// Errors raised by graph construction and path queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V: Debug> {
    #[error("edge ({from:?}, {to:?}) references an unregistered vertex")]
    UnknownEndpoint { from: V, to: V },

    #[error("vertex {0:?} not found")]
    VertexNotFound(V),

    #[error("vertex {0:?} is unreachable from the source")]
    Unreachable(V),
}

/// Errors raised while loading an edge list from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("can't open edge list: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed edge list: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Graph(#[from] GraphError<String>),

    #[error("line {line}: empty `from` vertex")]
    EmptyVertex { line: u64 },
}

pub type GraphResult<T, V> = std::result::Result<T, GraphError<V>>;
