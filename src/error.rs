use std::{io, path::PathBuf};

use thiserror::Error;

use crate::graphs::{Distance, VertexId};

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("a road from {tail} to {head} already exists")]
    DuplicateEdge { tail: VertexId, head: VertexId },
    #[error("vertex {0} does not exist")]
    UnknownVertex(VertexId),
    #[error("road distance {0} is negative or not finite")]
    InvalidDistance(Distance),
}

/// Why a single line of a road file could not be turned into a road.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),
    #[error("distance {0:?} is not a decimal number")]
    InvalidNumber(String),
    #[error("distance {0} is negative or not finite")]
    InvalidDistance(f64),
    #[error("line is not valid utf-8")]
    InvalidUtf8,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read line {line_number}")]
    Read {
        line_number: usize,
        #[source]
        source: io::Error,
    },
    #[error("line {line_number} ({line:?}): {kind}")]
    Parse {
        line_number: usize,
        line: String,
        kind: ParseErrorKind,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("vertex {0} is not part of the graph")]
    UnknownVertex(VertexId),
    #[error("search deadline exceeded")]
    DeadlineExceeded,
    #[error("search cancelled")]
    Cancelled,
}

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("Invalid Endpoint: {0}")]
    InvalidEndpoint(String),
    #[error(transparent)]
    Search(#[from] SearchError),
}
