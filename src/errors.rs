use std::path::PathBuf;
use thiserror::Error;

use crate::graph::NodeId;


#[derive(Debug, Error)]
pub enum RouteError {
    /// Start or stop is not a node of the graph
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("invalid weight on edge {from} - {to}: {reason}")]
    InvalidWeight { from: NodeId, to: NodeId, reason: String },

    /// Malformed edge list line (1-based)
    #[error("invalid edge on line {line}: {reason}")]
    InvalidEdge { line: usize, reason: String },

    #[error("malformed delivery points: {0}")]
    MalformedStops(String),

    /// Only raised under `UnreachablePolicy::Fail`
    #[error("no path between {from} and {to}")]
    UnreachableHop { from: NodeId, to: NodeId },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RouteError>;
