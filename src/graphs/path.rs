use std::fmt;

use serde::{Deserialize, Serialize};

use super::{VertexId, Weight};

/// Why a shortest-path request produced no path. `NoPathFound` is an
/// expected outcome, not an exceptional one: interactively edited graphs are
/// frequently disconnected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    InvalidEndpoints(VertexId),
    UnknownVertex(VertexId),
    NoPathFound { source: VertexId, target: VertexId },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidEndpoints(v) => write!(f, "source and target are both {v}"),
            SearchError::UnknownVertex(v) => write!(f, "vertex {v} does not exist"),
            SearchError::NoPathFound { source, target } => {
                write!(f, "no path from {source} to {target}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// A pair of distinct endpoints for a shortest-path search.
///
/// Encapsulates the precondition that a search between a vertex and itself is
/// never attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    source: VertexId,
    target: VertexId,
}

impl ShortestPathRequest {
    pub fn new(source: VertexId, target: VertexId) -> Result<ShortestPathRequest, SearchError> {
        if source == target {
            return Err(SearchError::InvalidEndpoints(source));
        }

        Ok(ShortestPathRequest { source, target })
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }
}

/// A path through the graph and its total weight.
///
/// Vertices run from source to target inclusive. Built once per successful
/// search and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub weight: Weight,
}

/// A pathfinder a frontend can hold as one boxed value.
pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, source: VertexId, target: VertexId) -> Result<Path, SearchError>;

    fn shortest_path_distance(
        &self,
        source: VertexId,
        target: VertexId,
    ) -> Result<Weight, SearchError> {
        Ok(self.shortest_path(source, target)?.weight)
    }
}
