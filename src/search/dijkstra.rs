use tracing::{debug, trace};

use super::dijkstra_data::{SearchState, SearchStateMap, SearchStateVec};
use crate::{
    graphs::{
        path::{Path, PathFinding, SearchError, ShortestPathRequest},
        Graph, VertexId,
    },
    queue::QueueElement,
};

/// Boxed-graph pathfinder for callers that hold one snapshot and issue
/// repeated requests against it.
pub struct Dijkstra {
    pub graph: Box<dyn Graph>,
}

impl PathFinding for Dijkstra {
    fn shortest_path(&self, source: VertexId, target: VertexId) -> Result<Path, SearchError> {
        shortest_path(&*self.graph, source, target)
    }
}

/// Minimum-weight path between two distinct vertices, or why there is none.
///
/// Runs Dijkstra's algorithm with fresh per-call state and stops as soon as
/// the target's distance label is final. An emptied frontier before that
/// point means the endpoints lie in different components.
pub fn shortest_path(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Result<Path, SearchError> {
    let request = validate_request(graph, source, target)?;
    let mut state = SearchStateMap::new(request.source());
    run_search(graph, &mut state, request)
}

/// Same as [`shortest_path`], but with an arena state sized to the graph.
/// Only valid for snapshots whose vertex ids are the dense range `0..N`,
/// such as [`MatrixSnapshot`](crate::graphs::matrix_graph::MatrixSnapshot).
pub fn shortest_path_dense(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Result<Path, SearchError> {
    let request = validate_request(graph, source, target)?;
    let mut state = SearchStateVec::new(graph.number_of_vertices() as usize, request.source());
    run_search(graph, &mut state, request)
}

/// Drive a search state that was seeded at the request's source until the
/// target is permanent or the frontier empties. Public for callers that pick
/// their own state/queue pairing.
pub fn run_search(
    graph: &dyn Graph,
    state: &mut dyn SearchState,
    request: ShortestPathRequest,
) -> Result<Path, SearchError> {
    let (source, target) = (request.source(), request.target());
    debug!(source, target, "starting shortest path search");

    while let Some(QueueElement { vertex, distance }) = state.pop() {
        trace!(vertex, distance, "vertex made permanent");
        if vertex == target {
            break;
        }

        for edge in graph.out_edges(vertex) {
            state.update(vertex, edge.head, edge.weight);
        }
    }

    match state.get_path(target) {
        Some(path) => {
            debug!(source, target, distance = path.weight, "path found");
            Ok(path)
        }
        None => {
            debug!(source, target, "frontier emptied before reaching target");
            Err(SearchError::NoPathFound { source, target })
        }
    }
}

fn validate_request(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Result<ShortestPathRequest, SearchError> {
    let request = ShortestPathRequest::new(source, target)?;
    if !graph.contains_vertex(source) {
        return Err(SearchError::UnknownVertex(source));
    }
    if !graph.contains_vertex(target) {
        return Err(SearchError::UnknownVertex(target));
    }

    Ok(request)
}
