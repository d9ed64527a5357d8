use itertools::Itertools;

use super::{path::Path, Edge, Graph, VertexId, WeightedEdge};

/// Every adjacency entry of the graph as a full edge record. An undirected
/// edge shows up once per endpoint.
pub fn all_edges(graph: &dyn Graph) -> Vec<WeightedEdge> {
    graph
        .vertices()
        .flat_map(|vertex| graph.out_edges(vertex))
        .collect()
}

/// Check a computed path against the graph it came from: endpoints must match
/// the request, every consecutive pair must be connected, and the edge
/// weights along the way must sum to the reported total.
pub fn validate_path(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
    path: &Path,
) -> Result<(), String> {
    if path.vertices.first() != Some(&source) {
        return Err("first vertex of path is not the requested source".to_string());
    }
    if path.vertices.last() != Some(&target) {
        return Err("last vertex of path is not the requested target".to_string());
    }

    let mut total = 0;
    for (&tail, &head) in path.vertices.iter().tuple_windows() {
        match graph.get_weight(&Edge::new(tail, head)) {
            Some(weight) => total += weight,
            None => return Err(format!("no edge between {} and {}", tail, head)),
        }
    }

    if total != path.weight {
        return Err(format!(
            "path reports weight {} but its edges sum to {}",
            path.weight, total
        ));
    }

    Ok(())
}
