use ahash::HashSet;
use itertools::Itertools;

use crate::graphs::{path::Path, Edge, EdgeId, VertexId, WeightedEdge};

/// Edges to mark "on path" after a search: the indices of every stored edge
/// whose endpoints are consecutive in the path, regardless of storage
/// orientation. Parallel edges over an on-path pair are all returned;
/// self-loops never qualify because no path revisits a vertex.
pub fn edges_on_path(path: &Path, edges: &[WeightedEdge]) -> Vec<EdgeId> {
    let pairs: HashSet<(VertexId, VertexId)> = path
        .vertices
        .iter()
        .tuple_windows()
        .map(|(&tail, &head)| Edge::new(tail, head).normalized())
        .collect();

    edges
        .iter()
        .enumerate()
        .filter(|(_, edge)| pairs.contains(&edge.remove_weight().normalized()))
        .map(|(index, _)| index as EdgeId)
        .collect()
}
