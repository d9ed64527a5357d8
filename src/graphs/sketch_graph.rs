use ahash::HashMap;
use tracing::debug;

use super::{
    adjacency_graph::AdjacencyGraph, matrix_graph::MatrixSnapshot, EdgeId, GraphError,
    TaillessEdge, VertexId, Weight, WeightedEdge,
};

/// The mutable graph model behind an interactive sketching session.
///
/// Vertices and edges are kept in insertion order so the newest of either can
/// be undone, and a symmetric adjacency map is maintained alongside. Parallel
/// edges between the same pair are all kept; self-loops are allowed (a search
/// can never use one, but the model does not care).
///
/// The model itself is never handed to the search engine. Callers take a
/// [`snapshot`](SketchGraph::snapshot) and may keep editing while searches
/// over older snapshots run.
#[derive(Clone, Default)]
pub struct SketchGraph {
    vertices: Vec<VertexId>,
    edges: Vec<WeightedEdge>,
    adjacency: HashMap<VertexId, Vec<TaillessEdge>>,
}

impl SketchGraph {
    pub fn new() -> SketchGraph {
        SketchGraph::default()
    }

    pub fn add_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        if self.adjacency.contains_key(&vertex) {
            return Err(GraphError::DuplicateVertex(vertex));
        }

        self.vertices.push(vertex);
        self.adjacency.insert(vertex, Vec::new());
        debug!(vertex, "vertex added");
        Ok(())
    }

    /// Connect two existing vertices with a positive weight. Returns the id
    /// of the new edge, its index in [`edges`](SketchGraph::edges).
    pub fn add_edge(
        &mut self,
        tail: VertexId,
        head: VertexId,
        weight: Weight,
    ) -> Result<EdgeId, GraphError> {
        if weight == 0 {
            return Err(GraphError::InvalidWeight(weight));
        }
        if !self.adjacency.contains_key(&tail) {
            return Err(GraphError::UnknownVertex(tail));
        }
        if !self.adjacency.contains_key(&head) {
            return Err(GraphError::UnknownVertex(head));
        }

        let edge = WeightedEdge::new(tail, head, weight);
        let edge_id = self.edges.len() as EdgeId;
        self.edges.push(edge);

        // both endpoints checked above
        self.adjacency.get_mut(&tail).unwrap().push(edge.remove_tail());
        if !edge.is_self_loop() {
            self.adjacency.get_mut(&head).unwrap().push(TaillessEdge {
                head: tail,
                weight,
            });
        }

        debug!(tail, head, weight, "edge added");
        Ok(edge_id)
    }

    /// Undo the newest vertex. Every edge incident to it is removed as well,
    /// so no edge ever dangles.
    pub fn remove_last_vertex(&mut self) -> Option<VertexId> {
        let vertex = self.vertices.pop()?;

        let edges_before = self.edges.len();
        self.edges
            .retain(|edge| edge.tail != vertex && edge.head != vertex);
        self.adjacency.remove(&vertex);
        for entries in self.adjacency.values_mut() {
            entries.retain(|entry| entry.head != vertex);
        }

        debug!(
            vertex,
            removed_edges = edges_before - self.edges.len(),
            "vertex removed"
        );
        Some(vertex)
    }

    /// Undo the newest edge, returning its record.
    pub fn remove_last_edge(&mut self) -> Option<WeightedEdge> {
        let edge = self.edges.pop()?;
        self.unlink(&edge);
        debug!(tail = edge.tail, head = edge.head, "edge removed");
        Some(edge)
    }

    /// Drop one adjacency entry per endpoint for `edge`. Parallel edges each
    /// own an entry, so exactly one match is removed per side.
    fn unlink(&mut self, edge: &WeightedEdge) {
        if let Some(entries) = self.adjacency.get_mut(&edge.tail) {
            if let Some(position) = entries
                .iter()
                .rposition(|entry| entry.head == edge.head && entry.weight == edge.weight)
            {
                entries.remove(position);
            }
        }
        if !edge.is_self_loop() {
            if let Some(entries) = self.adjacency.get_mut(&edge.head) {
                if let Some(position) = entries
                    .iter()
                    .rposition(|entry| entry.head == edge.tail && entry.weight == edge.weight)
                {
                    entries.remove(position);
                }
            }
        }
    }

    /// Read-only view of the (neighbor, weight) pairs one hop from `vertex`.
    pub fn adjacency(&self, vertex: VertexId) -> Result<&[TaillessEdge], GraphError> {
        self.adjacency
            .get(&vertex)
            .map(Vec::as_slice)
            .ok_or(GraphError::UnknownVertex(vertex))
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn number_of_edges(&self) -> u32 {
        self.edges.len() as u32
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Edge records in insertion order; an [`EdgeId`] indexes into this.
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Immutable adjacency snapshot for the search engine.
    pub fn snapshot(&self) -> AdjacencyGraph {
        AdjacencyGraph::from_edges(self.vertices.iter().copied(), &self.edges)
    }

    /// Dense NxN interchange form, row i matching the i-th inserted vertex.
    pub fn snapshot_matrix(&self) -> MatrixSnapshot {
        MatrixSnapshot::from_edges(self.vertices.clone(), &self.edges)
    }
}
