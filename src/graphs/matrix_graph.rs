use ahash::HashMap;
use serde::{Deserialize, Serialize};

use super::{path::Path, Edge, Graph, VertexId, Weight, WeightedEdge};

/// Dense NxN interchange form of a sketch. Row and column `i` correspond to
/// the i-th vertex added to the model; a cell of 0 means "no edge". Parallel
/// edges collapse to their minimum weight, the only weight a shortest-path
/// search can ever use.
///
/// As a [`Graph`] the snapshot speaks dense row indices `0..N`, not model
/// ids; [`vertex_at`](MatrixSnapshot::vertex_at),
/// [`index_of`](MatrixSnapshot::index_of) and
/// [`translate_path`](MatrixSnapshot::translate_path) convert between the
/// two.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixSnapshot {
    vertices: Vec<VertexId>,
    weights: Vec<Vec<Weight>>,
}

impl MatrixSnapshot {
    /// Build from a model's vertex order and edge records. Every edge
    /// endpoint must be present in `vertices`.
    pub fn from_edges(vertices: Vec<VertexId>, edges: &[WeightedEdge]) -> MatrixSnapshot {
        let index: HashMap<VertexId, usize> = vertices
            .iter()
            .enumerate()
            .map(|(position, &vertex)| (vertex, position))
            .collect();

        let mut weights = vec![vec![0; vertices.len()]; vertices.len()];
        for edge in edges {
            // the model guarantees both endpoints exist
            let tail = index[&edge.tail];
            let head = index[&edge.head];

            let cell = &mut weights[tail][head];
            if *cell == 0 || edge.weight < *cell {
                *cell = edge.weight;
            }
            if tail != head {
                let mirror = &mut weights[head][tail];
                if *mirror == 0 || edge.weight < *mirror {
                    *mirror = edge.weight;
                }
            }
        }

        MatrixSnapshot { vertices, weights }
    }

    pub fn vertex_at(&self, index: VertexId) -> Option<VertexId> {
        self.vertices.get(index as usize).copied()
    }

    pub fn index_of(&self, vertex: VertexId) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|&candidate| candidate == vertex)
            .map(|position| position as VertexId)
    }

    pub fn weights(&self) -> &[Vec<Weight>] {
        &self.weights
    }

    /// Map a path of dense indices from a search over this snapshot back to
    /// model vertex ids.
    pub fn translate_path(&self, path: &Path) -> Option<Path> {
        let vertices = path
            .vertices
            .iter()
            .map(|&index| self.vertex_at(index))
            .collect::<Option<Vec<_>>>()?;

        Some(Path {
            vertices,
            weight: path.weight,
        })
    }
}

impl Graph for MatrixSnapshot {
    fn number_of_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        (vertex as usize) < self.vertices.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + Send + '_> {
        Box::new(0..self.vertices.len() as VertexId)
    }

    fn out_edges(
        &self,
        source: VertexId,
    ) -> Box<dyn Iterator<Item = WeightedEdge> + Send + '_> {
        match self.weights.get(source as usize) {
            Some(row) => Box::new(
                row.iter()
                    .enumerate()
                    .filter(|&(_, &weight)| weight > 0)
                    .map(move |(head, &weight)| {
                        WeightedEdge::new(source, head as VertexId, weight)
                    }),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn get_weight(&self, edge: &Edge) -> Option<Weight> {
        let weight = *self
            .weights
            .get(edge.tail as usize)?
            .get(edge.head as usize)?;

        (weight > 0).then_some(weight)
    }
}
