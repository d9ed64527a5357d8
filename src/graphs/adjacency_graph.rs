use ahash::{HashMap, HashMapExt};

use super::{Edge, Graph, TaillessEdge, VertexId, Weight, WeightedEdge};

/// Immutable adjacency-list snapshot of a sketch, the primary input to the
/// search engine.
///
/// Every parallel edge keeps its own entry and isolated vertices keep an
/// empty list, so the vertex set of the snapshot is exactly the vertex set of
/// the model it was taken from.
#[derive(Clone)]
pub struct AdjacencyGraph {
    out_edges: HashMap<VertexId, Vec<TaillessEdge>>,
}

impl AdjacencyGraph {
    pub fn from_edges(
        vertices: impl IntoIterator<Item = VertexId>,
        edges: &[WeightedEdge],
    ) -> AdjacencyGraph {
        let mut out_edges: HashMap<VertexId, Vec<TaillessEdge>> = HashMap::new();

        for vertex in vertices {
            out_edges.entry(vertex).or_default();
        }

        for edge in edges {
            out_edges.entry(edge.tail).or_default().push(edge.remove_tail());
            if !edge.is_self_loop() {
                out_edges.entry(edge.head).or_default().push(TaillessEdge {
                    head: edge.tail,
                    weight: edge.weight,
                });
            }
        }

        AdjacencyGraph { out_edges }
    }
}

impl Graph for AdjacencyGraph {
    fn number_of_vertices(&self) -> u32 {
        self.out_edges.len() as u32
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.out_edges.contains_key(&vertex)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + Send + '_> {
        Box::new(self.out_edges.keys().copied())
    }

    fn out_edges(
        &self,
        source: VertexId,
    ) -> Box<dyn Iterator<Item = WeightedEdge> + Send + '_> {
        match self.out_edges.get(&source) {
            Some(entries) => Box::new(entries.iter().map(move |entry| entry.set_tail(source))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn get_weight(&self, edge: &Edge) -> Option<Weight> {
        self.out_edges
            .get(&edge.tail)?
            .iter()
            .filter(|entry| entry.head == edge.head)
            .map(|entry| entry.weight)
            .min()
    }
}
