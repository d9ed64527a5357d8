use ahash::{HashMap, HashMapExt};

use crate::{
    graphs::{path::Path, VertexId, Weight},
    queue::{heap_queue::HeapQueue, DijkstraQueue, QueueElement},
};

/// Per-vertex record of one search: the tentative distance label, the
/// predecessor on the best known route, and whether the label is final.
#[derive(Clone, Debug, Default)]
pub struct SearchEntry {
    pub predecessor: Option<VertexId>,
    pub distance: Option<Weight>,
    pub is_permanent: bool,
}

/// State owned by a single engine invocation and discarded after it.
///
/// Constructed seeded: the source carries label 0 and sits in the frontier,
/// everything else is unlabeled.
pub trait SearchState {
    /// Next vertex to make permanent: the cheapest labeled non-permanent one.
    /// Stale frontier entries are skipped. `None` once the frontier is empty.
    fn pop(&mut self) -> Option<QueueElement>;

    /// Relax the edge `tail -> head`: a strictly smaller candidate label
    /// overwrites `head`'s label and predecessor and re-queues it.
    fn update(&mut self, tail: VertexId, head: VertexId, edge_weight: Weight);

    /// Current distance label of `vertex`, if it has one.
    fn distance(&self, vertex: VertexId) -> Option<Weight>;

    /// Walk predecessors back from `target` and reverse. `None` while
    /// `target` is unlabeled.
    fn get_path(&self, target: VertexId) -> Option<Path>;
}

/// Hash-keyed search state, for snapshots with open-ended vertex ids.
pub struct SearchStateMap {
    queue: Box<dyn DijkstraQueue>,
    entries: HashMap<VertexId, SearchEntry>,
}

impl SearchStateMap {
    pub fn new(source: VertexId) -> SearchStateMap {
        SearchStateMap::with_queue(source, Box::new(HeapQueue::new()))
    }

    pub fn with_queue(source: VertexId, queue: Box<dyn DijkstraQueue>) -> SearchStateMap {
        let mut state = SearchStateMap {
            queue,
            entries: HashMap::new(),
        };

        state.entries.entry(source).or_default().distance = Some(0);
        state.queue.push(QueueElement::new(0, source));

        state
    }
}

impl SearchState for SearchStateMap {
    fn pop(&mut self) -> Option<QueueElement> {
        while let Some(element) = self.queue.pop() {
            // queued vertices are always labeled, so the entry exists
            let entry = self.entries.get_mut(&element.vertex).unwrap();
            if !entry.is_permanent {
                entry.is_permanent = true;
                return Some(element);
            }
        }

        None
    }

    fn update(&mut self, tail: VertexId, head: VertexId, edge_weight: Weight) {
        let candidate = self.entries[&tail].distance.unwrap() + edge_weight;
        let entry = self.entries.entry(head).or_default();
        if candidate < entry.distance.unwrap_or(Weight::MAX) {
            entry.predecessor = Some(tail);
            entry.distance = Some(candidate);
            self.queue.push(QueueElement::new(candidate, head));
        }
    }

    fn distance(&self, vertex: VertexId) -> Option<Weight> {
        self.entries.get(&vertex)?.distance
    }

    fn get_path(&self, target: VertexId) -> Option<Path> {
        let weight = self.entries.get(&target)?.distance?;

        let mut route = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.entries.get(&current)?.predecessor {
            current = predecessor;
            route.push(current);
        }
        route.reverse();

        Some(Path {
            vertices: route,
            weight,
        })
    }
}

/// Arena search state for snapshots with dense `0..N` vertex ids, such as
/// [`MatrixSnapshot`](crate::graphs::matrix_graph::MatrixSnapshot).
pub struct SearchStateVec {
    queue: Box<dyn DijkstraQueue>,
    entries: Vec<SearchEntry>,
}

impl SearchStateVec {
    pub fn new(number_of_vertices: usize, source: VertexId) -> SearchStateVec {
        SearchStateVec::with_queue(number_of_vertices, source, Box::new(HeapQueue::new()))
    }

    pub fn with_queue(
        number_of_vertices: usize,
        source: VertexId,
        queue: Box<dyn DijkstraQueue>,
    ) -> SearchStateVec {
        let mut state = SearchStateVec {
            queue,
            entries: vec![SearchEntry::default(); number_of_vertices],
        };

        state.entries[source as usize].distance = Some(0);
        state.queue.push(QueueElement::new(0, source));

        state
    }
}

impl SearchState for SearchStateVec {
    fn pop(&mut self) -> Option<QueueElement> {
        while let Some(element) = self.queue.pop() {
            let entry = &mut self.entries[element.vertex as usize];
            if !entry.is_permanent {
                entry.is_permanent = true;
                return Some(element);
            }
        }

        None
    }

    fn update(&mut self, tail: VertexId, head: VertexId, edge_weight: Weight) {
        let candidate = self.entries[tail as usize].distance.unwrap() + edge_weight;
        let entry = &mut self.entries[head as usize];
        if candidate < entry.distance.unwrap_or(Weight::MAX) {
            entry.predecessor = Some(tail);
            entry.distance = Some(candidate);
            self.queue.push(QueueElement::new(candidate, head));
        }
    }

    fn distance(&self, vertex: VertexId) -> Option<Weight> {
        self.entries.get(vertex as usize)?.distance
    }

    fn get_path(&self, target: VertexId) -> Option<Path> {
        let weight = self.entries.get(target as usize)?.distance?;

        let mut route = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.entries.get(current as usize)?.predecessor {
            current = predecessor;
            route.push(current);
        }
        route.reverse();

        Some(Path {
            vertices: route,
            weight,
        })
    }
}
