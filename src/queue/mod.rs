use std::cmp::Ordering;

use crate::graphs::{VertexId, Weight};

pub mod heap_queue;
pub mod radix_queue;

/// One frontier entry: a vertex and the tentative distance it was queued
/// with.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct QueueElement {
    pub distance: Weight,
    pub vertex: VertexId,
}

impl QueueElement {
    pub fn new(distance: Weight, vertex: VertexId) -> QueueElement {
        QueueElement { distance, vertex }
    }
}

// The std binary heap pops its maximum, so the ordering on distances is
// flipped. Ties fall back to the vertex id to keep `Ord` consistent with
// `PartialEq`.
impl Ord for QueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for QueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier of a shortest-path search: pops the entry with the smallest
/// tentative distance.
///
/// Implementations may keep stale entries for vertices whose label improved
/// after queueing; the search state skips entries for vertices that are
/// already permanent.
pub trait DijkstraQueue {
    fn push(&mut self, element: QueueElement);
    fn pop(&mut self) -> Option<QueueElement>;
    fn is_empty(&self) -> bool;
    fn clear(&mut self);
}
