use radix_heap::RadixHeapMap;

use super::{DijkstraQueue, QueueElement};

/// Monotone frontier backed by a radix heap. Pushed distances must never be
/// smaller than the last popped distance, which Dijkstra relaxations with
/// positive weights guarantee.
#[derive(Clone)]
pub struct RadixQueue {
    heap: RadixHeapMap<i32, u32>,
}

impl Default for RadixQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixQueue {
    pub fn new() -> RadixQueue {
        RadixQueue {
            heap: RadixHeapMap::new(),
        }
    }
}

impl DijkstraQueue for RadixQueue {
    fn push(&mut self, element: QueueElement) {
        // the radix heap pops its maximum, negate to pop cheapest first
        self.heap.push(-(element.distance as i32), element.vertex);
    }

    fn pop(&mut self) -> Option<QueueElement> {
        let (negative_distance, vertex) = self.heap.pop()?;
        Some(QueueElement {
            distance: -negative_distance as u32,
            vertex,
        })
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}
