use std::{cmp::Reverse, collections::BinaryHeap};

use crate::graphs::{Distance, VertexId};

/// Priority queue of vertices ordered by ascending distance.
///
/// There is no decrease key. An improved vertex is pushed again and the
/// outdated entry is skipped by the caller through the settled set.
pub struct VertexDistanceQueue {
    heap: BinaryHeap<Reverse<(Distance, VertexId)>>,
}

impl Default for VertexDistanceQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexDistanceQueue {
    pub fn new() -> Self {
        VertexDistanceQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn insert(&mut self, vertex: VertexId, distance: Distance) {
        self.heap.push(Reverse((distance, vertex)));
    }

    /// Removes the entry with the smallest distance. Ties go to the smaller
    /// vertex id.
    pub fn pop(&mut self) -> Option<(VertexId, Distance)> {
        let Reverse((distance, vertex)) = self.heap.pop()?;

        Some((vertex, distance))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::VertexDistanceQueue;
    use crate::graphs::Distance;

    #[test]
    fn pops_in_ascending_distance() {
        let mut queue = VertexDistanceQueue::new();
        queue.insert(0, Distance::new(3.0));
        queue.insert(1, Distance::new(1.5));
        queue.insert(2, Distance::INFINITY);
        queue.insert(0, Distance::new(1.0));

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.pop(), Some((0, Distance::new(1.0))));
        assert_eq!(queue.pop(), Some((1, Distance::new(1.5))));
        assert_eq!(queue.pop(), Some((0, Distance::new(3.0))));
        assert_eq!(queue.pop(), Some((2, Distance::INFINITY)));
        assert!(queue.pop().is_none());
        assert!(queue.is_empty());
    }
}
