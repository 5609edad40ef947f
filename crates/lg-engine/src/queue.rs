//! A list-backed priority queue with decrease-priority.
//!
//! Backed by an ordered `Vec`, so insert and decrease-priority are O(n).
//! The graphs this feeds are a dozen nodes, so the simple representation
//! wins over a binary heap.

use thiserror::Error;

/// Errors from queue misuse. Both indicate a caller bug, not a recoverable
/// game condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `pop_min` on an empty queue.
    #[error("pop from an empty queue")]
    Empty,
    /// `decrease_priority` for a value not in the queue.
    #[error("decrease-priority on a value not in the queue")]
    NotFound,
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    priority: u32,
}

/// A queue ordered by non-decreasing priority, ties broken by insertion
/// order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    data: Vec<Node<T>>,
}

impl<T: PartialEq> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Insert a value. It lands after every queued node of equal or lower
    /// priority, keeping the queue stable.
    pub fn insert(&mut self, value: T, priority: u32) {
        let pos = self
            .data
            .iter()
            .position(|n| n.priority > priority)
            .unwrap_or(self.data.len());
        self.data.insert(pos, Node { value, priority });
    }

    /// Remove and return the value with the smallest priority.
    pub fn pop_min(&mut self) -> Result<T, QueueError> {
        if self.data.is_empty() {
            return Err(QueueError::Empty);
        }
        Ok(self.data.remove(0).value)
    }

    /// Move the (assumed unique) node holding `value` to a new, lower
    /// priority by removing and reinserting it.
    pub fn decrease_priority(&mut self, value: &T, priority: u32) -> Result<(), QueueError> {
        let pos = self
            .data
            .iter()
            .position(|n| &n.value == value)
            .ok_or(QueueError::NotFound)?;
        let node = self.data.remove(pos);
        self.insert(node.value, priority);
        Ok(())
    }

    /// The number of queued values.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: PartialEq> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
