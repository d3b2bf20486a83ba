//! Mutable min-priority queue of vertices keyed by weight.
//!
//! The queue keeps two synchronised views: an ordered set of
//! `(weight, vertex)` pairs for minimum lookup and a map from vertex to its
//! current weight for updates and removal. Both views are `BTree` based, so
//! every operation is `O(log n)` and ties between equal weights resolve by
//! vertex order.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::QueueError;

/// Priority queue used by Prim's algorithm to pick the next vertex.
///
/// # Examples
/// ```
/// use spanning_core::VertexPriorityQueue;
///
/// let mut queue = VertexPriorityQueue::new();
/// queue.insert('b', 3_u32);
/// queue.insert('a', 3_u32);
/// queue.set('c', 1_u32);
/// assert_eq!(queue.min()?, (&'c', &1));
/// queue.remove(&'c')?;
/// assert_eq!(queue.min()?, (&'a', &3));
/// # Ok::<(), spanning_core::QueueError>(())
/// ```
#[derive(Clone, Debug)]
pub struct VertexPriorityQueue<V, W> {
    ordered: BTreeSet<(W, V)>,
    weights: BTreeMap<V, W>,
}

impl<V, W> Default for VertexPriorityQueue<V, W> {
    fn default() -> Self {
        Self {
            ordered: BTreeSet::new(),
            weights: BTreeMap::new(),
        }
    }
}

impl<V, W> VertexPriorityQueue<V, W>
where
    V: Ord + Clone,
    W: Ord + Clone,
{
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `vertex` with `weight` without checking for an existing entry.
    ///
    /// Intended for bulk initialisation; the caller guarantees `vertex` is
    /// not already queued. Use [`Self::set`] when that is not known.
    pub fn insert(&mut self, vertex: V, weight: W) {
        self.ordered.insert((weight.clone(), vertex.clone()));
        self.weights.insert(vertex, weight);
    }

    /// Sets the weight of `vertex`, inserting it when absent.
    pub fn set(&mut self, vertex: V, weight: W) {
        if let Some(previous) = self.weights.remove(&vertex) {
            self.ordered.remove(&(previous, vertex.clone()));
        }
        self.insert(vertex, weight);
    }

    /// Returns the entry with the smallest weight without removing it.
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] when no entries remain.
    pub fn min(&self) -> Result<(&V, &W), QueueError> {
        self.ordered
            .first()
            .map(|(weight, vertex)| (vertex, weight))
            .ok_or(QueueError::Empty)
    }

    /// Removes `vertex` from both views and returns its last weight.
    ///
    /// # Errors
    /// Returns [`QueueError::UnknownVertex`] when `vertex` is not queued.
    pub fn remove(&mut self, vertex: &V) -> Result<W, QueueError> {
        let (key, weight) = self
            .weights
            .remove_entry(vertex)
            .ok_or(QueueError::UnknownVertex)?;
        let entry = (weight, key);
        self.ordered.remove(&entry);
        Ok(entry.0)
    }

    /// Returns the current weight of `vertex`, or `None` when it is not
    /// queued.
    #[must_use]
    pub fn weight(&self, vertex: &V) -> Option<&W> {
        self.weights.get(vertex)
    }

    /// Returns `true` when `vertex` is queued.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.weights.contains_key(vertex)
    }

    /// Number of queued vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.weights.len() }

    /// Returns `true` when the queue has no entries.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.ordered.is_empty() }
}
