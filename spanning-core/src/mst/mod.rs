//! Minimum spanning tree (MST) construction.
//!
//! Two greedy algorithms share the [`WeightedGraph`] abstraction:
//!
//! - [`find_mst_prim`] grows one tree from the first enumerated vertex,
//!   driven by a [`crate::VertexPriorityQueue`].
//! - [`find_mst_kruskal`] scans edges by ascending weight and uses a
//!   [`crate::DisjointSetForest`] to reject cycle-closing edges.
//!
//! Both return a [`SpanningTree`]: the set of normalised edges in the tree,
//! each with the weight it was accepted at. For a connected graph the tree
//! holds `|V| - 1` edges. Disconnected input is outside the contract; both
//! algorithms then yield a spanning forest.

mod kruskal;
mod prim;

use std::collections::{BTreeMap, BTreeSet};
use std::iter::Sum;

use num_traits::CheckedAdd;

use crate::graph::{Edge, WeightedGraph};

pub use self::{
    kruskal::{find_mst_kruskal, find_mst_kruskal_with},
    prim::find_mst_prim,
};

/// Tentative distance from a vertex to the growing Prim tree.
///
/// `Unreached` orders after every `Reached` weight, standing in for an
/// infinite distance without a numeric sentinel.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Tentative<W> {
    /// Cheapest known edge weight connecting the vertex to the tree.
    Reached(W),
    /// No edge to the tree has been seen yet.
    Unreached,
}

impl<W> Tentative<W> {
    /// Returns the reached weight, if any.
    #[must_use]
    pub fn reached(self) -> Option<W> {
        match self {
            Self::Reached(weight) => Some(weight),
            Self::Unreached => None,
        }
    }
}

/// Edges of a minimum spanning tree in canonical form.
///
/// This is a set of edges, not an owning graph. Use
/// [`crate::LabeledGraph::edge_subgraph`] to rebuild a graph from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree<V, W> {
    edges: BTreeMap<Edge<V>, W>,
}

impl<V, W> Default for SpanningTree<V, W> {
    fn default() -> Self {
        Self {
            edges: BTreeMap::new(),
        }
    }
}

impl<V: Ord, W: Copy> SpanningTree<V, W> {
    pub(crate) fn insert(&mut self, edge: Edge<V>, weight: W) {
        self.edges.insert(edge, weight);
    }

    /// Iterates over the tree edges in ascending edge order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V>> {
        self.edges.keys()
    }

    /// Iterates over `(edge, weight)` pairs in ascending edge order.
    pub fn iter(&self) -> impl Iterator<Item = (&Edge<V>, W)> {
        self.edges.iter().map(|(edge, weight)| (edge, *weight))
    }

    /// Returns the weight the tree recorded for `edge`.
    #[must_use]
    pub fn weight(&self, edge: &Edge<V>) -> Option<W> {
        self.edges.get(edge).copied()
    }

    /// Returns `true` when `edge` is part of the tree.
    #[must_use]
    pub fn contains(&self, edge: &Edge<V>) -> bool {
        self.edges.contains_key(edge)
    }

    /// Number of tree edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when the tree has no edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Sum of the tree's edge weights, or `None` when it does not fit in `W`.
    ///
    /// # Examples
    /// ```
    /// use spanning_core::{LabeledGraph, find_mst_kruskal};
    ///
    /// let graph = LabeledGraph::from_edges([(0, 1, u8::MAX), (1, 2, 1)]);
    /// let tree = find_mst_kruskal(&graph)?;
    /// assert_eq!(tree.checked_total_weight(), None);
    /// assert_eq!(tree.total_weight_as::<u16>(), 256);
    /// # Ok::<(), spanning_core::MstError<i32>>(())
    /// ```
    #[must_use]
    pub fn checked_total_weight(&self) -> Option<W>
    where
        W: Default + CheckedAdd,
    {
        self.edges
            .values()
            .try_fold(W::default(), |total, weight| total.checked_add(weight))
    }

    /// Sum of the tree's edge weights, accumulated in the wider type `T`.
    ///
    /// `T` must be able to hold `|V| - 1` maximal weights; `u128` does for
    /// every primitive unsigned weight.
    #[must_use]
    pub fn total_weight_as<T>(&self) -> T
    where
        T: From<W> + Sum,
    {
        self.edges.values().copied().map(T::from).sum()
    }

    /// Consumes the tree, keeping only the edge set.
    #[must_use]
    pub fn into_edge_set(self) -> BTreeSet<Edge<V>> {
        self.edges.into_keys().collect()
    }
}

/// Convenience alias for the result of an MST computation over `G`.
pub type MstResult<G> = Result<
    SpanningTree<<G as WeightedGraph>::Vertex, <G as WeightedGraph>::Weight>,
    crate::error::MstError<<G as WeightedGraph>::Vertex>,
>;


#[cfg(test)]
mod property;
