//! Weighted undirected graph abstraction consumed by the MST algorithms.
//!
//! The algorithms only read a graph through [`WeightedGraph`]. The crate
//! also ships [`LabeledGraph`], a small ordered adjacency map that satisfies
//! the trait and is used by the CLI, the benches and the tests.

mod labeled;

use std::fmt::Debug;

pub use self::labeled::LabeledGraph;

/// An undirected edge in canonical form (`first <= second`).
///
/// `Edge::new(u, v)` and `Edge::new(v, u)` are equal, hash identically and
/// sort together, so edges can be used directly as set elements.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge<V> {
    first: V,
    second: V,
}

impl<V: Ord> Edge<V> {
    /// Builds the normalised edge joining `u` and `v`.
    #[must_use]
    pub fn new(u: V, v: V) -> Self {
        if u <= v {
            Self { first: u, second: v }
        } else {
            Self { first: v, second: u }
        }
    }
}

impl<V> Edge<V> {
    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn first(&self) -> &V { &self.first }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn second(&self) -> &V { &self.second }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub fn is_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.first == self.second
    }

    /// Consumes the edge, returning `(first, second)`.
    #[must_use]
    pub fn into_endpoints(self) -> (V, V) {
        (self.first, self.second)
    }
}

/// Read-only view of a weighted undirected graph.
///
/// Implementations must enumerate each vertex once and each undirected edge
/// once (not once per direction). Enumeration order is free but must be
/// stable for the lifetime of a borrow.
pub trait WeightedGraph {
    /// Vertex identifier.
    type Vertex: Ord + Clone + Debug;
    /// Edge label. [`Default::default`] is the distance assigned to Prim's
    /// start vertex, so it should be the additive zero.
    type Weight: Ord + Copy + Debug + Default;

    /// Enumerates every vertex exactly once.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex>;

    /// Enumerates every undirected edge exactly once.
    fn edges(&self) -> impl Iterator<Item = Edge<Self::Vertex>>;

    /// Enumerates the vertices adjacent to `vertex`.
    fn neighbours(&self, vertex: &Self::Vertex) -> impl Iterator<Item = &Self::Vertex>;

    /// Returns the weight of the edge joining `u` and `v`, if one exists.
    fn weight(&self, u: &Self::Vertex, v: &Self::Vertex) -> Option<Self::Weight>;

    /// Number of vertices. The default implementation counts
    /// [`Self::vertices`].
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Canonical representation of the edge joining `u` and `v`.
    fn normalize_edge(u: Self::Vertex, v: Self::Vertex) -> Edge<Self::Vertex> {
        Edge::new(u, v)
    }
}

#[cfg(test)]
mod tests;
