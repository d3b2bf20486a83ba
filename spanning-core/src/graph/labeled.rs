//! Ordered adjacency-map graph with one label per undirected edge.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::error::MstError;

use super::{Edge, WeightedGraph};

/// Undirected graph storing a label (weight) on every edge.
///
/// Vertices and neighbours are kept in `BTreeMap`s, so every enumeration is
/// sorted and deterministic.
///
/// # Examples
/// ```
/// use spanning_core::{LabeledGraph, WeightedGraph};
///
/// let mut graph = LabeledGraph::new();
/// graph.add_labeled_edge('a', 'b', 4_u32);
/// graph.add_labeled_edge('b', 'c', 8_u32);
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.label(&'b', &'a'), Some(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledGraph<V, W> {
    adjacency: BTreeMap<V, BTreeMap<V, W>>,
}

impl<V, W> Default for LabeledGraph<V, W> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<V, W> LabeledGraph<V, W>
where
    V: Ord + Clone,
    W: Copy,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(u, v, weight)` triples.
    pub fn from_edges(edges: impl IntoIterator<Item = (V, V, W)>) -> Self {
        let mut graph = Self::new();
        for (u, v, weight) in edges {
            graph.add_labeled_edge(u, v, weight);
        }
        graph
    }

    /// Adds an isolated vertex. Returns `false` when it already existed.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, BTreeMap::new());
        true
    }

    /// Adds the edge `{u, v}` labelled `weight`, creating missing endpoints.
    ///
    /// An existing edge between the same endpoints has its label replaced and
    /// the previous label is returned.
    pub fn add_labeled_edge(&mut self, u: V, v: V, weight: W) -> Option<W> {
        let previous = self
            .adjacency
            .entry(u.clone())
            .or_default()
            .insert(v.clone(), weight);
        self.adjacency.entry(v).or_default().insert(u, weight);
        previous
    }

    /// Returns the label of the edge `{u, v}`.
    #[must_use]
    pub fn label(&self, u: &V, v: &V) -> Option<W> {
        self.adjacency.get(u)?.get(v).copied()
    }

    /// Returns `true` when `vertex` is part of the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(vertex, neighbours)| {
                neighbours
                    .keys()
                    .filter(|neighbour| vertex <= *neighbour)
                    .count()
            })
            .sum()
    }

    /// Builds a graph containing only `edges`, each carrying the label it has
    /// in `self`.
    ///
    /// Every vertex of `self` is kept so the result spans the same vertex
    /// set. Feeding the output of an MST algorithm here rebuilds the tree as
    /// a standalone graph.
    ///
    /// # Errors
    /// Returns [`MstError::UnlabeledEdge`] when an edge does not exist in
    /// `self`.
    pub fn edge_subgraph<'a>(
        &self,
        edges: impl IntoIterator<Item = &'a Edge<V>>,
    ) -> Result<Self, MstError<V>>
    where
        V: 'a,
    {
        let mut subgraph = Self::new();
        for vertex in self.adjacency.keys() {
            subgraph.add_vertex(vertex.clone());
        }
        for edge in edges {
            let weight = self.label(edge.first(), edge.second()).ok_or_else(|| {
                MstError::UnlabeledEdge {
                    left: edge.first().clone(),
                    right: edge.second().clone(),
                }
            })?;
            subgraph.add_labeled_edge(edge.first().clone(), edge.second().clone(), weight);
        }
        Ok(subgraph)
    }
}

impl<V, W> WeightedGraph for LabeledGraph<V, W>
where
    V: Ord + Clone + Debug,
    W: Ord + Copy + Debug + Default,
{
    type Vertex = V;
    type Weight = W;

    fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    fn edges(&self) -> impl Iterator<Item = Edge<V>> {
        self.adjacency.iter().flat_map(|(vertex, neighbours)| {
            neighbours
                .keys()
                .filter(move |neighbour| vertex <= *neighbour)
                .map(move |neighbour| Edge::new(vertex.clone(), neighbour.clone()))
        })
    }

    fn neighbours(&self, vertex: &V) -> impl Iterator<Item = &V> {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(BTreeMap::keys)
    }

    fn weight(&self, u: &V, v: &V) -> Option<W> {
        self.label(u, v)
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }
}
