//! Spanning core library.
//!
//! Minimum spanning trees over weighted undirected graphs, computed with
//! Prim's algorithm or Kruskal's algorithm, together with the structures they
//! are built on: a disjoint-set forest with union by rank and path
//! compression, and a mutable vertex priority queue.
//!
//! # Tracing
//!
//! The algorithms emit `debug` spans named `mst.prim` and `mst.kruskal`, and
//! [`SpanningTreeSolver::run`] wraps them in an `info` span named
//! `mst.solve`. Individual edge decisions are logged at `trace` level.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the crate emits:
//!
//! - `mst_edges_accepted` (counter)
//! - `mst_edges_discarded` (counter, Kruskal only)
//! - `disjoint_set_merges` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod disjoint_set;
mod error;
mod graph;
mod mst;
mod priority_queue;

pub use crate::{
    builder::{MstAlgorithm, SpanningTreeBuilder, SpanningTreeSolver},
    disjoint_set::{DisjointSetForest, NodeId},
    error::{MstError, MstErrorCode, QueueError, QueueErrorCode},
    graph::{Edge, LabeledGraph, WeightedGraph},
    mst::{
        MstResult, SpanningTree, Tentative, find_mst_kruskal, find_mst_kruskal_with,
        find_mst_prim,
    },
    priority_queue::VertexPriorityQueue,
};

#[cfg(test)]
pub(crate) mod test_utils;
