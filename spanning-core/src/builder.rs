//! Builder utilities for configuring spanning tree computations.
//!
//! Exposes the algorithm selection surface used by callers that want to pick
//! Prim or Kruskal at runtime, such as the CLI.

use std::fmt;

use tracing::instrument;

use crate::graph::WeightedGraph;
use crate::mst::{MstResult, find_mst_kruskal_with, find_mst_prim};

/// Selects the algorithm used by [`SpanningTreeSolver::run`].
///
/// # Examples
/// ```
/// use spanning_core::MstAlgorithm;
///
/// assert_eq!(MstAlgorithm::default(), MstAlgorithm::Kruskal);
/// assert_eq!(MstAlgorithm::Prim.as_str(), "prim");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MstAlgorithm {
    /// Grow one tree outward using a vertex priority queue.
    Prim,
    /// Scan edges by ascending weight with a disjoint-set forest.
    #[default]
    Kruskal,
}

impl MstAlgorithm {
    /// Every supported algorithm, in a stable order.
    pub const ALL: [Self; 2] = [Self::Prim, Self::Kruskal];

    /// Returns the stable lowercase name of the algorithm.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configures and constructs [`SpanningTreeSolver`] instances.
///
/// # Examples
/// ```
/// use spanning_core::{MstAlgorithm, SpanningTreeBuilder};
///
/// let solver = SpanningTreeBuilder::new()
///     .with_algorithm(MstAlgorithm::Prim)
///     .with_path_compression(false)
///     .build();
/// assert_eq!(solver.algorithm(), MstAlgorithm::Prim);
/// assert!(!solver.path_compression());
/// ```
#[derive(Debug, Clone)]
pub struct SpanningTreeBuilder {
    algorithm: MstAlgorithm,
    path_compression: bool,
}

impl Default for SpanningTreeBuilder {
    fn default() -> Self {
        Self {
            algorithm: MstAlgorithm::default(),
            path_compression: true,
        }
    }
}

impl SpanningTreeBuilder {
    /// Creates a builder using Kruskal with path compression.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the algorithm to run.
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: MstAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Enables or disables path compression in Kruskal's union-find. Prim
    /// ignores this setting.
    #[must_use]
    pub const fn with_path_compression(mut self, enabled: bool) -> Self {
        self.path_compression = enabled;
        self
    }

    /// Finalises the configuration.
    #[must_use]
    pub const fn build(self) -> SpanningTreeSolver {
        SpanningTreeSolver {
            algorithm: self.algorithm,
            path_compression: self.path_compression,
        }
    }
}

/// Runs the configured MST algorithm against a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanningTreeSolver {
    algorithm: MstAlgorithm,
    path_compression: bool,
}

impl SpanningTreeSolver {
    /// Returns the configured algorithm.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> MstAlgorithm { self.algorithm }

    /// Returns whether Kruskal's union-find compresses paths.
    #[must_use]
    #[rustfmt::skip]
    pub const fn path_compression(&self) -> bool { self.path_compression }

    /// Computes a minimum spanning tree of `graph`.
    ///
    /// # Errors
    /// Propagates the [`crate::MstError`] raised by the selected algorithm.
    ///
    /// # Examples
    /// ```
    /// use spanning_core::{LabeledGraph, MstAlgorithm, SpanningTreeBuilder};
    ///
    /// let graph = LabeledGraph::from_edges([(0, 1, 3_u32), (1, 2, 4), (0, 2, 9)]);
    /// for algorithm in MstAlgorithm::ALL {
    ///     let solver = SpanningTreeBuilder::new().with_algorithm(algorithm).build();
    ///     assert_eq!(solver.run(&graph)?.checked_total_weight(), Some(7));
    /// }
    /// # Ok::<(), spanning_core::MstError<i32>>(())
    /// ```
    #[instrument(
        name = "mst.solve",
        err,
        skip(self, graph),
        fields(algorithm = %self.algorithm, path_compression = self.path_compression),
    )]
    pub fn run<G: WeightedGraph>(&self, graph: &G) -> MstResult<G> {
        match self.algorithm {
            MstAlgorithm::Prim => find_mst_prim(graph),
            MstAlgorithm::Kruskal => find_mst_kruskal_with(graph, self.path_compression),
        }
    }
}
