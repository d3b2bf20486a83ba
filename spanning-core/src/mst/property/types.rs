//! Type definitions for MST property-based tests.

use test_strategy::Arbitrary;

use crate::graph::LabeledGraph;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights and density are chosen, producing inputs that
/// stress different parts of the two algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Every edge has a distinct weight, so the MST is unique.
    #[weight(2)]
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    #[weight(3)]
    ManyIdentical,
    /// Sparse graph: the random spanning backbone plus a few chords.
    Sparse,
    /// Dense graph approaching a complete graph.
    Dense,
}

/// Fixture for MST property tests.
///
/// Captures the generated graph together with the distribution used to build
/// it so failures can be diagnosed.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Connected graph over vertices `0..vertex_count`.
    pub graph: LabeledGraph<usize, u32>,
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}
