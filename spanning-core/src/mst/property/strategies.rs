//! Strategy builders for MST property-based tests.
//!
//! Every generator first links each vertex to a random earlier vertex, which
//! guarantees a connected graph, and then adds chords with a
//! distribution-specific probability.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::graph::LabeledGraph;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs, keeping the edge count in check.
const DENSE_MAX_VERTICES: usize = 24;

/// Generates MST fixtures across all weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (max_vertices, chord_probability) = match distribution {
        WeightDistribution::Unique | WeightDistribution::ManyIdentical => (MAX_VERTICES, 0.3),
        WeightDistribution::Sparse => (MAX_VERTICES, 0.05),
        WeightDistribution::Dense => (DENSE_MAX_VERTICES, 0.9),
    };
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let pairs = connected_pairs(vertex_count, chord_probability, rng);
    let weights = weights_for(distribution, pairs.len(), rng);

    let graph = LabeledGraph::from_edges(
        pairs
            .into_iter()
            .zip(weights)
            .map(|((u, v), weight)| (u, v, weight)),
    );

    MstFixture {
        graph,
        vertex_count,
        distribution,
    }
}

/// Returns distinct vertex pairs forming a connected graph on
/// `0..vertex_count`.
fn connected_pairs(
    vertex_count: usize,
    chord_probability: f64,
    rng: &mut SmallRng,
) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for vertex in 1..vertex_count {
        let parent = rng.gen_range(0..vertex);
        pairs.push((parent, vertex));
        for earlier in (0..vertex).filter(|&earlier| earlier != parent) {
            if rng.gen_bool(chord_probability) {
                pairs.push((earlier, vertex));
            }
        }
    }
    pairs.shuffle(rng);
    pairs
}

fn weights_for(distribution: WeightDistribution, count: usize, rng: &mut SmallRng) -> Vec<u32> {
    match distribution {
        WeightDistribution::Unique => {
            let upper = u32::try_from(count).unwrap_or(u32::MAX).saturating_mul(4);
            let mut pool: Vec<u32> = (1..=upper).collect();
            pool.shuffle(rng);
            pool.truncate(count);
            pool
        }
        WeightDistribution::ManyIdentical => {
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<u32> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
            (0..count)
                .map(|_| pool[rng.gen_range(0..pool.len())])
                .collect()
        }
        WeightDistribution::Sparse | WeightDistribution::Dense => {
            (0..count).map(|_| rng.gen_range(0..1_000)).collect()
        }
    }
}
