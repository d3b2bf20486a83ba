//! Seeded synthetic graphs for MST benchmarks.
//!
//! Every graph links vertex `v` to a random earlier vertex first, so it is
//! connected, then adds random chords until the requested average degree is
//! reached.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanning_core::LabeledGraph;
use thiserror::Error;

/// Errors raised while validating a [`SyntheticGraphConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntheticError {
    /// The graph must contain at least one vertex.
    #[error("vertex_count must be positive")]
    ZeroVertices,
    /// Weights are drawn from `1..=max_weight`.
    #[error("max_weight must be positive")]
    ZeroMaxWeight,
    /// No simple graph on `vertex_count` vertices has this average degree.
    #[error("average degree {average_degree} exceeds {max} for {vertex_count} vertices")]
    DegreeTooHigh {
        /// Requested average degree.
        average_degree: u32,
        /// Requested vertex count.
        vertex_count: u32,
        /// Largest achievable average degree.
        max: u32,
    },
}

/// Shape of a synthetic benchmark graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyntheticGraphConfig {
    /// Number of vertices, labelled `0..vertex_count`.
    pub vertex_count: u32,
    /// Target average degree; the backbone alone gives roughly two.
    pub average_degree: u32,
    /// Upper bound for edge weights.
    pub max_weight: u64,
    /// Seed for the deterministic generator.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Number of edges the generated graph will hold.
    #[must_use]
    pub fn target_edges(&self) -> u64 {
        let requested = u64::from(self.vertex_count) * u64::from(self.average_degree) / 2;
        requested.max(u64::from(self.vertex_count.saturating_sub(1)))
    }

    fn validate(&self) -> Result<(), SyntheticError> {
        if self.vertex_count == 0 {
            return Err(SyntheticError::ZeroVertices);
        }
        if self.max_weight == 0 {
            return Err(SyntheticError::ZeroMaxWeight);
        }
        let max = self.vertex_count - 1;
        if self.average_degree > max {
            return Err(SyntheticError::DegreeTooHigh {
                average_degree: self.average_degree,
                vertex_count: self.vertex_count,
                max,
            });
        }
        Ok(())
    }
}

/// Generates the graph described by `config`.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration cannot be satisfied.
///
/// # Examples
/// ```
/// use spanning_benches::source::{SyntheticGraphConfig, generate};
///
/// let config = SyntheticGraphConfig {
///     vertex_count: 10,
///     average_degree: 4,
///     max_weight: 100,
///     seed: 7,
/// };
/// let graph = generate(&config)?;
/// assert_eq!(graph.edge_count() as u64, config.target_edges());
/// # Ok::<(), spanning_benches::source::SyntheticError>(())
/// ```
pub fn generate(config: &SyntheticGraphConfig) -> Result<LabeledGraph<u32, u64>, SyntheticError> {
    config.validate()?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = LabeledGraph::new();
    graph.add_vertex(0);

    let mut edges = 0_u64;
    for vertex in 1..config.vertex_count {
        let parent = rng.gen_range(0..vertex);
        let weight = rng.gen_range(1..=config.max_weight);
        graph.add_labeled_edge(parent, vertex, weight);
        edges += 1;
    }

    let target = config.target_edges();
    while edges < target {
        let u = rng.gen_range(0..config.vertex_count);
        let v = rng.gen_range(0..config.vertex_count);
        if u == v || graph.label(&u, &v).is_some() {
            continue;
        }
        let weight = rng.gen_range(1..=config.max_weight);
        graph.add_labeled_edge(u, v, weight);
        edges += 1;
    }
    Ok(graph)
}
