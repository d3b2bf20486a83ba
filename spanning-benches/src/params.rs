//! Benchmark parameter types.

use std::fmt;

/// Parameters identifying one MST benchmark input.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: u32,
    /// Average number of incident edges per vertex.
    pub average_degree: u32,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.average_degree)
    }
}
