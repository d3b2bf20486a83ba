//! Benchmark support crate for spanning.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks that compare Prim and Kruskal.

pub mod error;
pub mod params;
pub mod source;
