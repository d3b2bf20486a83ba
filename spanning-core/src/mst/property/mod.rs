//! Property-based tests for Prim's and Kruskal's algorithms.
//!
//! Checks both algorithms against an independent quadratic oracle, validates
//! structural invariants of the returned trees (size, acyclicity, spanning,
//! labels) and compares them with each other across graph topologies with
//! varied weight distributions.

mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod types;
