//! Shared test utilities for `spanning-core`.

use proptest::test_runner::Config as ProptestConfig;
use spanning_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::graph::LabeledGraph;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROPTEST_CASES` and
/// `SPANNING_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// The nine-vertex textbook graph whose MST weighs 37.
#[must_use]
pub(crate) fn clrs_graph() -> LabeledGraph<char, u32> {
    LabeledGraph::from_edges([
        ('a', 'b', 4),
        ('b', 'c', 8),
        ('b', 'h', 11),
        ('c', 'd', 7),
        ('c', 'i', 2),
        ('c', 'f', 4),
        ('d', 'e', 9),
        ('d', 'f', 14),
        ('e', 'f', 10),
        ('f', 'g', 2),
        ('g', 'h', 1),
        ('g', 'i', 6),
        ('h', 'a', 8),
        ('h', 'i', 7),
    ])
}
