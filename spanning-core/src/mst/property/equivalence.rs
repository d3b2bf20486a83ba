//! Oracle and cross-algorithm equivalence property.

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::mst::{SpanningTree, find_mst_kruskal, find_mst_prim};

use super::oracle::oracle_mst_weight;
use super::types::{MstFixture, WeightDistribution};

fn total(tree: &SpanningTree<usize, u32>) -> u64 {
    tree.iter().map(|(_, weight)| u64::from(weight)).sum()
}

/// Verifies that Prim and Kruskal both reach the oracle's MST weight.
///
/// With unique weights the MST is unique, so the two edge sets must also be
/// identical.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let expected = oracle_mst_weight(&fixture.graph, fixture.vertex_count)
        .ok_or_else(|| TestCaseError::fail("generated graph must be connected"))?;

    let prim = find_mst_prim(&fixture.graph)
        .map_err(|err| TestCaseError::fail(format!("prim failed: {err}")))?;
    let kruskal = find_mst_kruskal(&fixture.graph)
        .map_err(|err| TestCaseError::fail(format!("kruskal failed: {err}")))?;

    prop_assert_eq!(total(&prim), expected, "prim weight for {:?}", fixture.distribution);
    prop_assert_eq!(
        total(&kruskal),
        expected,
        "kruskal weight for {:?}",
        fixture.distribution
    );

    if fixture.distribution == WeightDistribution::Unique {
        prop_assert_eq!(prim.into_edge_set(), kruskal.into_edge_set());
    }
    Ok(())
}
