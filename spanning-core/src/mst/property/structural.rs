//! Structural invariants of the returned spanning trees.

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::disjoint_set::DisjointSetForest;
use crate::graph::LabeledGraph;
use crate::mst::{SpanningTree, find_mst_kruskal_with, find_mst_prim};

use super::types::MstFixture;

/// Verifies size, acyclicity, spanning and label fidelity for both
/// algorithms, and that Kruskal's result ignores the compression setting.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let compressed = find_mst_kruskal_with(&fixture.graph, true)
        .map_err(|err| TestCaseError::fail(format!("kruskal failed: {err}")))?;
    let uncompressed = find_mst_kruskal_with(&fixture.graph, false)
        .map_err(|err| TestCaseError::fail(format!("kruskal failed: {err}")))?;
    prop_assert_eq!(&compressed, &uncompressed);

    let prim = find_mst_prim(&fixture.graph)
        .map_err(|err| TestCaseError::fail(format!("prim failed: {err}")))?;

    check_tree(fixture, &compressed)?;
    check_tree(fixture, &prim)
}

fn check_tree(fixture: &MstFixture, tree: &SpanningTree<usize, u32>) -> TestCaseResult {
    prop_assert_eq!(tree.len(), fixture.vertex_count - 1);

    let mut forest = DisjointSetForest::with_capacity(fixture.vertex_count);
    let ids: Vec<_> = (0..fixture.vertex_count)
        .map(|vertex| forest.make_set(vertex))
        .collect();
    for (edge, weight) in tree.iter() {
        prop_assert!(edge.first() < edge.second(), "edge {:?} is not canonical", edge);
        prop_assert_eq!(fixture.graph.label(edge.first(), edge.second()), Some(weight));
        let left = forest.find(ids[*edge.first()]);
        let right = forest.find(ids[*edge.second()]);
        prop_assert_ne!(left, right, "edge {:?} closes a cycle", edge);
        forest.merge(left, right);
    }
    prop_assert_eq!(forest.set_count(), 1);

    let rebuilt: LabeledGraph<usize, u32> = fixture
        .graph
        .edge_subgraph(tree.edges())
        .map_err(|err| TestCaseError::fail(format!("round trip failed: {err}")))?;
    prop_assert_eq!(rebuilt.edge_count(), tree.len());
    Ok(())
}
