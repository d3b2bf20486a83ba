//! End-to-end tests of the public spanning tree API.

use std::collections::BTreeSet;

use rstest::{fixture, rstest};
use spanning_core::{
    DisjointSetForest, Edge, LabeledGraph, MstAlgorithm, SpanningTreeBuilder, VertexPriorityQueue,
    WeightedGraph, find_mst_kruskal, find_mst_prim,
};

/// A square with one diagonal; the unique MST drops the two heaviest edges.
#[fixture]
fn square() -> LabeledGraph<&'static str, u64> {
    LabeledGraph::from_edges([
        ("nw", "ne", 1),
        ("ne", "se", 5),
        ("se", "sw", 2),
        ("sw", "nw", 4),
        ("nw", "se", 3),
    ])
}

#[rstest]
fn both_algorithms_agree_on_unique_tree(square: LabeledGraph<&'static str, u64>) {
    let prim = find_mst_prim(&square).expect("square is well formed");
    let kruskal = find_mst_kruskal(&square).expect("square is well formed");

    let expected: BTreeSet<_> = [
        Edge::new("nw", "ne"),
        Edge::new("se", "sw"),
        Edge::new("nw", "se"),
    ]
    .into_iter()
    .collect();
    assert_eq!(prim.checked_total_weight(), Some(6));
    assert_eq!(prim, kruskal);
    assert_eq!(prim.into_edge_set(), expected);
}

#[rstest]
#[case::prim(MstAlgorithm::Prim, true)]
#[case::kruskal(MstAlgorithm::Kruskal, true)]
#[case::kruskal_uncompressed(MstAlgorithm::Kruskal, false)]
fn solver_produces_spanning_tree(
    square: LabeledGraph<&'static str, u64>,
    #[case] algorithm: MstAlgorithm,
    #[case] path_compression: bool,
) {
    let tree = SpanningTreeBuilder::new()
        .with_algorithm(algorithm)
        .with_path_compression(path_compression)
        .build()
        .run(&square)
        .expect("square is well formed");
    assert_eq!(tree.len(), square.vertex_count() - 1);
    assert_eq!(tree.checked_total_weight(), Some(6));
}

#[test]
fn public_structures_compose() {
    let mut forest = DisjointSetForest::new();
    let a = forest.make_set('a');
    let b = forest.make_set('b');
    let root = forest.merge(a, b);
    assert_eq!(forest.find(a), root);
    assert_eq!(forest.set_count(), 1);

    let mut queue = VertexPriorityQueue::new();
    queue.insert('x', 3_u32);
    queue.insert('y', 1);
    queue.set('x', 0);
    assert_eq!(queue.min(), Ok((&'x', &0)));
}
