//! Unit tests for edge normalisation and the labelled graph.

use std::collections::{BTreeSet, HashSet};

use rstest::rstest;

use crate::error::{MstError, MstErrorCode};

use super::{Edge, LabeledGraph, WeightedGraph};

fn triangle() -> LabeledGraph<char, u32> {
    LabeledGraph::from_edges([('a', 'b', 1), ('b', 'c', 2), ('c', 'a', 3)])
}

#[rstest]
#[case('a', 'b')]
#[case('b', 'a')]
fn edge_is_normalised(#[case] u: char, #[case] v: char) {
    let edge = Edge::new(u, v);
    assert_eq!(edge.first(), &'a');
    assert_eq!(edge.second(), &'b');
    assert_eq!(edge, LabeledGraph::<char, u32>::normalize_edge(v, u));
}

#[test]
fn reversed_edges_collapse_in_sets() {
    let hashed: HashSet<_> = [Edge::new(1, 2), Edge::new(2, 1)].into_iter().collect();
    let ordered: BTreeSet<_> = [Edge::new(1, 2), Edge::new(2, 1)].into_iter().collect();
    assert_eq!(hashed.len(), 1);
    assert_eq!(ordered.len(), 1);
}

#[test]
fn loops_are_detected() {
    assert!(Edge::new(3, 3).is_loop());
    assert!(!Edge::new(3, 4).is_loop());
    assert_eq!(Edge::new(4, 3).into_endpoints(), (3, 4));
}

#[test]
fn edges_are_enumerated_once_per_undirected_pair() {
    let graph = triangle();
    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(
        edges,
        vec![Edge::new('a', 'b'), Edge::new('a', 'c'), Edge::new('b', 'c')]
    );
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn labels_are_symmetric_and_replaceable() {
    let mut graph = triangle();
    assert_eq!(graph.weight(&'a', &'c'), Some(3));
    assert_eq!(graph.weight(&'c', &'a'), Some(3));
    assert_eq!(graph.add_labeled_edge('c', 'a', 9), Some(3));
    assert_eq!(graph.label(&'a', &'c'), Some(9));
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn neighbours_of_unknown_vertex_are_empty() {
    let graph = triangle();
    assert_eq!(graph.neighbours(&'z').count(), 0);
    let around_b: Vec<_> = graph.neighbours(&'b').copied().collect();
    assert_eq!(around_b, vec!['a', 'c']);
}

#[test]
fn isolated_vertices_are_counted() {
    let mut graph = triangle();
    assert!(graph.add_vertex('z'));
    assert!(!graph.add_vertex('z'));
    assert!(graph.contains_vertex(&'z'));
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.vertices().count(), 4);
}

#[test]
fn edge_subgraph_copies_original_labels() {
    let graph = triangle();
    let keep = [Edge::new('b', 'a'), Edge::new('c', 'b')];
    let subgraph = graph.edge_subgraph(&keep).expect("edges exist in the graph");

    assert_eq!(subgraph.vertex_count(), 3);
    assert_eq!(subgraph.edge_count(), 2);
    assert_eq!(subgraph.label(&'a', &'b'), Some(1));
    assert_eq!(subgraph.label(&'b', &'c'), Some(2));
    assert_eq!(subgraph.label(&'a', &'c'), None);
}

#[test]
fn edge_subgraph_rejects_foreign_edges() {
    let graph = triangle();
    let err = graph
        .edge_subgraph(&[Edge::new('a', 'z')])
        .expect_err("a-z is not part of the graph");
    assert_eq!(
        err,
        MstError::UnlabeledEdge {
            left: 'a',
            right: 'z'
        }
    );
    assert_eq!(err.code(), MstErrorCode::UnlabeledEdge);
}
