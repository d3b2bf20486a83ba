//! Quadratic Prim oracle for MST property verification.
//!
//! Deliberately shares no code with the crate's algorithms: it keeps a plain
//! membership vector and rescans every edge on each step to find the
//! cheapest one crossing the cut.

use crate::graph::{LabeledGraph, WeightedGraph};

/// Total weight of a minimum spanning tree of a connected `graph` over
/// `0..vertex_count`, or `None` when the graph is disconnected.
pub(super) fn oracle_mst_weight(graph: &LabeledGraph<usize, u32>, vertex_count: usize) -> Option<u64> {
    if vertex_count == 0 {
        return Some(0);
    }

    let edges: Vec<(usize, usize, u32)> = graph
        .edges()
        .filter_map(|edge| {
            let (u, v) = edge.into_endpoints();
            graph.label(&u, &v).map(|weight| (u, v, weight))
        })
        .collect();

    let mut in_tree = vec![false; vertex_count];
    in_tree[0] = true;
    let mut total = 0_u64;

    for _ in 1..vertex_count {
        let (u, v, weight) = edges
            .iter()
            .copied()
            .filter(|&(u, v, _)| in_tree[u] != in_tree[v])
            .min_by_key(|&(_, _, weight)| weight)?;
        in_tree[u] = true;
        in_tree[v] = true;
        total += u64::from(weight);
    }

    Some(total)
}
