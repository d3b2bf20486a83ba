//! Kruskal's algorithm over a [`WeightedGraph`].

use std::collections::BTreeMap;

use tracing::{Span, debug, field, instrument, trace};

use crate::disjoint_set::{DisjointSetForest, NodeId};
use crate::error::MstError;
use crate::graph::{Edge, WeightedGraph};

use super::{MstResult, SpanningTree};

/// Computes a minimum spanning tree with Kruskal's algorithm, using a
/// path-compressing union-find.
///
/// # Errors
/// See [`find_mst_kruskal_with`].
///
/// # Examples
/// ```
/// use spanning_core::{LabeledGraph, find_mst_kruskal};
///
/// let graph = LabeledGraph::from_edges([('a', 'b', 4_u64), ('b', 'c', 1), ('a', 'c', 2)]);
/// let tree = find_mst_kruskal(&graph)?;
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.checked_total_weight(), Some(3));
/// # Ok::<(), spanning_core::MstError<char>>(())
/// ```
pub fn find_mst_kruskal<G: WeightedGraph>(graph: &G) -> MstResult<G> {
    find_mst_kruskal_with(graph, true)
}

/// Computes a minimum spanning tree with Kruskal's algorithm.
///
/// Every edge is paired with its weight and the pairs are sorted by
/// `(weight, edge)`, so equal weights resolve by endpoint order and the
/// output is deterministic. Each vertex gets a singleton set; an edge whose
/// endpoints already share a representative would close a cycle and is
/// discarded. The scan stops as soon as `|V| - 1` edges are accepted.
///
/// `path_compression` configures the union-find used for cycle checks. It
/// changes cost, never the result.
///
/// # Errors
/// Returns [`MstError::UnlabeledEdge`] when an enumerated edge has no
/// weight, and [`MstError::UnknownVertex`] when an edge names a vertex that
/// the vertex enumeration did not report.
#[instrument(
    name = "mst.kruskal",
    level = "debug",
    err,
    skip(graph),
    fields(vertices = field::Empty, edges = field::Empty, tree_edges = field::Empty),
)]
pub fn find_mst_kruskal_with<G: WeightedGraph>(graph: &G, path_compression: bool) -> MstResult<G> {
    let weighted = sorted_weighted_edges(graph)?;

    let mut forest =
        DisjointSetForest::with_capacity_and_path_compression(graph.vertex_count(), path_compression);
    let nodes: BTreeMap<G::Vertex, NodeId> = graph
        .vertices()
        .map(|vertex| (vertex.clone(), forest.make_set(vertex.clone())))
        .collect();

    let span = Span::current();
    span.record("vertices", nodes.len());
    span.record("edges", weighted.len());

    let target = nodes.len().saturating_sub(1);
    let mut tree = SpanningTree::default();
    let mut discarded = 0_usize;

    for (weight, edge) in weighted {
        if tree.len() == target {
            break;
        }
        let left = forest.find(node_for(&nodes, edge.first())?);
        let right = forest.find(node_for(&nodes, edge.second())?);
        if left == right {
            trace!(?edge, ?weight, "discarding cycle-closing edge");
            discarded = discarded.saturating_add(1);
            continue;
        }
        forest.merge(left, right);
        tree.insert(edge, weight);
    }

    #[cfg(feature = "metrics")]
    {
        metrics::counter!("mst_edges_accepted").increment(tree.len() as u64);
        metrics::counter!("mst_edges_discarded").increment(discarded as u64);
    }

    span.record("tree_edges", tree.len());
    debug!(
        tree_edges = tree.len(),
        discarded,
        components = forest.set_count(),
        "kruskal completed"
    );
    Ok(tree)
}

fn sorted_weighted_edges<G: WeightedGraph>(
    graph: &G,
) -> Result<Vec<(G::Weight, Edge<G::Vertex>)>, MstError<G::Vertex>> {
    let mut weighted = graph
        .edges()
        .map(|edge| {
            let weight = graph
                .weight(edge.first(), edge.second())
                .ok_or_else(|| MstError::UnlabeledEdge {
                    left: edge.first().clone(),
                    right: edge.second().clone(),
                })?;
            Ok((weight, edge))
        })
        .collect::<Result<Vec<_>, MstError<G::Vertex>>>()?;
    weighted.sort_unstable();
    Ok(weighted)
}

fn node_for<V: Ord + Clone>(
    nodes: &BTreeMap<V, NodeId>,
    vertex: &V,
) -> Result<NodeId, MstError<V>> {
    nodes
        .get(vertex)
        .copied()
        .ok_or_else(|| MstError::UnknownVertex {
            vertex: vertex.clone(),
        })
}
