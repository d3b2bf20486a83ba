//! Prim's algorithm over a [`WeightedGraph`].

use std::collections::BTreeMap;

use tracing::{Span, debug, field, instrument, trace};

use crate::error::MstError;
use crate::graph::{Edge, WeightedGraph};
use crate::priority_queue::VertexPriorityQueue;

use super::{MstResult, SpanningTree, Tentative};

type Queue<G> = VertexPriorityQueue<
    <G as WeightedGraph>::Vertex,
    Tentative<<G as WeightedGraph>::Weight>,
>;

/// Computes a minimum spanning tree with Prim's algorithm.
///
/// The first vertex reported by [`WeightedGraph::vertices`] starts at
/// distance zero and every other vertex starts [`Tentative::Unreached`]. The
/// closest queued vertex is finalised on each step after relaxing the edges
/// to its still-queued neighbours; it then contributes the edge to its
/// recorded predecessor. Self-loops are ignored. An empty graph yields an
/// empty tree.
///
/// # Errors
/// Returns [`MstError::UnlabeledEdge`] when the graph lists a neighbour it
/// cannot weigh, and [`MstError::Queue`] if the queue loses track of a
/// vertex it handed out.
///
/// # Examples
/// ```
/// use spanning_core::{Edge, LabeledGraph, find_mst_prim};
///
/// let graph = LabeledGraph::from_edges([(1, 2, 5_u32), (2, 3, 1), (1, 3, 2)]);
/// let tree = find_mst_prim(&graph)?;
/// assert_eq!(tree.checked_total_weight(), Some(3));
/// assert!(tree.contains(&Edge::new(3, 1)));
/// # Ok::<(), spanning_core::MstError<i32>>(())
/// ```
#[instrument(
    name = "mst.prim",
    level = "debug",
    err,
    skip(graph),
    fields(vertices = field::Empty, tree_edges = field::Empty),
)]
pub fn find_mst_prim<G: WeightedGraph>(graph: &G) -> MstResult<G> {
    let mut tree = SpanningTree::default();
    let mut vertices = graph.vertices();
    let Some(start) = vertices.next() else {
        debug!("graph has no vertices, returning an empty tree");
        return Ok(tree);
    };

    let mut queue: Queue<G> = VertexPriorityQueue::new();
    queue.insert(start.clone(), Tentative::Reached(G::Weight::default()));
    for vertex in vertices {
        queue.insert(vertex.clone(), Tentative::Unreached);
    }
    let span = Span::current();
    span.record("vertices", queue.len());

    let mut previous = BTreeMap::new();
    while !queue.is_empty() {
        let (active, distance) = {
            let (vertex, distance) = queue.min()?;
            (vertex.clone(), *distance)
        };
        relax_neighbours(graph, &active, &mut queue, &mut previous)?;
        queue.remove(&active)?;

        match (previous.remove(&active), distance) {
            (Some(parent), Tentative::Reached(weight)) => {
                trace!(?parent, vertex = ?active, ?weight, "finalised vertex");
                tree.insert(Edge::new(parent, active), weight);
            }
            (_, Tentative::Unreached) => {
                debug!(vertex = ?active, "vertex unreachable from the tree, starting a new component");
            }
            (None, Tentative::Reached(_)) => {}
        }
    }

    #[cfg(feature = "metrics")]
    metrics::counter!("mst_edges_accepted").increment(tree.len() as u64);

    span.record("tree_edges", tree.len());
    debug!(tree_edges = tree.len(), "prim completed");
    Ok(tree)
}

fn relax_neighbours<G: WeightedGraph>(
    graph: &G,
    active: &G::Vertex,
    queue: &mut Queue<G>,
    previous: &mut BTreeMap<G::Vertex, G::Vertex>,
) -> Result<(), MstError<G::Vertex>> {
    for neighbour in graph.neighbours(active) {
        if neighbour == active {
            continue;
        }
        let Some(current) = queue.weight(neighbour).copied() else {
            continue;
        };
        let weight = graph
            .weight(active, neighbour)
            .ok_or_else(|| MstError::UnlabeledEdge {
                left: active.clone(),
                right: neighbour.clone(),
            })?;

        let candidate = Tentative::Reached(weight);
        if candidate < current {
            queue.set(neighbour.clone(), candidate);
            previous.insert(neighbour.clone(), active.clone());
        }
    }
    Ok(())
}
