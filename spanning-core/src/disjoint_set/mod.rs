//! Disjoint-set forest (union-find) with union by rank and optional path
//! compression.
//!
//! Nodes live in an arena owned by the forest and are addressed by
//! [`NodeId`]. Parent links are arena indices, so rewriting a parent during
//! compression is a single store and no node ever outlives its forest.
//!
//! Kruskal's algorithm creates one node per vertex and relies on
//! [`DisjointSetForest::find`] and [`DisjointSetForest::merge`] to detect
//! cycles.

/// Handle to a node created by [`DisjointSetForest::make_set`].
///
/// Handles are only meaningful for the forest that minted them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the arena index backing this handle.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0 }
}

#[derive(Clone, Debug)]
struct Node<T> {
    element: T,
    parent: NodeId,
    rank: u32,
}

/// A forest of disjoint sets over elements of type `T`.
///
/// # Examples
/// ```
/// use spanning_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new();
/// let a = forest.make_set('a');
/// let b = forest.make_set('b');
/// let root = forest.merge(a, b);
/// assert_eq!(root, b);
/// assert_eq!(forest.find(a), b);
/// assert_eq!(forest.rank(b), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest<T> {
    nodes: Vec<Node<T>>,
    path_compression: bool,
}

impl<T> Default for DisjointSetForest<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DisjointSetForest<T> {
    /// Creates an empty forest with path compression enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_path_compression(true)
    }

    /// Creates an empty forest with the given path-compression setting.
    #[must_use]
    pub const fn with_path_compression(enabled: bool) -> Self {
        Self {
            nodes: Vec::new(),
            path_compression: enabled,
        }
    }

    /// Creates an empty forest able to hold `capacity` nodes without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_path_compression(capacity, true)
    }

    /// Creates an empty, preallocated forest with the given path-compression
    /// setting.
    #[must_use]
    pub fn with_capacity_and_path_compression(capacity: usize, enabled: bool) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            path_compression: enabled,
        }
    }

    /// Number of nodes the forest can hold before reallocating.
    #[must_use]
    #[rustfmt::skip]
    pub fn capacity(&self) -> usize { self.nodes.capacity() }

    /// Makes a singleton set holding `element` and returns its node.
    ///
    /// The new node is its own representative with rank zero.
    pub fn make_set(&mut self, element: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            element,
            parent: id,
            rank: 0,
        });
        id
    }

    /// Returns the representative of the set containing `id`.
    ///
    /// When path compression is enabled every node visited on the way up is
    /// re-parented directly onto the representative.
    ///
    /// # Panics
    /// Panics if `id` was not created by this forest.
    pub fn find(&mut self, id: NodeId) -> NodeId {
        let mut root = id;
        loop {
            let parent = self.node(root).parent;
            if parent == root {
                break;
            }
            root = parent;
        }

        if self.path_compression {
            let mut current = id;
            while current != root {
                let next = self.node(current).parent;
                self.node_mut(current).parent = root;
                current = next;
            }
        }

        root
    }

    /// Unions the sets containing `x` and `y` and returns the resulting
    /// representative.
    ///
    /// The representative with the lower rank is attached under the other
    /// one. On equal ranks the representative of `y` wins and its rank grows
    /// by one. Merging two nodes that already share a set changes nothing and
    /// returns the shared representative.
    ///
    /// # Panics
    /// Panics if either id was not created by this forest.
    pub fn merge(&mut self, x: NodeId, y: NodeId) -> NodeId {
        let left = self.find(x);
        let right = self.find(y);
        if left == right {
            return left;
        }

        #[cfg(feature = "metrics")]
        metrics::counter!("disjoint_set_merges").increment(1);

        if self.node(left).rank <= self.node(right).rank {
            self.link(left, right)
        } else {
            self.link(right, left)
        }
    }

    /// Enables or disables path compression for subsequent finds.
    pub const fn set_path_compression(&mut self, enabled: bool) {
        self.path_compression = enabled;
    }

    /// Returns `true` when [`Self::find`] compresses paths.
    #[must_use]
    #[rustfmt::skip]
    pub const fn does_path_compression(&self) -> bool { self.path_compression }

    /// Returns the element stored at `id`.
    ///
    /// # Panics
    /// Panics if `id` was not created by this forest.
    #[must_use]
    pub fn element(&self, id: NodeId) -> &T {
        &self.node(id).element
    }

    /// Returns the stored parent of `id` without following further links.
    ///
    /// # Panics
    /// Panics if `id` was not created by this forest.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> NodeId {
        self.node(id).parent
    }

    /// Returns the rank of `id`, an upper bound on the height of its subtree.
    ///
    /// # Panics
    /// Panics if `id` was not created by this forest.
    #[must_use]
    pub fn rank(&self, id: NodeId) -> u32 {
        self.node(id).rank
    }

    /// Returns `true` when `id` is the representative of its set.
    ///
    /// # Panics
    /// Panics if `id` was not created by this forest.
    #[must_use]
    pub fn is_representative(&self, id: NodeId) -> bool {
        self.node(id).parent == id
    }

    /// Number of nodes created so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.nodes.len() }

    /// Returns `true` when no node has been created.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Number of disjoint sets currently in the forest.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(index, node)| node.parent.0 == *index)
            .count()
    }

    // `child` and `root` must both be representatives.
    fn link(&mut self, child: NodeId, root: NodeId) -> NodeId {
        let child_rank = self.node(child).rank;
        self.node_mut(child).parent = root;
        let root_node = self.node_mut(root);
        if root_node.rank == child_rank {
            root_node.rank = root_node.rank.saturating_add(1);
        }
        root
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "node ids are minted by make_set and index into the same arena"
    )]
    fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "node ids are minted by make_set and index into the same arena"
    )]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }
}
