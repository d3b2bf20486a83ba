//! Error types for the spanning core library.
//!
//! Every failure surfaced by the core is a violated precondition: an empty or
//! inconsistent priority queue, or a graph collaborator that reports edges it
//! cannot label. Each error enum carries a stable machine-readable code.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident $(<$($gen:ident),+>)? {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $(<$($gen),+>)? $ErrTy $(<$($gen),+>)? {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::VertexPriorityQueue`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum QueueError {
    /// The minimum was requested from a queue with no entries.
    #[error("priority queue is empty")]
    Empty,
    /// A vertex that is not queued was asked to be removed.
    #[error("vertex is not present in the priority queue")]
    UnknownVertex,
}

define_error_codes! {
    /// Stable codes describing [`QueueError`] variants.
    enum QueueErrorCode for QueueError {
        /// The minimum was requested from a queue with no entries.
        Empty => Empty => "QUEUE_EMPTY",
        /// A vertex that is not queued was asked to be removed.
        UnknownVertex => UnknownVertex => "QUEUE_UNKNOWN_VERTEX",
    }
}

/// Errors returned while computing a minimum spanning tree.
///
/// The type parameter is the graph's vertex type so failures can name the
/// offending endpoints.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError<V> {
    /// The graph reported an edge without an associated weight.
    #[error("edge ({left:?}, {right:?}) has no weight label")]
    UnlabeledEdge {
        /// First endpoint as reported by the graph.
        left: V,
        /// Second endpoint as reported by the graph.
        right: V,
    },
    /// An edge referenced a vertex the graph never enumerated.
    #[error("edge references vertex {vertex:?}, which the graph does not enumerate")]
    UnknownVertex {
        /// The vertex missing from the vertex enumeration.
        vertex: V,
    },
    /// The priority queue driving Prim's algorithm lost track of a vertex.
    #[error("priority queue invariant violated: {0}")]
    Queue(#[from] QueueError),
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError<V> {
        /// The graph reported an edge without an associated weight.
        UnlabeledEdge => UnlabeledEdge { .. } => "UNLABELED_EDGE",
        /// An edge referenced a vertex the graph never enumerated.
        UnknownVertex => UnknownVertex { .. } => "UNKNOWN_VERTEX",
        /// The priority queue driving Prim's algorithm lost track of a vertex.
        QueueInvariant => Queue { .. } => "QUEUE_INVARIANT",
    }
}

impl<V> MstError<V> {
    /// Returns the nested queue code when the failure originated in the
    /// priority queue.
    #[must_use]
    pub const fn queue_code(&self) -> Option<QueueErrorCode> {
        match self {
            Self::Queue(inner) => Some(inner.code()),
            _ => None,
        }
    }
}
