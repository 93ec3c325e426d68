//! Error types for the spantree core library.
//!
//! Graph construction fails eagerly with [`InvalidEdge`]. Algorithm failures
//! are not raised: an [`MstError`] travels inside the returned
//! [`crate::MstReport`] so batch callers can keep going.

use std::fmt;

use thiserror::Error;

use crate::mst::MstAlgorithm;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
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

        impl $ErrTy {
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

/// An edge rejected while building a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidEdge {
    /// Both endpoints were the same vertex.
    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop {
        /// The repeated endpoint.
        vertex: usize,
    },
    /// An endpoint was not a vertex of the graph.
    #[error("edge endpoint {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The weight was NaN or infinite.
    #[error("edge ({u}, {v}) has non-finite weight {weight}")]
    NonFiniteWeight {
        /// First endpoint as supplied.
        u: usize,
        /// Second endpoint as supplied.
        v: usize,
        /// The rejected weight.
        weight: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`InvalidEdge`] variants.
    enum InvalidEdgeCode for InvalidEdge {
        /// Both endpoints were the same vertex.
        SelfLoop => SelfLoop { .. } => "INVALID_EDGE_SELF_LOOP",
        /// An endpoint was not a vertex of the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "INVALID_EDGE_VERTEX_OUT_OF_RANGE",
        /// The weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "INVALID_EDGE_NON_FINITE_WEIGHT",
    }
}

/// Reason an MST computation did not produce a spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// Fewer than `n - 1` tree edges could be found.
    #[error("graph is disconnected ({algorithm}): found {found} of {required} spanning edges")]
    Disconnected {
        /// Algorithm that detected the disconnection.
        algorithm: MstAlgorithm,
        /// Tree edges accepted before the search ran dry.
        found: usize,
        /// Tree edges a spanning tree needs (`n - 1`).
        required: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// Fewer than `n - 1` tree edges could be found.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED",
    }
}

impl MstError {
    /// Returns the algorithm that produced the failure.
    #[must_use]
    pub const fn algorithm(&self) -> MstAlgorithm {
        match self {
            Self::Disconnected { algorithm, .. } => *algorithm,
        }
    }
}
