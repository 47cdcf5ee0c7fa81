//! Error types for the pixelforest core library.
//!
//! Every variant describes a precondition the caller violated. Nothing is
//! computed once one of these is returned, and retrying the same input always
//! fails the same way.

use std::fmt;

use thiserror::Error;

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

/// Invalid input handed to one of the graph algorithms.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// The graph has no vertices.
    #[error("graph must contain at least one vertex")]
    EmptyGraph,
    /// An edge referenced a vertex outside `[0, vertex_count)`.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The arborescence root is not a vertex of the graph.
    #[error("root {root} is outside the graph of {vertex_count} vertices")]
    RootOutOfRange {
        /// The requested root.
        root: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge weight was NaN or infinite.
    #[error("edge ({from}, {to}) has a non-finite weight")]
    NonFiniteWeight {
        /// Source endpoint as provided.
        from: usize,
        /// Target endpoint as provided.
        to: usize,
    },
    /// An edge weight was below zero.
    #[error("edge ({from}, {to}) has a negative weight")]
    NegativeWeight {
        /// Source endpoint as provided.
        from: usize,
        /// Target endpoint as provided.
        to: usize,
    },
    /// The segmentation threshold was NaN.
    #[error("segmentation threshold must be a number")]
    InvalidThreshold,
    /// A grid dimension was zero.
    #[error("grid of {rows}x{cols} has no pixels")]
    EmptyGrid {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// The grid does not cover exactly the graph's vertices.
    #[error("grid of {rows}x{cols} does not match a graph of {vertex_count} vertices")]
    GridMismatch {
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The graph has no vertices.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// An edge referenced a vertex outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// The arborescence root is not a vertex of the graph.
        RootOutOfRange => RootOutOfRange { .. } => "GRAPH_ROOT_OUT_OF_RANGE",
        /// An edge weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// An edge weight was below zero.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// The segmentation threshold was NaN.
        InvalidThreshold => InvalidThreshold => "GRAPH_INVALID_THRESHOLD",
        /// A grid dimension was zero.
        EmptyGrid => EmptyGrid { .. } => "GRAPH_EMPTY_GRID",
        /// The grid does not cover exactly the graph's vertices.
        GridMismatch => GridMismatch { .. } => "GRAPH_GRID_MISMATCH",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
