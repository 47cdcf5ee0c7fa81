//! Spanning structures and threshold segmentation over pixel graphs.
//!
//! A caller supplies a weighted edge list over the pixels of a grid, with the
//! pixel at `(row, col)` numbered `row * cols + col`. The crate builds either
//! a minimum spanning forest ([`kruskal`]) or a minimum arborescence rooted at
//! a chosen pixel ([`min_arborescence`]), then cuts every edge heavier than a
//! threshold and labels the remaining connected pieces ([`segment`]).
//! [`Segmenter`] runs both steps from one configuration.
//!
//! ```
//! use pixelforest_core::{Edge, GridShape, SegmenterBuilder};
//!
//! let shape = GridShape::new(1, 4).expect("non-empty grid");
//! let edges = [
//!     Edge::new(0, 1, 0.01),
//!     Edge::new(1, 2, 0.40),
//!     Edge::new(2, 3, 0.005),
//! ];
//! let outcome = SegmenterBuilder::new()
//!     .build()
//!     .expect("default configuration is valid")
//!     .run(shape, &edges)
//!     .expect("edges fit the grid");
//! assert_eq!(outcome.segmentation().labels(), &[0, 0, 1, 1]);
//! ```
//!
//! All work is synchronous and allocation-bounded by `O(V + E)`. Inputs are
//! never modified. Diagnostics go through `tracing`; enable the `logging`
//! feature for a ready-made subscriber and `metrics` for counters.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod arborescence;
mod builder;
mod disjoint_set;
mod edge;
mod error;
mod grid;
#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub mod logging;
mod mst;
mod segment;
mod segmenter;
#[cfg(test)]
mod test_utils;

pub use crate::{
    arborescence::{Arborescence, min_arborescence},
    builder::{DEFAULT_THRESHOLD, SegmenterBuilder, SpanningStrategy},
    disjoint_set::DisjointSet,
    edge::{Edge, validate_edges},
    error::{GraphError, GraphErrorCode, Result},
    grid::GridShape,
    mst::{SpanningForest, kruskal},
    segment::{CandidateEdges, Segmentation, segment},
    segmenter::{SegmentationOutcome, Segmenter, SpanningStructure},
};
