//! End-to-end segmentation of a pixel graph.
//!
//! A [`Segmenter`] runs the configured spanning algorithm over the caller's
//! edges, then cuts the result at its threshold. The spanning structure is
//! returned alongside the labels so callers can inspect what was cut.

use tracing::{info, instrument};

use crate::{
    Result,
    arborescence::{Arborescence, min_arborescence},
    builder::SpanningStrategy,
    edge::Edge,
    grid::GridShape,
    mst::{SpanningForest, kruskal},
    segment::{CandidateEdges, Segmentation, segment},
};

/// The spanning structure a run produced.
#[derive(Clone, Debug, PartialEq)]
pub enum SpanningStructure {
    /// Produced by [`SpanningStrategy::MinimumSpanningForest`].
    Forest(SpanningForest),
    /// Produced by [`SpanningStrategy::Arborescence`].
    Arborescence(Arborescence),
}

impl SpanningStructure {
    /// Returns the forest, if this run built one.
    #[must_use]
    pub fn as_forest(&self) -> Option<&SpanningForest> {
        match self {
            Self::Forest(forest) => Some(forest),
            Self::Arborescence(_) => None,
        }
    }

    /// Returns the arborescence, if this run built one.
    #[must_use]
    pub fn as_arborescence(&self) -> Option<&Arborescence> {
        match self {
            Self::Forest(_) => None,
            Self::Arborescence(tree) => Some(tree),
        }
    }

    /// Returns the summed weight of the spanning edges.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        match self {
            Self::Forest(forest) => forest.total_weight(),
            Self::Arborescence(tree) => tree.total_weight(),
        }
    }
}

impl CandidateEdges for SpanningStructure {
    fn vertex_count(&self) -> usize {
        match self {
            Self::Forest(forest) => forest.vertex_count(),
            Self::Arborescence(tree) => tree.vertex_count(),
        }
    }

    fn candidates(&self) -> impl Iterator<Item = Edge> + '_ {
        let (forest, tree) = match self {
            Self::Forest(forest) => (Some(forest), None),
            Self::Arborescence(tree) => (None, Some(tree)),
        };
        let forest_edges = forest
            .into_iter()
            .flat_map(|forest| forest.edges().iter().copied());
        let tree_edges = tree.into_iter().flat_map(|tree| {
            tree.iter()
                .map(|(child, parent, weight)| Edge::new(parent, child, weight))
        });
        forest_edges.chain(tree_edges)
    }
}

/// The result of [`Segmenter::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentationOutcome {
    spanning: SpanningStructure,
    segmentation: Segmentation,
}

impl SegmentationOutcome {
    /// Returns the spanning structure the labels were cut from.
    #[must_use]
    #[rustfmt::skip]
    pub fn spanning(&self) -> &SpanningStructure { &self.spanning }

    /// Returns the segment labels.
    #[must_use]
    #[rustfmt::skip]
    pub fn segmentation(&self) -> &Segmentation { &self.segmentation }

    /// Splits the outcome into its spanning structure and labels.
    #[must_use]
    pub fn into_parts(self) -> (SpanningStructure, Segmentation) {
        (self.spanning, self.segmentation)
    }
}

/// Segments pixel graphs with a fixed threshold and spanning strategy.
///
/// Build one with [`crate::SegmenterBuilder`].
///
/// # Examples
/// ```
/// use pixelforest_core::{Edge, GridShape, SegmenterBuilder};
///
/// let segmenter = SegmenterBuilder::new()
///     .with_threshold(0.5)
///     .build()
///     .expect("builder configuration is valid");
/// let shape = GridShape::new(2, 2).expect("non-empty grid");
/// let edges = [
///     Edge::new(0, 1, 0.1),
///     Edge::new(0, 2, 0.9),
///     Edge::new(1, 3, 0.7),
///     Edge::new(2, 3, 0.2),
/// ];
/// let outcome = segmenter.run(shape, &edges).expect("graph matches grid");
/// assert_eq!(outcome.segmentation().to_rows(), vec![vec![0, 0], vec![1, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct Segmenter {
    threshold: f64,
    strategy: SpanningStrategy,
}

impl Segmenter {
    pub(crate) fn new(threshold: f64, strategy: SpanningStrategy) -> Self {
        Self {
            threshold,
            strategy,
        }
    }

    /// Returns the cut threshold.
    #[must_use]
    #[rustfmt::skip]
    pub fn threshold(&self) -> f64 { self.threshold }

    /// Returns the spanning strategy.
    #[must_use]
    #[rustfmt::skip]
    pub fn strategy(&self) -> SpanningStrategy { self.strategy }

    /// Builds the spanning structure for `edges` and cuts it into segments.
    ///
    /// Vertex ids must follow the grid's row-major numbering.
    ///
    /// # Errors
    /// Returns [`crate::GraphError`] when an edge is invalid for the grid's
    /// vertex count or when the arborescence root lies outside the grid.
    #[instrument(
        name = "segmenter.run",
        err,
        skip(self, shape, edges),
        fields(
            rows = shape.rows(),
            cols = shape.cols(),
            edges = edges.len(),
            threshold = self.threshold,
            strategy = ?self.strategy,
        ),
    )]
    pub fn run(&self, shape: GridShape, edges: &[Edge]) -> Result<SegmentationOutcome> {
        let vertex_count = shape.vertex_count();
        let spanning = match self.strategy {
            SpanningStrategy::MinimumSpanningForest => {
                SpanningStructure::Forest(kruskal(vertex_count, edges)?)
            }
            SpanningStrategy::Arborescence { root } => {
                SpanningStructure::Arborescence(min_arborescence(vertex_count, root, edges)?)
            }
        };
        let segmentation = segment(&spanning, self.threshold, shape)?;
        info!(
            segments = segmentation.segment_count(),
            spanning_weight = spanning.total_weight(),
            "segmentation run complete"
        );
        Ok(SegmentationOutcome {
            spanning,
            segmentation,
        })
    }
}
