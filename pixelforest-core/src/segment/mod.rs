//! Threshold segmentation of a spanning structure.
//!
//! Candidate edges no heavier than the threshold are merged through a fresh
//! [`DisjointSet`]; heavier edges are cut. Labels are then handed out by
//! scanning pixels in row-major order, so the first pixel of each segment
//! fixes its label and labels form the range `0..segment_count`.

use tracing::{debug, instrument};

use crate::{
    DisjointSet,
    arborescence::Arborescence,
    edge::Edge,
    error::{GraphError, Result},
    grid::GridShape,
    mst::SpanningForest,
};

/// A spanning structure whose edges can be cut into segments.
///
/// Both [`SpanningForest`] and [`Arborescence`] implement this, so either
/// algorithm can feed [`segment`].
pub trait CandidateEdges {
    /// Number of vertices the edges range over.
    fn vertex_count(&self) -> usize;

    /// The edges eligible for merging. Direction is irrelevant.
    fn candidates(&self) -> impl Iterator<Item = Edge> + '_;
}

impl CandidateEdges for SpanningForest {
    fn vertex_count(&self) -> usize {
        SpanningForest::vertex_count(self)
    }

    fn candidates(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges().iter().copied()
    }
}

/// Yields one `parent -> child` edge per reached vertex.
impl CandidateEdges for Arborescence {
    fn vertex_count(&self) -> usize {
        Arborescence::vertex_count(self)
    }

    fn candidates(&self) -> impl Iterator<Item = Edge> + '_ {
        self.iter()
            .map(|(child, parent, weight)| Edge::new(parent, child, weight))
    }
}

/// A dense label per pixel.
///
/// # Examples
/// ```
/// use pixelforest_core::{Edge, GridShape, kruskal, segment};
///
/// let shape = GridShape::new(1, 3).expect("non-empty grid");
/// let forest = kruskal(3, &[Edge::new(0, 1, 0.1), Edge::new(1, 2, 0.9)])
///     .expect("valid graph");
/// let segmentation = segment(&forest, 0.5, shape).expect("grid matches");
/// assert_eq!(segmentation.labels(), &[0, 0, 1]);
/// assert_eq!(segmentation.segment_count(), 2);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Segmentation {
    shape: GridShape,
    labels: Vec<usize>,
    segment_count: usize,
}

impl Segmentation {
    /// Returns the grid the labels are laid out on.
    #[must_use]
    #[rustfmt::skip]
    pub fn shape(&self) -> GridShape { self.shape }

    /// Returns the number of distinct segments.
    #[must_use]
    #[rustfmt::skip]
    pub fn segment_count(&self) -> usize { self.segment_count }

    /// Returns the label at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn label(&self, row: usize, col: usize) -> Option<usize> {
        if self.shape.contains(row, col) {
            self.labels.get(self.shape.vertex(row, col)).copied()
        } else {
            None
        }
    }

    /// Returns every label in row-major order.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Returns the labels as one vector per grid row.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.labels
            .chunks(self.shape.cols())
            .map(<[usize]>::to_vec)
            .collect()
    }

    /// Returns the pixel count of each segment, indexed by label.
    #[must_use]
    pub fn segment_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.segment_count];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }

    /// Consumes the segmentation, returning the row-major labels.
    #[must_use]
    pub fn into_labels(self) -> Vec<usize> {
        self.labels
    }
}

/// Cuts every candidate heavier than `threshold` and labels what remains.
///
/// An edge of weight exactly `threshold` is kept. A threshold of
/// `f64::INFINITY` keeps every candidate, and one below every weight leaves
/// each pixel in its own segment.
///
/// # Errors
/// Returns [`GraphError::InvalidThreshold`] for a NaN threshold and
/// [`GraphError::GridMismatch`] when `shape` does not cover exactly the
/// source's vertices.
#[instrument(
    name = "segment.label",
    err,
    skip(source, shape),
    fields(rows = shape.rows(), cols = shape.cols())
)]
pub fn segment<C>(source: &C, threshold: f64, shape: GridShape) -> Result<Segmentation>
where
    C: CandidateEdges + ?Sized,
{
    if threshold.is_nan() {
        return Err(GraphError::InvalidThreshold);
    }
    shape.ensure_covers(source.vertex_count())?;
    Ok(label_validated(source, threshold, shape))
}

pub(crate) fn label_validated<C>(source: &C, threshold: f64, shape: GridShape) -> Segmentation
where
    C: CandidateEdges + ?Sized,
{
    let vertex_count = shape.vertex_count();
    let mut sets = DisjointSet::new(vertex_count);
    let (mut unioned, mut cut) = (0usize, 0usize);
    for edge in source.candidates() {
        if edge.weight() > threshold {
            cut += 1;
        } else if sets.union(edge.source(), edge.target()) {
            unioned += 1;
        }
    }

    let mut root_label: Vec<Option<usize>> = vec![None; vertex_count];
    let mut segment_count = 0;
    let labels = (0..vertex_count)
        .map(|vertex| {
            let root = sets.find(vertex);
            *root_label[root].get_or_insert_with(|| {
                segment_count += 1;
                segment_count - 1
            })
        })
        .collect();

    debug!(segments = segment_count, unioned, cut, "segmentation complete");
    #[cfg(feature = "metrics")]
    metrics::counter!("pixelforest_segments_emitted").increment(segment_count as u64);

    Segmentation {
        shape,
        labels,
        segment_count,
    }
}
