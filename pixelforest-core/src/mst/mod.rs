//! Minimum spanning forest construction (Kruskal).
//!
//! Edges are stably sorted by weight so equal-weight ties resolve by their
//! position in the caller's list, then merged through a fresh
//! [`DisjointSet`]. Disconnected input yields a forest with one tree per
//! connected component; that is a normal outcome, not an error.

use tracing::{debug, instrument};

use crate::{
    DisjointSet,
    edge::{Edge, total_weight, validate_edges},
    error::Result,
};

/// The output of a minimum spanning forest computation.
///
/// Edges are listed in the order Kruskal accepted them, which is
/// non-decreasing weight. When the input graph is connected the forest is a
/// minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    vertex_count: usize,
    edges: Vec<Edge>,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the forest edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of vertices the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of connected components (trees) in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the summed weight of the forest edges.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        total_weight(&self.edges)
    }

    /// Consumes the forest, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

/// Computes a minimum spanning forest using Kruskal's algorithm.
///
/// Edge direction is ignored and self-loops never join the forest. The
/// caller's slice is left untouched; sorting happens on a private copy.
/// Processing stops as soon as `vertex_count - 1` edges are accepted.
///
/// # Errors
/// Returns [`crate::GraphError`] when `vertex_count == 0`, when an edge
/// references a vertex `>= vertex_count`, or when a weight is negative or
/// non-finite.
///
/// # Examples
/// ```
/// use pixelforest_core::{Edge, kruskal};
///
/// let edges = [Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.0), Edge::new(0, 2, 3.0)];
/// let forest = kruskal(3, &edges).expect("valid graph");
/// assert!(forest.is_tree());
/// assert_eq!(forest.edges(), &edges[..2]);
/// ```
#[instrument(name = "mst.kruskal", err, skip(edges), fields(edges = edges.len()))]
pub fn kruskal(vertex_count: usize, edges: &[Edge]) -> Result<SpanningForest> {
    validate_edges(vertex_count, edges)?;
    Ok(kruskal_validated(vertex_count, edges))
}

/// Kruskal over edges already checked by [`validate_edges`].
pub(crate) fn kruskal_validated(vertex_count: usize, edges: &[Edge]) -> SpanningForest {
    let mut sorted = edges.to_vec();
    // `sort_by` is stable: equal weights keep their input order.
    sorted.sort_by(|left, right| left.weight().total_cmp(&right.weight()));

    let tree_size = vertex_count.saturating_sub(1);
    let mut sets = DisjointSet::new(vertex_count);
    let mut forest = Vec::with_capacity(tree_size.min(sorted.len()));

    for edge in sorted {
        if forest.len() == tree_size {
            break;
        }
        if sets.union(edge.source(), edge.target()) {
            forest.push(edge);
        }
    }

    debug!(
        accepted = forest.len(),
        components = sets.component_count(),
        "minimum spanning forest complete"
    );
    #[cfg(feature = "metrics")]
    metrics::counter!("pixelforest_kruskal_edges_accepted").increment(forest.len() as u64);

    SpanningForest {
        vertex_count,
        edges: forest,
        component_count: sets.component_count(),
    }
}

#[cfg(test)]
mod property;
