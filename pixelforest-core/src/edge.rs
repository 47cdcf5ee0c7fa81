//! Weighted edges supplied by the graph construction stage.
//!
//! Edges arrive as `(source, target, weight)` triples with vertex ids already
//! assigned as `row * cols + col`. The spanning algorithms read them through a
//! shared slice and never reorder or mutate the caller's list.

use crate::error::{GraphError, Result};

/// A weighted edge between two pixel vertices.
///
/// Kruskal treats the edge as undirected. The arborescence solver reads it as
/// `source -> target`, the cost of entering `target` from `source`.
///
/// # Examples
/// ```
/// use pixelforest_core::Edge;
///
/// let edge = Edge::new(0, 1, 0.25);
/// assert_eq!(edge.source(), 0);
/// assert_eq!(edge.target(), 1);
/// assert_eq!(edge.weight(), 0.25);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge from the collaborator's `(source, target, weight)` triple.
    ///
    /// A weight of `-0.0` is stored as `0.0` so equal weights always order
    /// as ties.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight: if weight == 0.0 { 0.0 } else { weight },
        }
    }

    /// Returns the source vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the target vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl From<(usize, usize, f64)> for Edge {
    fn from((source, target, weight): (usize, usize, f64)) -> Self {
        Self::new(source, target, weight)
    }
}

/// Checks that `vertex_count` is positive and that every edge references a
/// vertex in range with a finite, non-negative weight.
///
/// # Errors
/// Returns [`GraphError::EmptyGraph`] when `vertex_count == 0`,
/// [`GraphError::VertexOutOfRange`] for an endpoint `>= vertex_count`,
/// [`GraphError::NonFiniteWeight`] for NaN or infinite weights and
/// [`GraphError::NegativeWeight`] for weights below zero. The first offending
/// edge in input order is reported.
///
/// # Examples
/// ```
/// use pixelforest_core::{Edge, GraphError, validate_edges};
///
/// assert!(validate_edges(2, &[Edge::new(0, 1, 1.0)]).is_ok());
/// assert_eq!(
///     validate_edges(2, &[Edge::new(0, 2, 1.0)]),
///     Err(GraphError::VertexOutOfRange { vertex: 2, vertex_count: 2 }),
/// );
/// ```
pub fn validate_edges(vertex_count: usize, edges: &[Edge]) -> Result<()> {
    if vertex_count == 0 {
        return Err(GraphError::EmptyGraph);
    }
    edges
        .iter()
        .try_for_each(|edge| validate_edge(edge, vertex_count))
}

fn validate_edge(edge: &Edge, vertex_count: usize) -> Result<()> {
    for vertex in [edge.source, edge.target] {
        if vertex >= vertex_count {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        }
    }
    if !edge.weight.is_finite() {
        return Err(GraphError::NonFiniteWeight {
            from: edge.source,
            to: edge.target,
        });
    }
    if edge.weight < 0.0 {
        return Err(GraphError::NegativeWeight {
            from: edge.source,
            to: edge.target,
        });
    }
    Ok(())
}

/// Sums edge weights.
pub(crate) fn total_weight<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> f64 {
    edges.into_iter().map(Edge::weight).sum()
}
