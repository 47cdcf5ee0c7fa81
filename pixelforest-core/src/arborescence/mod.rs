//! Minimum spanning arborescence (Chu-Liu/Edmonds).
//!
//! The solver iterates over contraction levels rather than recursing:
//!
//! 1. Every active vertex except the root greedily takes its cheapest
//!    incoming edge.
//! 2. Parent pointers are walked looking for cycles. With none, the greedy
//!    choice is optimal for the level.
//! 3. Otherwise each cycle collapses into a fresh synthetic vertex, entering
//!    edges are re-priced by the cycle edge they would replace, and the next
//!    level replaces the current one.
//! 4. Once a level is acyclic, contractions are unwound newest first and each
//!    synthetic vertex's entering edge decides where its cycle is broken.
//!
//! Only the current level's edges are held; a contraction keeps just its
//! members and their greedy edges, so memory stays `O(V + E)`. Nothing is
//! shared between solves, so independent inputs can be solved concurrently. Vertices the root
//! cannot reach are left out of the result rather than reported as errors.

mod level;
mod registry;

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::{
    edge::{Edge, validate_edges},
    error::{GraphError, Result},
};

use self::{
    level::{Contraction, Level, contract, expand, find_cycles, select_incoming},
    registry::VertexRegistry,
};

/// A minimum spanning arborescence over the vertices reachable from a root.
///
/// Every entry maps a child to its parent and the weight of the edge
/// `parent -> child`. Parent chains always end at the root without
/// revisiting a vertex, and the root itself never has an entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Arborescence {
    root: usize,
    parents: Vec<Option<(usize, f64)>>,
    contractions: usize,
}

impl Arborescence {
    /// Returns the root vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn root(&self) -> usize { self.root }

    /// Returns the number of vertices in the input graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.parents.len()
    }

    /// Returns the parent of `child` and the weight of the edge entering it.
    ///
    /// `None` for the root, for unreachable vertices and for ids outside the
    /// graph.
    #[must_use]
    pub fn parent(&self, child: usize) -> Option<(usize, f64)> {
        self.parents.get(child).copied().flatten()
    }

    /// Iterates `(child, parent, weight)` in ascending child order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(child, entry)| entry.map(|(parent, weight)| (child, parent, weight)))
    }

    /// Returns the number of child entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.iter().flatten().count()
    }

    /// Returns `true` when no vertex besides the root was reached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when every vertex is reachable from the root.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.len() + 1 == self.parents.len()
    }

    /// Returns the non-root vertices left out because the root cannot reach
    /// them.
    #[must_use]
    pub fn unreached(&self) -> Vec<usize> {
        self.parents
            .iter()
            .enumerate()
            .filter(|&(vertex, entry)| vertex != self.root && entry.is_none())
            .map(|(vertex, _)| vertex)
            .collect()
    }

    /// Returns the summed weight of the chosen edges.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.iter().map(|(_, _, weight)| weight).sum()
    }

    /// Returns how many cycles were contracted while solving.
    #[must_use]
    #[rustfmt::skip]
    pub fn contractions(&self) -> usize { self.contractions }

    /// Returns the chosen edges as `parent -> child` [`Edge`]s.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        self.iter()
            .map(|(child, parent, weight)| Edge::new(parent, child, weight))
            .collect()
    }

    /// Converts the result into a `child -> (parent, weight)` map.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<usize, (usize, f64)> {
        self.iter()
            .map(|(child, parent, weight)| (child, (parent, weight)))
            .collect()
    }
}

/// Computes a minimum spanning arborescence rooted at `root`.
///
/// Each edge `source -> target` is the cost of entering `target` from
/// `source`. Equal-weight candidates are resolved towards the lowest source
/// id, then towards the earliest edge in the input. Vertices the root cannot
/// reach are omitted; see [`Arborescence::unreached`].
///
/// # Errors
/// Returns [`GraphError`] when `vertex_count == 0`, when `root` or an edge
/// endpoint is `>= vertex_count`, or when a weight is negative or
/// non-finite.
///
/// # Examples
/// ```
/// use pixelforest_core::{Edge, min_arborescence};
///
/// let edges = [
///     Edge::new(0, 1, 1.0),
///     Edge::new(1, 2, 1.0),
///     Edge::new(2, 0, 1.0),
///     Edge::new(3, 0, 5.0),
/// ];
/// let tree = min_arborescence(4, 3, &edges).expect("valid graph");
/// assert_eq!(tree.parent(0), Some((3, 5.0)));
/// assert_eq!(tree.parent(1), Some((0, 1.0)));
/// assert_eq!(tree.parent(2), Some((1, 1.0)));
/// assert_eq!(tree.contractions(), 1);
/// ```
#[instrument(name = "arborescence.solve", err, skip(edges), fields(edges = edges.len()))]
pub fn min_arborescence(vertex_count: usize, root: usize, edges: &[Edge]) -> Result<Arborescence> {
    validate_edges(vertex_count, edges)?;
    if root >= vertex_count {
        return Err(GraphError::RootOutOfRange { root, vertex_count });
    }
    Ok(solve(vertex_count, root, edges))
}

/// Chu-Liu/Edmonds over edges already checked by [`validate_edges`].
pub(crate) fn solve(vertex_count: usize, root: usize, edges: &[Edge]) -> Arborescence {
    let mut registry = VertexRegistry::new(vertex_count);
    let mut level = Level::initial(vertex_count, root, edges);
    let mut history: Vec<Contraction> = Vec::new();
    let mut depth = 0usize;

    let chosen = loop {
        let chosen = select_incoming(registry.len(), &level.edges);
        let cycles = find_cycles(&level.active, &level.edges, &chosen);
        if cycles.is_empty() {
            break chosen;
        }
        let (upper, collapsed) = contract(level, &chosen, &cycles, &mut registry);
        level = upper;
        for contraction in &collapsed {
            debug!(
                depth,
                cycle_len = contraction.members.len(),
                synthetic = contraction.synthetic,
                remaining = level.active.len(),
                "contracted cycle"
            );
        }
        history.extend(collapsed);
        depth += 1;
    };

    let entering = expand(&level, &chosen, &history, &registry, edges);
    let parents: Vec<Option<(usize, f64)>> = entering
        .iter()
        .take(vertex_count)
        .map(|entry| entry.map(|index| (edges[index].source(), edges[index].weight())))
        .collect();

    let contractions = registry.synthetic_count();
    debug!(
        contractions,
        contracted_vertices = registry.contracted_slots(),
        reached = parents.iter().flatten().count(),
        "arborescence complete"
    );
    #[cfg(feature = "metrics")]
    metrics::counter!("pixelforest_arborescence_contractions").increment(contractions as u64);

    Arborescence {
        root,
        parents,
        contractions,
    }
}

#[cfg(test)]
mod property;
