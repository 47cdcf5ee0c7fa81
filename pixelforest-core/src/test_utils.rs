//! Shared test utilities for `pixelforest-core`.

use pixelforest_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::Edge;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `PIXELFOREST_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds edges from `(source, target, weight)` triples.
pub(crate) fn edges(triples: &[(usize, usize, f64)]) -> Vec<Edge> {
    triples.iter().copied().map(Edge::from).collect()
}

/// Path-compressing find over a bare parent array, independent of
/// [`crate::DisjointSet`] so oracles do not share code with the subject.
pub(crate) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Undirected connected components of `edges`, labelled by smallest member.
pub(crate) fn component_labels(vertex_count: usize, edges: &[Edge]) -> Vec<usize> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for edge in edges {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left != right {
            let (keep, merge) = (left.min(right), left.max(right));
            parent[merge] = keep;
        }
    }
    (0..vertex_count)
        .map(|vertex| find_root(&mut parent, vertex))
        .collect()
}

/// Number of undirected connected components of `edges`.
pub(crate) fn component_count(vertex_count: usize, edges: &[Edge]) -> usize {
    let mut roots = component_labels(vertex_count, edges);
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}

/// The 3x3 scenario grid: 8-neighbour edges (right, down-left, down,
/// down-right per pixel) whose sub-0.1 weights form the segments
/// `{0, 1, 3, 4}`, `{2}`, `{5, 7, 8}` and `{6}`.
pub(crate) fn scenario_grid_edges() -> Vec<Edge> {
    edges(&[
        (0, 1, 0.02),
        (0, 3, 0.03),
        (0, 4, 0.05),
        (1, 2, 0.50),
        (1, 3, 0.06),
        (1, 4, 0.04),
        (1, 5, 0.60),
        (2, 4, 0.70),
        (2, 5, 0.45),
        (3, 4, 0.01),
        (3, 6, 0.80),
        (3, 7, 0.55),
        (4, 5, 0.35),
        (4, 6, 0.90),
        (4, 7, 0.40),
        (4, 8, 0.65),
        (5, 7, 0.08),
        (5, 8, 0.02),
        (6, 7, 0.30),
        (7, 8, 0.03),
    ])
}

/// Doubles every edge into both directions, as the directed grid builder does.
pub(crate) fn both_directions(edges: &[Edge]) -> Vec<Edge> {
    edges
        .iter()
        .flat_map(|edge| {
            [
                *edge,
                Edge::new(edge.target(), edge.source(), edge.weight()),
            ]
        })
        .collect()
}
