//! Reference oracles for spanning forest weights.
//!
//! Neither oracle shares code with the implementation under test: small
//! graphs are solved by exhaustive subset enumeration and larger ones by
//! Prim's algorithm run from every unvisited vertex.

use crate::{Edge, test_utils::find_root};

/// Largest edge count the exhaustive oracle accepts.
pub(super) const BRUTE_FORCE_MAX_EDGES: usize = 14;

/// Minimum total weight over all spanning forests, by exhaustive search.
///
/// Enumerates every edge subset of size `vertex_count - components` and keeps
/// the lightest acyclic one.
pub(super) fn brute_force_forest_weight(
    vertex_count: usize,
    edges: &[Edge],
    components: usize,
) -> f64 {
    assert!(edges.len() <= BRUTE_FORCE_MAX_EDGES, "graph too large for brute force");
    let wanted = vertex_count - components;
    let mut best = f64::INFINITY;

    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != wanted {
            continue;
        }
        let mut parent: Vec<usize> = (0..vertex_count).collect();
        let mut weight = 0.0;
        let mut acyclic = true;
        for (index, edge) in edges.iter().enumerate() {
            if mask & (1 << index) == 0 {
                continue;
            }
            let left = find_root(&mut parent, edge.source());
            let right = find_root(&mut parent, edge.target());
            if left == right {
                acyclic = false;
                break;
            }
            parent[right] = left;
            weight += edge.weight();
        }
        if acyclic {
            best = best.min(weight);
        }
    }
    best
}

/// Minimum spanning forest weight computed with Prim's algorithm.
pub(super) fn prim_forest_weight(vertex_count: usize, edges: &[Edge]) -> f64 {
    let mut adjacency = vec![Vec::new(); vertex_count];
    for edge in edges.iter().filter(|edge| !edge.is_loop()) {
        adjacency[edge.source()].push((edge.target(), edge.weight()));
        adjacency[edge.target()].push((edge.source(), edge.weight()));
    }

    let mut in_tree = vec![false; vertex_count];
    let mut best = vec![f64::INFINITY; vertex_count];
    let mut total = 0.0;

    for start in 0..vertex_count {
        if in_tree[start] {
            continue;
        }
        best[start] = 0.0;
        loop {
            let next = (0..vertex_count)
                .filter(|&vertex| !in_tree[vertex] && best[vertex].is_finite())
                .min_by(|&left, &right| best[left].total_cmp(&best[right]));
            let Some(vertex) = next else {
                break;
            };
            in_tree[vertex] = true;
            total += best[vertex];
            for &(neighbour, weight) in &adjacency[vertex] {
                if !in_tree[neighbour] && weight < best[neighbour] {
                    best[neighbour] = weight;
                }
            }
        }
    }
    total
}
