//! Exhaustive reference solver for tiny rooted digraphs.

use std::collections::VecDeque;

use crate::Edge;

/// Largest vertex count the exhaustive oracle accepts.
pub(super) const BRUTE_FORCE_MAX_VERTICES: usize = 6;

/// Vertices reachable from `root` along directed edges, root included.
pub(super) fn reachable(vertex_count: usize, root: usize, edges: &[Edge]) -> Vec<bool> {
    let mut seen = vec![false; vertex_count];
    seen[root] = true;
    let mut queue = VecDeque::from([root]);
    while let Some(vertex) = queue.pop_front() {
        for edge in edges.iter().filter(|edge| edge.source() == vertex) {
            if !seen[edge.target()] {
                seen[edge.target()] = true;
                queue.push_back(edge.target());
            }
        }
    }
    seen
}

/// Minimum total weight of an arborescence spanning every reachable vertex.
///
/// Tries every combination of one incoming edge per reachable non-root
/// vertex and keeps the lightest one whose parent chains all end at the root.
pub(super) fn brute_force_arborescence_weight(
    vertex_count: usize,
    root: usize,
    edges: &[Edge],
) -> f64 {
    assert!(
        vertex_count <= BRUTE_FORCE_MAX_VERTICES,
        "graph too large for brute force"
    );
    let seen = reachable(vertex_count, root, edges);
    let children: Vec<usize> = (0..vertex_count)
        .filter(|&vertex| vertex != root && seen[vertex])
        .collect();
    let candidates: Vec<Vec<&Edge>> = children
        .iter()
        .map(|&child| {
            edges
                .iter()
                .filter(|edge| edge.target() == child && edge.source() != child)
                .collect()
        })
        .collect();

    let mut best = f64::INFINITY;
    let mut choice = vec![0usize; children.len()];
    loop {
        let mut parent = vec![None; vertex_count];
        let mut weight = 0.0;
        for (slot, &child) in children.iter().enumerate() {
            let edge = candidates[slot][choice[slot]];
            parent[child] = Some(edge.source());
            weight += edge.weight();
        }
        if children.iter().all(|&child| reaches_root(&parent, child, root)) {
            best = best.min(weight);
        }

        // Odometer increment over the per-child candidate lists.
        let mut position = 0;
        loop {
            if position == children.len() {
                return best;
            }
            choice[position] += 1;
            if choice[position] < candidates[position].len() {
                break;
            }
            choice[position] = 0;
            position += 1;
        }
    }
}

fn reaches_root(parent: &[Option<usize>], start: usize, root: usize) -> bool {
    let mut current = start;
    for _ in 0..parent.len() {
        if current == root {
            return true;
        }
        match parent[current] {
            Some(next) => current = next,
            None => return false,
        }
    }
    current == root
}

#[cfg(test)]
mod tests {
    use crate::test_utils::edges;

    use super::*;

    #[test]
    fn oracle_prefers_breaking_the_cycle_cheaply() {
        let input = edges(&[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (3, 0, 5.0)]);
        assert!((brute_force_arborescence_weight(4, 3, &input) - 7.0).abs() < 1e-12);
        assert!((brute_force_arborescence_weight(4, 0, &input) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn lone_root_costs_nothing() {
        assert_eq!(brute_force_arborescence_weight(3, 1, &[]), 0.0);
        assert_eq!(reachable(3, 1, &[]), vec![false, true, false]);
    }
}
