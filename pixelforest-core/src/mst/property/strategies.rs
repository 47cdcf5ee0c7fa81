//! Graph generators for spanning forest properties.

use proptest::prelude::*;
use rand::{Rng, rngs::SmallRng};
use test_strategy::Arbitrary;

use crate::Edge;

use super::oracle::BRUTE_FORCE_MAX_EDGES;

/// Weight distribution used when generating larger graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Continuous weights, ties only by coincidence.
    Unique,
    /// Weights drawn from three values, so most edges tie.
    ManyIdentical,
    /// Several components with no edges between them.
    Disconnected,
}

/// A generated graph plus the context needed to diagnose failures.
#[derive(Clone, Debug)]
pub(super) struct ForestFixture {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
    pub distribution: WeightDistribution,
}

/// Small multigraphs with quarter-step weights, sized for exhaustive search.
pub(super) fn small_graph_strategy() -> impl Strategy<Value = (usize, Vec<Edge>)> {
    (1usize..=8).prop_flat_map(|vertex_count| {
        let edge = (0..vertex_count, 0..vertex_count, 0u8..6).prop_map(
            |(source, target, step)| Edge::new(source, target, f64::from(step) * 0.25),
        );
        (
            Just(vertex_count),
            prop::collection::vec(edge, 0..=BRUTE_FORCE_MAX_EDGES),
        )
    })
}

/// Builds a seeded fixture for the requested distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> ForestFixture {
    let vertex_count = rng.gen_range(8..=48);
    let edges = match distribution {
        WeightDistribution::Unique => {
            random_edges(0, vertex_count, 0.3, rng, |r| r.gen_range(0.0..100.0))
        }
        WeightDistribution::ManyIdentical => random_edges(0, vertex_count, 0.5, rng, |r| {
            f64::from(r.gen_range(1u8..=3))
        }),
        WeightDistribution::Disconnected => {
            let split = vertex_count / 3;
            let mut edges = random_edges(0, split, 0.6, rng, |r| r.gen_range(0.0..10.0));
            edges.extend(random_edges(split, vertex_count, 0.6, rng, |r| {
                r.gen_range(0.0..10.0)
            }));
            edges
        }
    };
    ForestFixture {
        vertex_count,
        edges,
        distribution,
    }
}

fn random_edges(
    first: usize,
    end: usize,
    probability: f64,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    for source in first..end {
        for target in (source + 1)..end {
            if rng.gen_bool(probability) {
                let value = weight(rng);
                edges.push(Edge::new(source, target, value));
            }
        }
    }
    edges
}
