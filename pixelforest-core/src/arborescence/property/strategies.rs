//! Digraph generators for arborescence properties.

use proptest::prelude::*;
use rand::{Rng, rngs::SmallRng, seq::SliceRandom};
use test_strategy::Arbitrary;

use crate::Edge;

use super::oracle::BRUTE_FORCE_MAX_VERTICES;

/// Largest edge list drawn for the exhaustive comparison.
const SMALL_MAX_EDGES: usize = 12;

/// Shape of a seeded digraph fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum DigraphShape {
    /// A planted arborescence plus random extra edges.
    PlantedWithNoise,
    /// A planted arborescence under cheap rings that force contractions.
    CycleHeavy,
    /// Sparse random edges; parts of the graph are usually unreachable.
    Sparse,
}

/// A generated rooted digraph plus what the generator knows about it.
#[derive(Clone, Debug)]
pub(super) struct RootedFixture {
    pub vertex_count: usize,
    pub root: usize,
    pub edges: Vec<Edge>,
    /// Weight of an arborescence spanning every vertex, when one was planted.
    pub planted_weight: Option<f64>,
    pub shape: DigraphShape,
}

/// Tiny rooted multigraphs with quarter-step weights.
pub(super) fn small_digraph_strategy() -> impl Strategy<Value = (usize, usize, Vec<Edge>)> {
    (1usize..=BRUTE_FORCE_MAX_VERTICES).prop_flat_map(|vertex_count| {
        let edge = (0..vertex_count, 0..vertex_count, 0u8..8).prop_map(
            |(source, target, step)| Edge::new(source, target, f64::from(step) * 0.25),
        );
        (
            Just(vertex_count),
            0..vertex_count,
            prop::collection::vec(edge, 0..=SMALL_MAX_EDGES),
        )
    })
}

/// Builds a seeded fixture of the requested shape.
pub(super) fn generate_fixture(shape: DigraphShape, rng: &mut SmallRng) -> RootedFixture {
    let vertex_count = rng.gen_range(8..=40);
    let root = rng.gen_range(0..vertex_count);
    let (mut edges, planted_weight) = match shape {
        DigraphShape::PlantedWithNoise => {
            let (mut edges, weight) = planted_arborescence(vertex_count, root, rng, 1.0..20.0);
            edges.extend(random_edges(vertex_count, vertex_count * 2, rng, 0.0..20.0));
            (edges, Some(weight))
        }
        DigraphShape::CycleHeavy => {
            let (mut edges, weight) = planted_arborescence(vertex_count, root, rng, 10.0..20.0);
            for _ in 0..rng.gen_range(1..=4) {
                edges.extend(random_ring(vertex_count, rng));
            }
            (edges, Some(weight))
        }
        DigraphShape::Sparse => (random_edges(vertex_count, vertex_count, rng, 0.0..5.0), None),
    };
    edges.shuffle(rng);
    RootedFixture {
        vertex_count,
        root,
        edges,
        planted_weight,
        shape,
    }
}

/// Attaches every vertex to a random earlier vertex of a shuffled order that
/// starts at the root.
fn planted_arborescence(
    vertex_count: usize,
    root: usize,
    rng: &mut SmallRng,
    weights: std::ops::Range<f64>,
) -> (Vec<Edge>, f64) {
    let mut order: Vec<usize> = (0..vertex_count).filter(|&vertex| vertex != root).collect();
    order.shuffle(rng);
    order.insert(0, root);

    let edges: Vec<Edge> = (1..order.len())
        .map(|position| {
            let parent = order[rng.gen_range(0..position)];
            Edge::new(parent, order[position], rng.gen_range(weights.clone()))
        })
        .collect();
    let weight = edges.iter().map(Edge::weight).sum();
    (edges, weight)
}

fn random_edges(
    vertex_count: usize,
    count: usize,
    rng: &mut SmallRng,
    weights: std::ops::Range<f64>,
) -> Vec<Edge> {
    (0..count)
        .map(|_| {
            Edge::new(
                rng.gen_range(0..vertex_count),
                rng.gen_range(0..vertex_count),
                rng.gen_range(weights.clone()),
            )
        })
        .collect()
}

fn random_ring(vertex_count: usize, rng: &mut SmallRng) -> Vec<Edge> {
    let len = rng.gen_range(2..=vertex_count.min(6));
    let members: Vec<usize> = rand::seq::index::sample(rng, vertex_count, len).into_vec();
    (0..len)
        .map(|index| {
            Edge::new(
                members[index],
                members[(index + 1) % len],
                rng.gen_range(0.0..1.0),
            )
        })
        .collect()
}
