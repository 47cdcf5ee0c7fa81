//! One level of the Chu-Liu/Edmonds contraction hierarchy.
//!
//! A level owns its active slots and its edge list by value. Contracting the
//! level's cycles consumes it and builds the next level, so only one edge list
//! is alive at a time. Every level edge remembers the input edge it descends
//! from, and each contraction keeps just its members' greedy input edges,
//! which is all expansion needs.

use std::{cmp::Ordering, collections::VecDeque};

use super::registry::VertexRegistry;
use crate::Edge;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct LevelEdge {
    pub(super) source: usize,
    pub(super) target: usize,
    pub(super) weight: f64,
    /// Index of the caller's edge this one was derived from.
    pub(super) original: usize,
}

#[derive(Clone, Debug)]
pub(super) struct Level {
    pub(super) active: Vec<usize>,
    pub(super) edges: Vec<LevelEdge>,
}

/// A cycle collapsed into a synthetic slot.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct Contraction {
    pub(super) synthetic: usize,
    /// Each member slot with the input edge it chose greedily.
    pub(super) members: Vec<(usize, usize)>,
}

impl Level {
    /// Builds the first level over the caller's edges.
    ///
    /// Self-loops and edges entering the root can never be part of an
    /// arborescence. Edges leaving vertices the root cannot reach are dropped
    /// as well, so unreachable vertices end up with no incoming candidate.
    pub(super) fn initial(vertex_count: usize, root: usize, edges: &[Edge]) -> Self {
        let reachable = reachable_from(vertex_count, root, edges);
        let edges = edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| {
                !edge.is_loop() && edge.target() != root && reachable[edge.source()]
            })
            .map(|(original, edge)| LevelEdge {
                source: edge.source(),
                target: edge.target(),
                weight: edge.weight(),
                original,
            })
            .collect();
        Self {
            active: (0..vertex_count).collect(),
            edges,
        }
    }
}

fn reachable_from(vertex_count: usize, root: usize, edges: &[Edge]) -> Vec<bool> {
    let mut outgoing = vec![Vec::new(); vertex_count];
    for edge in edges {
        outgoing[edge.source()].push(edge.target());
    }

    let mut reachable = vec![false; vertex_count];
    reachable[root] = true;
    let mut queue = VecDeque::from([root]);
    while let Some(vertex) = queue.pop_front() {
        for &next in &outgoing[vertex] {
            if !reachable[next] {
                reachable[next] = true;
                queue.push_back(next);
            }
        }
    }
    reachable
}

/// Picks the cheapest incoming edge for every slot that has one.
///
/// Ties go to the lowest source slot, then to the earliest edge in the
/// level's list. The result is indexed by slot and holds edge indices.
pub(super) fn select_incoming(slot_count: usize, edges: &[LevelEdge]) -> Vec<Option<usize>> {
    let mut chosen: Vec<Option<usize>> = vec![None; slot_count];
    for (index, edge) in edges.iter().enumerate() {
        let slot = &mut chosen[edge.target];
        let better = match *slot {
            None => true,
            Some(current) => {
                let best = &edges[current];
                match edge.weight.total_cmp(&best.weight) {
                    Ordering::Less => true,
                    Ordering::Equal => edge.source < best.source,
                    Ordering::Greater => false,
                }
            }
        };
        if better {
            *slot = Some(index);
        }
    }
    chosen
}

/// Follows chosen parents from each active slot and returns every cycle.
///
/// Slots are marked with the walk that first reached them, so a chain already
/// resolved by an earlier walk is never walked again. Meeting a slot marked
/// by the current walk closes a cycle: the path suffix starting there. Each
/// slot has one chosen parent, so the cycles found are disjoint.
pub(super) fn find_cycles(
    active: &[usize],
    edges: &[LevelEdge],
    chosen: &[Option<usize>],
) -> Vec<Vec<usize>> {
    const UNSEEN: usize = usize::MAX;
    let mut walk_of = vec![UNSEEN; chosen.len()];
    let mut depth = vec![0; chosen.len()];
    let mut cycles = Vec::new();

    for (walk, &start) in active.iter().enumerate() {
        if walk_of[start] != UNSEEN {
            continue;
        }
        let mut path = Vec::new();
        let mut current = start;
        loop {
            if walk_of[current] == walk {
                cycles.push(path.split_off(depth[current]));
                break;
            }
            if walk_of[current] != UNSEEN {
                break;
            }
            walk_of[current] = walk;
            depth[current] = path.len();
            path.push(current);
            match chosen[current] {
                Some(index) => current = edges[index].source,
                None => break,
            }
        }
    }
    cycles
}

/// Collapses each of `cycles` into a fresh synthetic slot and returns the
/// next level along with one [`Contraction`] per cycle.
///
/// Edges inside a cycle disappear. An edge entering member `v` costs its
/// weight minus the weight of `v`'s chosen edge, which is what breaking the
/// cycle at `v` saves. Edges leaving a cycle keep their weight and take its
/// synthetic slot as source. Parallel candidates are kept as they are.
pub(super) fn contract(
    level: Level,
    chosen: &[Option<usize>],
    cycles: &[Vec<usize>],
    registry: &mut VertexRegistry,
) -> (Level, Vec<Contraction>) {
    let contractions: Vec<Contraction> = cycles
        .iter()
        .map(|cycle| Contraction {
            synthetic: registry.allocate_synthetic(cycle),
            members: cycle
                .iter()
                .filter_map(|&member| {
                    chosen[member].map(|index| (member, level.edges[index].original))
                })
                .collect(),
        })
        .collect();

    let mut entry_cost = vec![0.0; registry.len()];
    for cycle in cycles {
        for &member in cycle {
            if let Some(index) = chosen[member] {
                entry_cost[member] = level.edges[index].weight;
            }
        }
    }

    let edges = level
        .edges
        .into_iter()
        .filter_map(|edge| {
            let source = registry.absorbed_by(edge.source).unwrap_or(edge.source);
            match registry.absorbed_by(edge.target) {
                Some(synthetic) if synthetic == source => None,
                Some(synthetic) => Some(LevelEdge {
                    source,
                    target: synthetic,
                    weight: edge.weight - entry_cost[edge.target],
                    original: edge.original,
                }),
                None => Some(LevelEdge { source, ..edge }),
            }
        })
        .collect();

    let active = level
        .active
        .into_iter()
        .filter(|&slot| registry.absorbed_by(slot).is_none())
        .chain(contractions.iter().map(|contraction| contraction.synthetic))
        .collect();

    (Level { active, edges }, contractions)
}

/// Resolves the input edge entering every slot, unwinding `contractions`
/// from the last one made.
///
/// A synthetic slot's entering edge still targets an original vertex; the
/// member of its cycle containing that vertex is where the cycle is broken,
/// and every other member keeps its greedy edge. Edges leaving a synthetic
/// slot already name their real source through the input edge.
pub(super) fn expand(
    level: &Level,
    chosen: &[Option<usize>],
    contractions: &[Contraction],
    registry: &VertexRegistry,
    input: &[Edge],
) -> Vec<Option<usize>> {
    let mut entering: Vec<Option<usize>> = chosen
        .iter()
        .map(|choice| choice.map(|index| level.edges[index].original))
        .collect();
    entering.resize(registry.len(), None);

    for contraction in contractions.iter().rev() {
        let Some(entry) = entering[contraction.synthetic] else {
            continue;
        };
        let broken = registry.member_of(input[entry].target(), contraction.synthetic);
        for &(member, greedy) in &contraction.members {
            entering[member] = Some(if Some(member) == broken { entry } else { greedy });
        }
    }
    entering
}
