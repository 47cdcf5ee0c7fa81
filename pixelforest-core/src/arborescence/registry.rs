//! Arena of vertex slots shared by every contraction level.
//!
//! Slots `0..vertex_count` are the original vertices. Each contraction appends
//! one synthetic slot, so a synthetic id is always larger than every id
//! allocated before it and ids are never reused within a solve. Every slot
//! records the synthetic slot that absorbed it, which lets expansion climb
//! from an original vertex to the cycle member containing it.

#[derive(Debug)]
pub(super) struct VertexRegistry {
    absorbed_by: Vec<Option<usize>>,
    cycle_lens: Vec<usize>,
}

impl VertexRegistry {
    pub(super) fn new(vertex_count: usize) -> Self {
        Self {
            absorbed_by: vec![None; vertex_count],
            cycle_lens: Vec::new(),
        }
    }

    pub(super) fn len(&self) -> usize {
        self.absorbed_by.len()
    }

    /// Allocates the slot standing in for the cycle `members`.
    pub(super) fn allocate_synthetic(&mut self, members: &[usize]) -> usize {
        let slot = self.absorbed_by.len();
        self.absorbed_by.push(None);
        self.cycle_lens.push(members.len());
        for &member in members {
            self.absorbed_by[member] = Some(slot);
        }
        slot
    }

    /// Returns the synthetic slot that absorbed `slot`, if any.
    pub(super) fn absorbed_by(&self, slot: usize) -> Option<usize> {
        self.absorbed_by.get(slot).copied().flatten()
    }

    /// Returns the direct member of `synthetic` whose contraction history
    /// contains `vertex`.
    pub(super) fn member_of(&self, vertex: usize, synthetic: usize) -> Option<usize> {
        let mut slot = vertex;
        loop {
            match self.absorbed_by(slot) {
                Some(parent) if parent == synthetic => return Some(slot),
                Some(parent) => slot = parent,
                None => return None,
            }
        }
    }

    pub(super) fn synthetic_count(&self) -> usize {
        self.cycle_lens.len()
    }

    /// Total cycle length over every contraction, counting nested cycles at
    /// each level they were collapsed.
    pub(super) fn contracted_slots(&self) -> usize {
        self.cycle_lens.iter().sum()
    }
}
