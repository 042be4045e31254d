// src/entanglement/mod.rs

//! Tracks which qubits share an entanglement group.
//!
//! The lab only ever entangles pairs: a CNOT with a superposed control puts
//! control and target into a fresh group. Groups are identified by a
//! session-local counter so two groups created in quick succession can never
//! collide.

use crate::core::{GroupId, QubitId, QubitRegister};
use std::collections::HashSet;
use tracing::debug;

/// Allocates group ids and derives pairs from a register.
#[derive(Debug, Default)]
pub struct EntanglementTracker {
    /// Last id handed out; 0 means none yet.
    last_group: u64,
}

impl EntanglementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_group(&mut self) -> GroupId {
        self.last_group += 1;
        GroupId(self.last_group)
    }

    /// Puts `control` and `target` into a new group.
    ///
    /// A qubit belongs to at most one group, so any previous membership is
    /// replaced. A former partner left alone in its old group is released.
    /// Returns `None` without touching the register when the ids are equal
    /// or unknown.
    pub(crate) fn entangle(
        &mut self,
        register: &mut QubitRegister,
        control: QubitId,
        target: QubitId,
    ) -> Option<GroupId> {
        let (c, t) = register.pair_mut(control, target)?;
        let previous = [c.entangled_group(), t.entangled_group()];

        let group = self.next_group();
        c.set_entangled_group(Some(group));
        t.set_entangled_group(Some(group));
        debug!(%control, %target, %group, "entanglement group allocated");

        for old in previous.into_iter().flatten() {
            release_if_orphaned(register, old);
        }
        Some(group)
    }
}

/// Clears `group` from its last member once fewer than two remain.
fn release_if_orphaned(register: &mut QubitRegister, group: GroupId) {
    let members = register
        .qubits()
        .iter()
        .filter(|q| q.entangled_group() == Some(group))
        .count();
    if members == 1 {
        for q in register.qubits_mut() {
            if q.entangled_group() == Some(group) {
                debug!(qubit = %q.id(), %group, "released orphaned group");
                q.set_entangled_group(None);
            }
        }
    }
}

/// Derives the entangled pairs of a register as 0-based positions.
///
/// Qubits are scanned in id order. The first qubit carrying an unseen group
/// is paired with the first other qubit of that group, and the group is not
/// reported again. Pairs come out in order of first appearance.
pub fn entanglement_pairs(register: &QubitRegister) -> Vec<(usize, usize)> {
    let qubits = register.qubits();
    let mut pairs = Vec::new();
    let mut seen: HashSet<GroupId> = HashSet::new();

    for (i, q1) in qubits.iter().enumerate() {
        let Some(group) = q1.entangled_group() else { continue };
        if seen.contains(&group) {
            continue;
        }
        let partner = qubits
            .iter()
            .enumerate()
            .find(|(j, q2)| i != *j && q2.entangled_group() == Some(group))
            .map(|(j, _)| j);
        if let Some(j) = partner {
            pairs.push((i, j));
            seen.insert(group);
        }
    }
    pairs
}

/// The qubit sharing a group with `id`, if any.
pub fn partner_of(register: &QubitRegister, id: QubitId) -> Option<QubitId> {
    let group = register.get(id)?.entangled_group()?;
    register
        .qubits()
        .iter()
        .find(|q| q.id() != id && q.entangled_group() == Some(group))
        .map(|q| q.id())
}
