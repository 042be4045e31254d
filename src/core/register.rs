// src/core/register.rs

use super::error::QubitId;
use super::qubit::Qubit;
use std::fmt;

/// The ordered qubit array of one circuit.
///
/// Holds exactly one [`Qubit`] per id in `1..=len`, in id order. It carries
/// no gate logic: the engine mutates it through crate-visible accessors and
/// every other component reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct QubitRegister {
    qubits: Vec<Qubit>,
}

impl QubitRegister {
    /// Creates `count` qubits, all in classical |0⟩ without entanglement.
    /// Range checking is the session's job.
    pub fn new(count: usize) -> Self {
        let qubits = (1..=count as u32).map(|id| Qubit::ground(QubitId(id))).collect();
        Self { qubits }
    }

    /// Read-only view of the qubits in id order.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    pub(crate) fn qubits_mut(&mut self) -> &mut [Qubit] {
        &mut self.qubits
    }

    /// Looks up a qubit by id. `None` when the id is outside the register.
    pub fn get(&self, id: QubitId) -> Option<&Qubit> {
        self.qubits.get(id.index()?)
    }

    pub(crate) fn get_mut(&mut self, id: QubitId) -> Option<&mut Qubit> {
        self.qubits.get_mut(id.index()?)
    }

    /// Mutable access to two distinct qubits at once.
    pub(crate) fn pair_mut(&mut self, a: QubitId, b: QubitId) -> Option<(&mut Qubit, &mut Qubit)> {
        let (ia, ib) = (a.index()?, b.index()?);
        if ia == ib || ia >= self.qubits.len() || ib >= self.qubits.len() {
            return None;
        }
        if ia < ib {
            let (lo, hi) = self.qubits.split_at_mut(ib);
            Some((&mut lo[ia], &mut hi[0]))
        } else {
            let (lo, hi) = self.qubits.split_at_mut(ia);
            Some((&mut hi[0], &mut lo[ib]))
        }
    }

    /// Whether `id` names a qubit of this register.
    pub fn contains(&self, id: QubitId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.qubits.iter().map(Qubit::id)
    }

    pub fn len(&self) -> usize {
        self.qubits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty()
    }
}

impl fmt::Display for QubitRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "qlab::QubitRegister[{} qubits]", self.qubits.len())?;
        for q in &self.qubits {
            writeln!(f, "  {}", q)?;
        }
        Ok(())
    }
}
