// src/core/qubit.rs

use super::constants::{READS_ONE_ABOVE, READS_ZERO_BELOW};
use super::error::{GroupId, QubitId};
use std::fmt;

/// How a qubit reads under the lab's tolerance band.
///
/// The band is deliberately loose: anything below 0.1 counts as |0⟩ and
/// anything above 0.9 as |1⟩, so gate logic never compares floats exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reading {
    /// Classical and reads as |0⟩.
    Zero,
    /// Classical and reads as |1⟩.
    One,
    /// Flagged as being in superposition.
    Superposed,
    /// Classical but inside the band; no gate in the lab produces this.
    Indeterminate,
}

/// One qubit of the register.
///
/// The model tracks a single probability of reading 1 and a superposition
/// flag, not complex amplitudes. `phase` is carried for display only.
#[derive(Debug, Clone, PartialEq)]
pub struct Qubit {
    id: QubitId,
    probability_one: f64,
    is_superposition: bool,
    /// Degrees in [0, 360). No gate reads or writes it.
    phase: f64,
    entangled_group: Option<GroupId>,
}

impl Qubit {
    /// A qubit in the classical |0⟩ state.
    pub fn ground(id: QubitId) -> Self {
        Self {
            id,
            probability_one: 0.0,
            is_superposition: false,
            phase: 0.0,
            entangled_group: None,
        }
    }

    /// Position of this qubit in its register.
    pub fn id(&self) -> QubitId {
        self.id
    }

    /// Probability that measurement yields 1.
    pub fn probability_one(&self) -> f64 {
        self.probability_one
    }

    pub fn is_superposition(&self) -> bool {
        self.is_superposition
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Group this qubit is entangled in, if any.
    pub fn entangled_group(&self) -> Option<GroupId> {
        self.entangled_group
    }

    pub fn is_entangled(&self) -> bool {
        self.entangled_group.is_some()
    }

    /// Classifies the qubit with the 0.1 / 0.9 tolerance band.
    pub fn reading(&self) -> Reading {
        if self.is_superposition {
            Reading::Superposed
        } else if self.probability_one < READS_ZERO_BELOW {
            Reading::Zero
        } else if self.probability_one > READS_ONE_ABOVE {
            Reading::One
        } else {
            Reading::Indeterminate
        }
    }

    pub(crate) fn set_classical(&mut self, probability_one: f64) {
        self.is_superposition = false;
        self.probability_one = probability_one.clamp(0.0, 1.0);
    }

    pub(crate) fn set_superposed(&mut self, probability_one: f64) {
        self.is_superposition = true;
        self.probability_one = probability_one.clamp(0.0, 1.0);
    }

    pub(crate) fn set_entangled_group(&mut self, group: Option<GroupId>) {
        self.entangled_group = group;
    }

    #[cfg(test)]
    pub(crate) fn with_state(id: QubitId, probability_one: f64, is_superposition: bool) -> Self {
        Self { probability_one, is_superposition, ..Self::ground(id) }
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reading() {
            Reading::Zero => write!(f, "{}: |0⟩", self.id)?,
            Reading::One => write!(f, "{}: |1⟩", self.id)?,
            Reading::Superposed => write!(f, "{}: |+⟩ (P1={:.2})", self.id, self.probability_one)?,
            Reading::Indeterminate => write!(f, "{}: P1={:.2}", self.id, self.probability_one)?,
        }
        if let Some(group) = self.entangled_group {
            write!(f, " [{}]", group)?;
        }
        Ok(())
    }
}
