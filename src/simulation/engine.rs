// src/simulation/engine.rs
use crate::core::constants::{FLIP_MIDPOINT, SUPERPOSITION_PROBABILITY};
use crate::core::{Qubit, QubitId, QubitRegister, Reading};
use crate::entanglement::EntanglementTracker;
use tracing::debug;

/// Applies gates to the register.
///
/// The engine is the only writer of the [`QubitRegister`]; everything else
/// gets a shared reference. Each method either fully applies its gate and
/// returns the log line, or leaves the register untouched.
/// (Internal visibility)
#[derive(Debug)]
pub(crate) struct GateEngine {
    register: QubitRegister,
    tracker: EntanglementTracker,
}

/// Classical bit flip: anything reading above one half becomes 0, the rest 1.
fn flipped(probability_one: f64) -> f64 {
    if probability_one > FLIP_MIDPOINT { 0.0 } else { 1.0 }
}

fn flip(qubit: &mut Qubit) {
    qubit.set_classical(flipped(qubit.probability_one()));
}

impl GateEngine {
    /// Engine over a fresh register of `count` qubits.
    pub(crate) fn init(count: usize) -> Self {
        Self {
            register: QubitRegister::new(count),
            tracker: EntanglementTracker::new(),
        }
    }

    /// Replaces the register. Group ids keep counting so none is reused.
    pub(crate) fn reinit(&mut self, count: usize) {
        self.register = QubitRegister::new(count);
    }

    pub(crate) fn register(&self) -> &QubitRegister {
        &self.register
    }

    #[cfg(test)]
    pub(crate) fn register_mut(&mut self) -> &mut QubitRegister {
        &mut self.register
    }

    /// H toggles between classical |0⟩ and superposition.
    ///
    /// A superposed qubit collapses back to |0⟩ (phase is ignored); any
    /// classical qubit, whatever its value, enters superposition.
    pub(crate) fn apply_hadamard(&mut self, target: QubitId) -> Option<String> {
        let qubit = self.register.get_mut(target)?;
        if qubit.is_superposition() {
            qubit.set_classical(0.0);
            Some(format!("Applied H on {}: Collapsed to |0⟩ basis.", target))
        } else {
            qubit.set_superposed(SUPERPOSITION_PROBABILITY);
            Some(format!("Applied H on {}: Entered Superposition |+⟩.", target))
        }
    }

    /// X flips a classical qubit and leaves a superposed one unchanged.
    pub(crate) fn apply_pauli_x(&mut self, target: QubitId) -> Option<String> {
        let qubit = self.register.get_mut(target)?;
        if qubit.is_superposition() {
            Some(format!("Applied X on {}: Phase flip (Visual unchanged).", target))
        } else {
            flip(qubit);
            let bit = u8::from(qubit.probability_one() > FLIP_MIDPOINT);
            Some(format!("Applied X on {}: Flipped to |{}⟩.", target, bit))
        }
    }

    /// Completes a CNOT once both control and target are known.
    ///
    /// Outer `None` means the ids were unusable and nothing happened. The
    /// inner value is the log line, absent only for an indeterminate
    /// control which changes nothing.
    pub(crate) fn apply_cnot(&mut self, control: QubitId, target: QubitId) -> Option<Option<String>> {
        if control == target || !self.register.contains(target) {
            return None;
        }
        let reading = self.register.get(control)?.reading();
        let prefix = format!("CNOT (C:{}, T:{})", control, target);

        let message = match reading {
            Reading::Zero => Some(format!("{}: Control is |0⟩. No change.", prefix)),
            Reading::One => {
                let qubit = self.register.get_mut(target)?;
                if qubit.is_superposition() {
                    Some(format!("{}: Target in Superposition. Phase Shift.", prefix))
                } else {
                    flip(qubit);
                    Some(format!("{}: Control is |1⟩. Flipped Target.", prefix))
                }
            }
            Reading::Superposed => {
                self.tracker.entangle(&mut self.register, control, target)?;
                // Entanglement drags the target into a correlated superposition.
                self.register.get_mut(target)?.set_superposed(SUPERPOSITION_PROBABILITY);
                Some(format!("{}: Entanglement Created!", prefix))
            }
            Reading::Indeterminate => {
                debug!(%control, %target, "CNOT control indeterminate, no effect");
                None
            }
        };
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(id: u32) -> QubitId {
        QubitId(id)
    }

    #[test]
    fn test_hadamard_toggle() {
        let mut engine = GateEngine::init(1);
        let msg = engine.apply_hadamard(qid(1)).unwrap();
        assert_eq!(msg, "Applied H on Q1: Entered Superposition |+⟩.");
        let q = engine.register().get(qid(1)).unwrap();
        assert!(q.is_superposition());
        assert_eq!(q.probability_one(), 0.5);

        let msg = engine.apply_hadamard(qid(1)).unwrap();
        assert_eq!(msg, "Applied H on Q1: Collapsed to |0⟩ basis.");
        let q = engine.register().get(qid(1)).unwrap();
        assert!(!q.is_superposition());
        assert_eq!(q.probability_one(), 0.0);
    }

    #[test]
    fn test_hadamard_on_one_enters_superposition() {
        let mut engine = GateEngine::init(1);
        engine.apply_pauli_x(qid(1));
        engine.apply_hadamard(qid(1));
        let q = engine.register().get(qid(1)).unwrap();
        assert!(q.is_superposition());
        assert_eq!(q.probability_one(), 0.5);
    }

    #[test]
    fn test_pauli_x_flip_and_superposition_noop() {
        let mut engine = GateEngine::init(1);
        assert_eq!(engine.apply_pauli_x(qid(1)).unwrap(), "Applied X on Q1: Flipped to |1⟩.");
        assert_eq!(engine.register().get(qid(1)).unwrap().probability_one(), 1.0);
        assert_eq!(engine.apply_pauli_x(qid(1)).unwrap(), "Applied X on Q1: Flipped to |0⟩.");
        assert_eq!(engine.register().get(qid(1)).unwrap().probability_one(), 0.0);

        engine.apply_hadamard(qid(1));
        let before = engine.register().clone();
        let msg = engine.apply_pauli_x(qid(1)).unwrap();
        assert_eq!(msg, "Applied X on Q1: Phase flip (Visual unchanged).");
        assert_eq!(engine.register(), &before);
    }

    #[test]
    fn test_unknown_target_is_noop() {
        let mut engine = GateEngine::init(2);
        assert!(engine.apply_hadamard(qid(3)).is_none());
        assert!(engine.apply_pauli_x(qid(0)).is_none());
        assert!(engine.apply_cnot(qid(1), qid(3)).is_none());
        assert_eq!(engine.register(), &QubitRegister::new(2));
    }

    #[test]
    fn test_cnot_control_zero_changes_nothing() {
        let mut engine = GateEngine::init(2);
        let msg = engine.apply_cnot(qid(1), qid(2)).unwrap().unwrap();
        assert_eq!(msg, "CNOT (C:Q1, T:Q2): Control is |0⟩. No change.");
        assert_eq!(engine.register(), &QubitRegister::new(2));
    }

    #[test]
    fn test_cnot_control_one_flips_target() {
        let mut engine = GateEngine::init(2);
        engine.apply_pauli_x(qid(1));
        let msg = engine.apply_cnot(qid(1), qid(2)).unwrap().unwrap();
        assert_eq!(msg, "CNOT (C:Q1, T:Q2): Control is |1⟩. Flipped Target.");
        assert_eq!(engine.register().get(qid(2)).unwrap().probability_one(), 1.0);

        engine.apply_cnot(qid(1), qid(2));
        assert_eq!(engine.register().get(qid(2)).unwrap().probability_one(), 0.0);
    }

    #[test]
    fn test_cnot_control_one_superposed_target_phase_shift() {
        let mut engine = GateEngine::init(2);
        engine.apply_pauli_x(qid(1));
        engine.apply_hadamard(qid(2));
        let before = engine.register().clone();
        let msg = engine.apply_cnot(qid(1), qid(2)).unwrap().unwrap();
        assert_eq!(msg, "CNOT (C:Q1, T:Q2): Target in Superposition. Phase Shift.");
        assert_eq!(engine.register(), &before);
    }

    #[test]
    fn test_cnot_superposed_control_entangles() {
        let mut engine = GateEngine::init(3);
        engine.apply_hadamard(qid(2));
        engine.apply_pauli_x(qid(3));
        let msg = engine.apply_cnot(qid(2), qid(3)).unwrap().unwrap();
        assert_eq!(msg, "CNOT (C:Q2, T:Q3): Entanglement Created!");

        let reg = engine.register();
        let control = reg.get(qid(2)).unwrap();
        let target = reg.get(qid(3)).unwrap();
        assert!(control.entangled_group().is_some());
        assert_eq!(control.entangled_group(), target.entangled_group());
        assert!(target.is_superposition());
        assert_eq!(target.probability_one(), 0.5);
        assert!(reg.get(qid(1)).unwrap().entangled_group().is_none());
    }

    #[test]
    fn test_cnot_indeterminate_control_has_no_log() {
        let mut engine = GateEngine::init(2);
        *engine.register_mut().get_mut(qid(1)).unwrap() = Qubit::with_state(qid(1), 0.5, false);
        let before = engine.register().clone();
        assert_eq!(engine.apply_cnot(qid(1), qid(2)), Some(None));
        assert_eq!(engine.register(), &before);
    }

    #[test]
    fn test_reinit_keeps_group_counter() {
        let mut engine = GateEngine::init(2);
        engine.apply_hadamard(qid(1));
        engine.apply_cnot(qid(1), qid(2));
        let first = engine.register().get(qid(1)).unwrap().entangled_group();

        engine.reinit(2);
        assert_eq!(engine.register(), &QubitRegister::new(2));
        engine.apply_hadamard(qid(1));
        engine.apply_cnot(qid(1), qid(2));
        let second = engine.register().get(qid(1)).unwrap().entangled_group();
        assert!(first.is_some() && second.is_some());
        assert_ne!(first, second);
    }
}
