// src/simulation/selection.rs

use crate::core::QubitId;
use crate::operations::GateKind;

/// Progress of a CNOT selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CnotStage {
    /// The next qubit clicked becomes the control.
    AwaitingControl,
    /// Control chosen; the next distinct qubit clicked becomes the target.
    AwaitingTarget(QubitId),
}

/// Which gate the host has armed, and for CNOT how far the two-step
/// selection has progressed.
///
/// H and X stay selected across repeated applications. CNOT is consumed by
/// one completed application and drops back to [`GateSelection::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateSelection {
    #[default]
    Idle,
    Hadamard,
    PauliX,
    Cnot(CnotStage),
}

impl GateSelection {
    /// Fresh selection of `gate` with no pending control.
    pub fn armed(gate: GateKind) -> Self {
        match gate {
            GateKind::Hadamard => GateSelection::Hadamard,
            GateKind::PauliX => GateSelection::PauliX,
            GateKind::Cnot => GateSelection::Cnot(CnotStage::AwaitingControl),
        }
    }

    /// Pressing a gate button: the same gate again returns to idle, any
    /// other gate is adopted. Either way a pending control is dropped.
    pub fn toggle(self, gate: GateKind) -> Self {
        if self.selected_gate() == Some(gate) {
            GateSelection::Idle
        } else {
            GateSelection::armed(gate)
        }
    }

    /// Selection after `select(None)` or `select(Some(gate))`.
    pub fn select(self, gate: Option<GateKind>) -> Self {
        match gate {
            None => GateSelection::Idle,
            Some(gate) => self.toggle(gate),
        }
    }

    pub fn selected_gate(&self) -> Option<GateKind> {
        match self {
            GateSelection::Idle => None,
            GateSelection::Hadamard => Some(GateKind::Hadamard),
            GateSelection::PauliX => Some(GateKind::PauliX),
            GateSelection::Cnot(_) => Some(GateKind::Cnot),
        }
    }

    /// Control qubit of a half-finished CNOT.
    pub fn pending_control(&self) -> Option<QubitId> {
        match self {
            GateSelection::Cnot(CnotStage::AwaitingTarget(control)) => Some(*control),
            _ => None,
        }
    }

    /// Whether clicking `id` would do anything under this selection.
    pub fn is_valid_target(&self, id: QubitId) -> bool {
        match self {
            GateSelection::Idle => false,
            GateSelection::Cnot(CnotStage::AwaitingTarget(control)) => *control != id,
            _ => true,
        }
    }

    /// Context help shown next to the gate palette.
    pub fn prompt(&self) -> String {
        match self {
            GateSelection::Idle => "Select a gate above to begin.".to_string(),
            GateSelection::Cnot(CnotStage::AwaitingControl) => "Select CONTROL qubit.".to_string(),
            GateSelection::Cnot(CnotStage::AwaitingTarget(_)) => "Select TARGET qubit.".to_string(),
            GateSelection::Hadamard | GateSelection::PauliX => {
                let id = self.selected_gate().map(GateKind::id).unwrap_or_default();
                format!("Click any qubit to apply {} gate.", id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_gate_returns_to_idle() {
        let s = GateSelection::Idle.toggle(GateKind::Hadamard);
        assert_eq!(s, GateSelection::Hadamard);
        assert_eq!(s.toggle(GateKind::Hadamard), GateSelection::Idle);
    }

    #[test]
    fn test_toggle_clears_pending_control() {
        let pending = GateSelection::Cnot(CnotStage::AwaitingTarget(QubitId(2)));
        assert_eq!(pending.toggle(GateKind::Cnot), GateSelection::Idle);
        assert_eq!(pending.toggle(GateKind::PauliX), GateSelection::PauliX);
        assert_eq!(pending.select(None), GateSelection::Idle);
    }

    #[test]
    fn test_switching_gate_adopts_new_one() {
        let s = GateSelection::PauliX.select(Some(GateKind::Cnot));
        assert_eq!(s, GateSelection::Cnot(CnotStage::AwaitingControl));
        assert_eq!(s.pending_control(), None);
    }

    #[test]
    fn test_valid_targets() {
        assert!(!GateSelection::Idle.is_valid_target(QubitId(1)));
        assert!(GateSelection::Hadamard.is_valid_target(QubitId(1)));
        let pending = GateSelection::Cnot(CnotStage::AwaitingTarget(QubitId(1)));
        assert!(!pending.is_valid_target(QubitId(1)));
        assert!(pending.is_valid_target(QubitId(2)));
    }

    #[test]
    fn test_prompts() {
        assert_eq!(GateSelection::Idle.prompt(), "Select a gate above to begin.");
        assert_eq!(GateSelection::PauliX.prompt(), "Click any qubit to apply X gate.");
        assert_eq!(GateSelection::armed(GateKind::Cnot).prompt(), "Select CONTROL qubit.");
        assert_eq!(
            GateSelection::Cnot(CnotStage::AwaitingTarget(QubitId(1))).prompt(),
            "Select TARGET qubit."
        );
    }
}
