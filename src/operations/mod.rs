// src/operations/mod.rs

//! The gate catalog.
//!
//! A static table of the gates the lab supports together with the display
//! metadata a host shows next to each gate button. Nothing here changes at
//! runtime; gate semantics live in the simulation engine.

use crate::core::LabError;
use std::fmt;
use std::str::FromStr;

/// A gate the lab can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Toggles a qubit between classical |0⟩ and superposition.
    Hadamard,
    /// Bit flip on a classical qubit; a visual no-op on a superposition.
    PauliX,
    /// Two-step controlled flip that entangles when the control is superposed.
    Cnot,
}

impl GateKind {
    /// Every gate, in catalog order.
    pub const ALL: [GateKind; 3] = [GateKind::Hadamard, GateKind::PauliX, GateKind::Cnot];

    /// Short identifier used in logs and by hosts (`"H"`, `"X"`, `"CNOT"`).
    pub fn id(self) -> &'static str {
        match self {
            GateKind::Hadamard => "H",
            GateKind::PauliX => "X",
            GateKind::Cnot => "CNOT",
        }
    }

    /// Catalog entry for this gate.
    pub fn info(self) -> &'static GateInfo {
        match self {
            GateKind::Hadamard => &GATES[0],
            GateKind::PauliX => &GATES[1],
            GateKind::Cnot => &GATES[2],
        }
    }

    /// Number of qubits the gate acts on.
    pub fn qubits_required(self) -> usize {
        match self {
            GateKind::Hadamard | GateKind::PauliX => 1,
            GateKind::Cnot => 2,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GateKind {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateKind::ALL
            .into_iter()
            .find(|g| g.id() == s)
            .ok_or_else(|| LabError::UnknownGate(s.to_string()))
    }
}

/// Display metadata for one gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateInfo {
    pub kind: GateKind,
    pub name: &'static str,
    pub description: &'static str,
}

/// The catalog, in the order hosts list the gates.
pub static GATES: [GateInfo; 3] = [
    GateInfo {
        kind: GateKind::Hadamard,
        name: "Hadamard",
        description: "Creates Superposition. Maps |0⟩ to |+⟩ and |1⟩ to |-⟩.",
    },
    GateInfo {
        kind: GateKind::PauliX,
        name: "Pauli-X",
        description: "Bit Flip. Acts like a classical NOT gate. |0⟩ → |1⟩.",
    },
    GateInfo {
        kind: GateKind::Cnot,
        name: "CNOT",
        description: "Entangles qubits. Flips Target if Control is |1⟩.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_consistent() {
        for gate in GateKind::ALL {
            assert_eq!(gate.info().kind, gate);
        }
        assert_eq!(GATES.len(), GateKind::ALL.len());
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!("H".parse::<GateKind>(), Ok(GateKind::Hadamard));
        assert_eq!("X".parse::<GateKind>(), Ok(GateKind::PauliX));
        assert_eq!("CNOT".parse::<GateKind>(), Ok(GateKind::Cnot));
        assert_eq!("cnot".parse::<GateKind>(), Err(LabError::UnknownGate("cnot".to_string())));
    }

    #[test]
    fn test_arity() {
        assert_eq!(GateKind::Hadamard.qubits_required(), 1);
        assert_eq!(GateKind::Cnot.qubits_required(), 2);
    }
}
