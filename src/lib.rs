// src/lib.rs

//! `qlab` - A toy quantum circuit laboratory
//!
//! An educational simulator: each qubit carries a probability of reading 1
//! and a superposition flag instead of complex amplitudes. Hosts select H, X
//! or CNOT gates, click qubits, and measure the register; entangled qubits
//! always measure alike.

pub mod core;
pub mod operations;
pub mod entanglement;
pub mod events;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{GroupId, LabConfig, LabError, Qubit, QubitId, QubitRegister, Reading};
pub use operations::{GateInfo, GateKind, GATES};
pub use entanglement::{entanglement_pairs, EntanglementTracker};
pub use events::EventLog;
pub use simulation::{
    CircuitSession, CnotStage, GateOutcome, GateSelection, MeasurementResult, MeasurementSampler,
    PendingMeasurement,
};
pub use validation::validate_register;

// Example 1: Superposition and a toggling Hadamard
/// ```
/// use qlab::{CircuitSession, GateKind, LabConfig, QubitId};
///
/// let mut lab = CircuitSession::new(LabConfig::seeded(1)).unwrap();
/// lab.select_gate(Some(GateKind::Hadamard));
///
/// lab.apply_gate(QubitId(1));
/// let q1 = lab.register().get(QubitId(1)).unwrap();
/// assert!(q1.is_superposition());
/// assert_eq!(q1.probability_one(), 0.5);
///
/// // H again collapses back to |0⟩ in this model.
/// lab.apply_gate(QubitId(1));
/// assert_eq!(lab.register().get(QubitId(1)).unwrap().probability_one(), 0.0);
/// assert_eq!(lab.log().latest(), Some("Applied H on Q1: Collapsed to |0⟩ basis."));
/// ```
#[doc(hidden)]
const _: () = ();

// Example 2: Entangle two qubits and measure them together
/// ```
/// use qlab::{CircuitSession, GateKind, GateOutcome, LabConfig, QubitId};
///
/// let config = LabConfig { initial_qubits: 2, ..LabConfig::seeded(42) };
/// let mut lab = CircuitSession::new(config).unwrap();
///
/// lab.select_gate(Some(GateKind::Hadamard));
/// lab.apply_gate(QubitId(1));
///
/// lab.select_gate(Some(GateKind::Cnot));
/// assert_eq!(lab.apply_gate(QubitId(1)), GateOutcome::ControlSelected(QubitId(1)));
/// lab.apply_gate(QubitId(2));
/// assert_eq!(lab.entanglement_pairs(), vec![(0, 1)]);
///
/// for _ in 0..20 {
///     let result = lab.measure_now().unwrap();
///     assert_eq!(result.bit(QubitId(1)), result.bit(QubitId(2)));
/// }
/// ```
#[doc(hidden)]
const _: () = ();
