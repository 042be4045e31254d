//! Thresholds and limits of the lab model.

/// Smallest register the lab builds.
pub const MIN_QUBITS: usize = 1;
/// Largest register the lab builds.
pub const MAX_QUBITS: usize = 5;
/// Register size used when no count is configured.
pub const DEFAULT_QUBITS: usize = 3;

/// A classical qubit with `probability_one` below this reads as |0⟩.
pub const READS_ZERO_BELOW: f64 = 0.1;
/// A classical qubit with `probability_one` above this reads as |1⟩.
pub const READS_ONE_ABOVE: f64 = 0.9;
/// Bit flips treat anything above this as a definite 1.
pub const FLIP_MIDPOINT: f64 = 0.5;
/// Probability carried by a qubit in superposition.
pub const SUPERPOSITION_PROBABILITY: f64 = 0.5;

/// Number of entries kept by the event log.
pub const LOG_CAPACITY: usize = 5;
/// Display delay between requesting and publishing a measurement.
pub const MEASUREMENT_DELAY_MS: u64 = 800;
