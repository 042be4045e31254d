//! Identifiers and the lab error type

use std::fmt;
use thiserror::Error;

/// Position of a qubit in the register.
/// Ids are 1-indexed and stable for the lifetime of a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub u32);

impl QubitId {
    /// Zero-based position of this id inside a register.
    pub(crate) fn index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

/// Identifier shared by every qubit of one entanglement group.
/// Allocated by the [`EntanglementTracker`](crate::entanglement::EntanglementTracker),
/// never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LabError>;

/// Errors raised by the lab.
///
/// Interactive misclicks (unknown qubit, CNOT onto its own control, a second
/// measurement while one is running) are not errors: they are reported as
/// silent no-op values by the session. Only configuration problems and broken
/// register invariants surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabError {
    /// Requested qubit count lies outside the supported range.
    #[error("Qubit count {requested} out of range: expected {min}..={max}")]
    QubitCountOutOfRange {
        /// Count asked for by the caller.
        requested: usize,
        /// Smallest supported count.
        min: usize,
        /// Largest supported count.
        max: usize,
    },

    /// Gate identifier not present in the catalog.
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),

    /// A configuration field holds an unusable value.
    #[error("Invalid config '{field}': {reason}")]
    InvalidConfig {
        /// Offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The circuit cannot be reinitialised while a measurement is running.
    #[error("A measurement is in flight")]
    MeasurementInFlight,

    /// The register no longer satisfies one of its invariants.
    #[error("Register invariant violated: {message}")]
    InvariantViolation {
        /// Description of the broken invariant.
        message: String,
    },
}

impl LabError {
    /// Create an invalid config error.
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an invariant violation error.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation { message: message.into() }
    }
}
