//! Lab configuration.

use super::constants::{DEFAULT_QUBITS, LOG_CAPACITY, MAX_QUBITS, MEASUREMENT_DELAY_MS, MIN_QUBITS};
use super::error::{LabError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for a [`CircuitSession`](crate::simulation::CircuitSession).
///
/// Missing fields fall back to [`LabConfig::default`] when deserialising.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Register size of the first circuit.
    pub initial_qubits: usize,
    /// Number of event log entries kept.
    pub log_capacity: usize,
    /// Delay between requesting a measurement and publishing its outcome.
    pub measurement_delay_ms: u64,
    /// Fixed seed for the measurement generator. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            initial_qubits: DEFAULT_QUBITS,
            log_capacity: LOG_CAPACITY,
            measurement_delay_ms: MEASUREMENT_DELAY_MS,
            seed: None,
        }
    }
}

impl LabConfig {
    /// Default settings with a fixed measurement seed.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), ..Default::default() }
    }

    /// Measurement display delay as a `Duration`.
    pub fn measurement_delay(&self) -> Duration {
        Duration::from_millis(self.measurement_delay_ms)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_QUBITS..=MAX_QUBITS).contains(&self.initial_qubits) {
            return Err(LabError::QubitCountOutOfRange {
                requested: self.initial_qubits,
                min: MIN_QUBITS,
                max: MAX_QUBITS,
            });
        }
        if self.log_capacity == 0 {
            return Err(LabError::invalid_config("log_capacity", "must be at least 1"));
        }
        Ok(())
    }
}
