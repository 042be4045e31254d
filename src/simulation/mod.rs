// src/simulation/mod.rs

//! Drives one interactive circuit.
//!
//! [`CircuitSession`] is the entry point a host talks to: it owns the gate
//! engine, the gate-selection state machine, the event log and the pending
//! measurement, and translates clicks into register changes.

mod results;
mod measurement;
mod selection;
pub(crate) mod engine;

pub use results::MeasurementResult;
pub use measurement::{MeasurementSampler, PendingMeasurement};
pub use selection::{CnotStage, GateSelection};

use crate::core::constants::{MAX_QUBITS, MIN_QUBITS};
use crate::core::{LabConfig, LabError, QubitId, QubitRegister, Result};
use crate::entanglement;
use crate::events::EventLog;
use crate::operations::GateKind;
use crate::validation;
use engine::GateEngine;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info, warn};

const INIT_MESSAGE: &str = "System initialized to |00...0⟩ state.";
const MEASURING_MESSAGE: &str = "Measuring system...";

/// What a call to [`CircuitSession::apply_gate`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Nothing happened: no gate selected, unknown qubit, or a CNOT aimed at
    /// its own control.
    Ignored,
    /// First half of a CNOT: the qubit was recorded as control.
    ControlSelected(QubitId),
    /// The gate ran. `message` is the log line it produced, if any.
    Applied {
        gate: GateKind,
        message: Option<String>,
    },
}

/// An interactive circuit: register, gate selection, log and measurement.
///
/// Single-threaded by construction. The only guard is the in-flight
/// measurement: while one is pending a second request is ignored and the
/// circuit cannot be reinitialised.
#[derive(Debug)]
pub struct CircuitSession<R = StdRng> {
    config: LabConfig,
    engine: GateEngine,
    selection: GateSelection,
    log: EventLog,
    pending: Option<PendingMeasurement>,
    last_result: Option<MeasurementResult>,
    rng: R,
}

impl CircuitSession<StdRng> {
    /// Creates a session, seeding the generator from `config.seed` when set
    /// and from the OS otherwise.
    pub fn new(config: LabConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> CircuitSession<R> {
    /// Creates a session sampling measurements from `rng`.
    pub fn with_rng(config: LabConfig, rng: R) -> Result<Self> {
        if let Err(e) = config.validate() {
            warn!(error = %e, "rejected lab config");
            return Err(e);
        }
        let mut log = EventLog::with_capacity(config.log_capacity);
        log.record(INIT_MESSAGE);
        Ok(Self {
            engine: GateEngine::init(config.initial_qubits),
            selection: GateSelection::Idle,
            log,
            pending: None,
            last_result: None,
            rng,
            config,
        })
    }

    /// Replaces the circuit with `count` fresh qubits.
    ///
    /// Clears gate selection, any pending control and the last result, and
    /// resets the log to a single entry. Fails without changing anything if
    /// `count` is outside `1..=5` or a measurement is in flight.
    pub fn initialize(&mut self, count: usize) -> Result<()> {
        if self.pending.is_some() {
            return Err(LabError::MeasurementInFlight);
        }
        if !(MIN_QUBITS..=MAX_QUBITS).contains(&count) {
            return Err(LabError::QubitCountOutOfRange { requested: count, min: MIN_QUBITS, max: MAX_QUBITS });
        }
        self.engine.reinit(count);
        self.selection = GateSelection::Idle;
        self.last_result = None;
        self.log.reset_with(INIT_MESSAGE);
        Ok(())
    }

    /// Reinitialises with the current qubit count.
    pub fn reset(&mut self) -> Result<()> {
        self.initialize(self.engine.register().len())
    }

    /// Presses a gate button, or clears the selection with `None`.
    pub fn select_gate(&mut self, gate: Option<GateKind>) {
        let next = self.selection.select(gate);
        debug!(from = ?self.selection, to = ?next, "gate selection");
        self.selection = next;
    }

    /// Applies the selected gate to `target`.
    ///
    /// Unknown ids, a missing selection and CNOT self-targeting are silent
    /// no-ops: no mutation and no log entry.
    pub fn apply_gate(&mut self, target: QubitId) -> GateOutcome {
        if !self.engine.register().contains(target) {
            debug!(%target, "ignored gate on unknown qubit");
            return GateOutcome::Ignored;
        }

        let (gate, message) = match self.selection {
            GateSelection::Idle => {
                debug!(%target, "ignored click without gate selection");
                return GateOutcome::Ignored;
            }
            GateSelection::Hadamard => (GateKind::Hadamard, self.engine.apply_hadamard(target)),
            GateSelection::PauliX => (GateKind::PauliX, self.engine.apply_pauli_x(target)),
            GateSelection::Cnot(CnotStage::AwaitingControl) => {
                self.selection = GateSelection::Cnot(CnotStage::AwaitingTarget(target));
                return GateOutcome::ControlSelected(target);
            }
            GateSelection::Cnot(CnotStage::AwaitingTarget(control)) => {
                let Some(message) = self.engine.apply_cnot(control, target) else {
                    debug!(%control, %target, "ignored CNOT target");
                    return GateOutcome::Ignored;
                };
                self.selection = GateSelection::Idle;
                (GateKind::Cnot, message)
            }
        };

        if let Some(line) = &message {
            self.log.record(line.clone());
        }
        debug_assert!(validation::validate_register(self.engine.register()).is_ok());
        GateOutcome::Applied { gate, message }
    }

    /// Requests a measurement at `now`.
    ///
    /// The register is snapshotted immediately; the outcome is published by
    /// [`poll_measurement`](Self::poll_measurement) once the configured delay
    /// has passed. Returns `false` (and does nothing) if one is already in
    /// flight.
    pub fn measure(&mut self, now: Instant) -> bool {
        if self.pending.is_some() {
            debug!("ignored measurement request while one is in flight");
            return false;
        }
        let due = now + self.config.measurement_delay();
        self.pending = Some(PendingMeasurement::new(self.engine.register().clone(), due));
        self.log.record(MEASURING_MESSAGE);
        true
    }

    /// Publishes the pending measurement if it is due at `now`.
    pub fn poll_measurement(&mut self, now: Instant) -> Option<MeasurementResult> {
        if self.pending.as_ref()?.is_due(now) {
            self.finish_measurement()
        } else {
            None
        }
    }

    /// Publishes the pending measurement regardless of its due time.
    pub fn finish_measurement(&mut self) -> Option<MeasurementResult> {
        let pending = self.pending.take()?;
        let result = MeasurementSampler::sample(pending.snapshot(), &mut self.rng);
        info!(outcome = %result, "measurement complete");
        self.log.record(format!("Measurement Complete: {}", result));
        self.last_result = Some(result.clone());
        Some(result)
    }

    /// Requests and completes a measurement in one step. `None` if another
    /// measurement is already in flight.
    pub fn measure_now(&mut self) -> Option<MeasurementResult> {
        if !self.measure(Instant::now()) {
            return None;
        }
        self.finish_measurement()
    }

    pub fn register(&self) -> &QubitRegister {
        self.engine.register()
    }

    pub fn selection(&self) -> GateSelection {
        self.selection
    }

    pub fn is_measuring(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_measurement(&self) -> Option<&PendingMeasurement> {
        self.pending.as_ref()
    }

    /// Outcome of the last completed measurement since initialisation.
    pub fn last_result(&self) -> Option<&MeasurementResult> {
        self.last_result.as_ref()
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Entangled pairs of the current register as 0-based positions.
    pub fn entanglement_pairs(&self) -> Vec<(usize, usize)> {
        entanglement::entanglement_pairs(self.engine.register())
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }
}
