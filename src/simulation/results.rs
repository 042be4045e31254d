// src/simulation/results.rs
use crate::core::QubitId;
use std::fmt;

/// Classical outcome of one measurement: one bit per qubit, in id order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeasurementResult {
    bits: Vec<u8>,
}

impl MeasurementResult {
    pub(crate) fn new(bits: Vec<u8>) -> Self {
        Self { bits }
    }

    /// All bits, position `i` belonging to qubit `i + 1`.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Outcome of a single qubit, `None` if the id was not measured.
    pub fn bit(&self, id: QubitId) -> Option<u8> {
        self.bits.get(id.index()?).copied()
    }

    /// Bits concatenated, e.g. `"0110"`.
    pub fn bitstring(&self) -> String {
        self.bits.iter().map(|b| if *b == 0 { '0' } else { '1' }).collect()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

impl fmt::Display for MeasurementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}⟩", self.bitstring())
    }
}
