// src/validation/mod.rs

//! Checks a `QubitRegister` against the invariants of the lab model.

use crate::core::{GroupId, LabError, QubitId, QubitRegister};
use std::collections::HashMap;

/// Checks every `probability_one` lies in [0, 1].
pub fn check_probabilities(register: &QubitRegister) -> Result<(), LabError> {
    for q in register.qubits() {
        let p = q.probability_one();
        if !(0.0..=1.0).contains(&p) {
            return Err(LabError::invariant(format!("{} has probability_one {} outside [0, 1]", q.id(), p)));
        }
    }
    Ok(())
}

/// Checks ids run 1..=len in order, without gaps or duplicates.
pub fn check_ids(register: &QubitRegister) -> Result<(), LabError> {
    for (i, q) in register.qubits().iter().enumerate() {
        let expected = QubitId(i as u32 + 1);
        if q.id() != expected {
            return Err(LabError::invariant(format!("position {} holds {}, expected {}", i, q.id(), expected)));
        }
    }
    Ok(())
}

/// Checks every entanglement group has at least two members.
pub fn check_entanglement_groups(register: &QubitRegister) -> Result<(), LabError> {
    let mut members: HashMap<GroupId, usize> = HashMap::new();
    for group in register.qubits().iter().filter_map(|q| q.entangled_group()) {
        *members.entry(group).or_insert(0) += 1;
    }
    match members.into_iter().find(|(_, count)| *count < 2) {
        Some((group, _)) => Err(LabError::invariant(format!("group {} has a single member", group))),
        None => Ok(()),
    }
}

/// Runs all register checks.
pub fn validate_register(register: &QubitRegister) -> Result<(), LabError> {
    check_ids(register)?;
    check_probabilities(register)?;
    check_entanglement_groups(register)?;
    Ok(())
}
