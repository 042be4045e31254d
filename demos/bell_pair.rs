//! Example building a Bell pair and measuring it repeatedly.
//! Shows that entangled qubits always read the same bit while a lone
//! superposed qubit reads 0 or 1 independently.

use qlab::{CircuitSession, GateKind, GateOutcome, LabConfig, LabError, QubitId};

// Helper for QubitId creation
fn qid(id: u32) -> QubitId { QubitId(id) }

fn main() -> Result<(), LabError> {
    println!("--- qlab Example: Bell Pair ---");

    let config = LabConfig { initial_qubits: 3, ..LabConfig::seeded(2024) };
    let mut lab = CircuitSession::new(config)?;
    println!("{}", lab.selection().prompt());

    // --- Build Circuit ---
    // 1. H on Q1 and Q3: both enter superposition.
    // 2. CNOT with Q1 as control and Q2 as target: Q1 and Q2 join one group.
    lab.select_gate(Some(GateKind::Hadamard));
    lab.apply_gate(qid(1));
    lab.apply_gate(qid(3));

    lab.select_gate(Some(GateKind::Cnot));
    println!("{}", lab.selection().prompt());
    if let GateOutcome::ControlSelected(control) = lab.apply_gate(qid(1)) {
        println!("Control set to {}. {}", control, lab.selection().prompt());
    }
    lab.apply_gate(qid(2));

    println!("\nRegister:\n{}", lab.register());
    println!("Entangled pairs (0-based): {:?}", lab.entanglement_pairs());

    // --- Run Measurements ---
    let shots = 1_000;
    let mut agree = 0;
    let mut q3_ones = 0;
    for _ in 0..shots {
        if let Some(result) = lab.measure_now() {
            if result.bit(qid(1)) == result.bit(qid(2)) {
                agree += 1;
            }
            if result.bit(qid(3)) == Some(1) {
                q3_ones += 1;
            }
        }
    }

    println!("\nAfter {} measurements:", shots);
    println!("  Q1 and Q2 agreed {} times", agree);
    println!("  Q3 read 1 in {:.1}% of shots", 100.0 * q3_ones as f64 / shots as f64);

    println!("\nEvent log (newest first):");
    for line in lab.log().entries() {
        println!("  {}", line);
    }

    println!("\n--- Example Finished ---");
    Ok(())
}
