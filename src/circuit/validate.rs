//! Circuit validation.

use crate::error::{Result, TruthTableError};

use super::{Circuit, VarId};

/// Validate a circuit for evaluation.
///
/// Checks:
/// - No gate drives a constant signal
/// - No gate drives a primary input
///
/// Input declarations are already checked by
/// [`Circuit::from_ast`](super::Circuit::from_ast). Cycles are not detected here; a circuit that never settles is reported
/// by the evaluator.
pub fn validate_circuit(circuit: &Circuit) -> Result<()> {
    for gate in &circuit.gates {
        for &out in gate.outputs() {
            if out == VarId::FALSE || out == VarId::TRUE {
                return Err(TruthTableError::ConstantDriven {
                    gate: gate.kind.to_string(),
                    line: gate.line,
                    name: circuit.variables.name(out).to_string(),
                });
            }
            if circuit.variables.variable(out).is_input {
                return Err(TruthTableError::InputDriven {
                    gate: gate.kind.to_string(),
                    line: gate.line,
                    name: circuit.variables.name(out).to_string(),
                });
            }
        }
    }

    Ok(())
}
