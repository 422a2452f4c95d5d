//! Fixpoint relaxation over the gate list.

use tracing::warn;

use super::gates::evaluate_gate;
use crate::circuit::{Circuit, VarId, VariableStore};
use crate::error::{Result, TruthTableError};

/// Repeats full passes over the gates until every declared output is defined.
///
/// Within a pass, gates run in declaration order and see values written by
/// earlier gates of the same pass.
#[derive(Debug, Clone)]
pub struct Relaxation {
    /// Passes allowed per row before giving up
    pub max_passes: usize,
}

impl Relaxation {
    /// Create a relaxation loop with the given pass bound.
    pub fn new(max_passes: usize) -> Self {
        Self { max_passes }
    }

    /// Run passes until the circuit is settled.
    ///
    /// Returns the number of passes executed, which is 0 when the outputs are
    /// already defined.
    pub fn settle(&self, circuit: &mut Circuit) -> Result<usize> {
        let Circuit {
            inputs,
            outputs,
            variables,
            gates,
        } = circuit;

        let mut passes = 0;
        while !is_settled(outputs, variables) {
            if passes >= self.max_passes {
                let err = unsettled_error(passes, inputs, outputs, variables);
                warn!("{}", err);
                return Err(err);
            }
            for gate in gates.iter() {
                evaluate_gate(gate, variables);
            }
            passes += 1;
        }

        Ok(passes)
    }
}

/// Check whether every listed signal is defined.
pub fn is_settled(outputs: &[VarId], store: &VariableStore) -> bool {
    outputs.iter().all(|&id| store.get(id).is_known())
}

fn unsettled_error(
    passes: usize,
    inputs: &[VarId],
    outputs: &[VarId],
    store: &VariableStore,
) -> TruthTableError {
    let bits: Vec<String> = inputs.iter().map(|&id| store.get(id).to_string()).collect();
    let pending: Vec<&str> = outputs
        .iter()
        .filter(|&&id| !store.get(id).is_known())
        .map(|&id| store.name(id))
        .collect();
    TruthTableError::convergence_failure(passes, bits.join(" "), pending.join(", "))
}
