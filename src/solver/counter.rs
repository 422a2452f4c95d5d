//! Binary counter over the primary inputs.

use crate::circuit::{Signal, VarId, VariableStore};

/// Enumerates every assignment of the primary inputs.
///
/// The inputs form a binary number with the first declared input as the
/// most significant bit. Counting starts at all-false.
#[derive(Debug, Clone)]
pub struct InputCounter {
    inputs: Vec<VarId>,
}

impl InputCounter {
    /// Create a counter over the given inputs.
    pub fn new(inputs: Vec<VarId>) -> Self {
        Self { inputs }
    }

    /// Set every input to false.
    pub fn reset(&self, store: &mut VariableStore) {
        for &id in &self.inputs {
            store.set(id, Signal::Low);
        }
    }

    /// Advance to the next assignment (ripple-carry from the last input).
    ///
    /// Returns `true` when the counter wraps back to all-false, i.e. every
    /// assignment has been visited. An unknown input absorbs the carry and
    /// becomes true.
    pub fn increment(&self, store: &mut VariableStore) -> bool {
        for &id in self.inputs.iter().rev() {
            match store.get(id) {
                Signal::High => store.set(id, Signal::Low),
                Signal::Low | Signal::Unknown => {
                    store.set(id, Signal::High);
                    return false;
                }
            }
        }
        true
    }

    /// Current assignment, in declaration order.
    pub fn current(&self, store: &VariableStore) -> Vec<bool> {
        self.inputs
            .iter()
            .map(|&id| store.get(id) == Signal::High)
            .collect()
    }

    /// Number of inputs being counted.
    pub fn width(&self) -> usize {
        self.inputs.len()
    }
}
