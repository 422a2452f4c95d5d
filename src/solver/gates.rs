//! Gate semantics.
//!
//! Every gate recomputes its outputs from the current values of its inputs.
//! Logical kinds propagate unknowns: if any operand is unknown, so is the
//! result.

use crate::circuit::{Gate, Signal, VarId, VariableStore};
use crate::dsl::GateKind;

/// Decode a window of signals as an unsigned number, most significant first.
///
/// Returns `None` as soon as any bit is unknown, or if the window is wider
/// than `usize::BITS`. An empty window decodes to 0.
pub fn decode_bits(window: &[VarId], store: &VariableStore) -> Option<usize> {
    let mut value = 0usize;
    for (position, &id) in window.iter().rev().enumerate() {
        let bit = store.get(id).to_bool()?;
        let shift = u32::try_from(position).ok()?;
        value |= usize::from(bit).checked_shl(shift)?;
    }
    Some(value)
}

/// Evaluate one gate, writing its outputs into the store.
pub fn evaluate_gate(gate: &Gate, store: &mut VariableStore) {
    let p = &gate.params;
    match gate.kind {
        GateKind::And => binary(store, p, |a, b| a & b),
        GateKind::Or => binary(store, p, |a, b| a | b),
        GateKind::Nand => binary(store, p, |a, b| !(a & b)),
        GateKind::Nor => binary(store, p, |a, b| !(a | b)),
        GateKind::Xor => binary(store, p, |a, b| a ^ b),
        GateKind::Not => {
            let value = !store.get(p[0]);
            store.set(p[1], value);
        }
        GateKind::Pass => {
            let value = store.get(p[0]);
            store.set(p[1], value);
        }
        GateKind::Decoder => match decode_bits(gate.selectors(), store) {
            Some(index) => {
                for (i, &out) in gate.outputs().iter().enumerate() {
                    store.set(out, Signal::from(i == index));
                }
            }
            None => {
                for &out in gate.outputs() {
                    store.set(out, Signal::Unknown);
                }
            }
        },
        GateKind::Multiplexer => {
            let value = match decode_bits(gate.selectors(), store) {
                Some(index) => store.get(p[index]),
                None => Signal::Unknown,
            };
            store.set(gate.outputs()[0], value);
        }
    }
}

fn binary(store: &mut VariableStore, p: &[VarId], f: impl FnOnce(bool, bool) -> bool) {
    let value = store.get(p[0]).combine(store.get(p[1]), f);
    store.set(p[2], value);
}
