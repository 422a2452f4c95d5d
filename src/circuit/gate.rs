//! Gate instances.

use super::types::VarId;
use crate::dsl::GateKind;

/// A gate wired to variables of the circuit.
///
/// Parameter layout by kind:
///
/// | Kind | `params` |
/// |------|----------|
/// | AND, OR, NAND, NOR, XOR | `[in1, in2, out]` |
/// | NOT, PASS | `[in, out]` |
/// | DECODER(s) | `[sel_0 .. sel_{s-1}, out_0 .. out_{2^s-1}]` |
/// | MULTIPLEXER(s) | `[data_0 .. data_{2^s-1}, sel_0 .. sel_{s-1}, out]` |
///
/// Selector bits are most-significant first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    pub kind: GateKind,
    /// Selector width; 0 for the logical kinds
    pub size: usize,
    pub params: Vec<VarId>,
    /// Source line, kept for error messages
    pub line: usize,
}

impl Gate {
    /// Create a new gate.
    pub fn new(kind: GateKind, size: usize, params: Vec<VarId>, line: usize) -> Self {
        debug_assert_eq!(params.len(), kind.param_count(size));
        Self {
            kind,
            size,
            params,
            line,
        }
    }

    /// Parameters read by the gate.
    pub fn inputs(&self) -> &[VarId] {
        &self.params[..self.kind.output_range(self.size).start]
    }

    /// Parameters written by the gate.
    pub fn outputs(&self) -> &[VarId] {
        &self.params[self.kind.output_range(self.size)]
    }

    /// Selector window of a DECODER or MULTIPLEXER; empty for other kinds.
    pub fn selectors(&self) -> &[VarId] {
        match self.kind {
            GateKind::Decoder => &self.params[..self.size],
            GateKind::Multiplexer => {
                let start = 1 << self.size;
                &self.params[start..start + self.size]
            }
            _ => &[],
        }
    }
}
