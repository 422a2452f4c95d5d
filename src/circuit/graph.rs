//! Circuit structure.

use std::collections::HashSet;

use tracing::debug;

use super::gate::Gate;
use super::types::{Signal, VarId};
use super::variables::VariableStore;
use crate::dsl::{self, CircuitAst};
use crate::error::{Result, TruthTableError};

/// A complete circuit ready for evaluation.
#[derive(Debug, Clone)]
pub struct Circuit {
    /// Primary inputs in declaration order (first = most significant)
    pub inputs: Vec<VarId>,

    /// Declared outputs in declaration order
    pub outputs: Vec<VarId>,

    /// All signals referenced anywhere in the description
    pub variables: VariableStore,

    /// Gates in declaration order
    pub gates: Vec<Gate>,
}

impl Circuit {
    /// Build a circuit from a parsed AST.
    ///
    /// Names are resolved in the order they appear: inputs, then outputs,
    /// then gate parameters. Inputs must be distinct user signals (not `0`,
    /// `1` or `_`). Gate wiring is checked separately by
    /// [`validate_circuit`](super::validate_circuit).
    pub fn from_ast(ast: CircuitAst) -> Result<Self> {
        let mut variables = VariableStore::new();

        let mut inputs = Vec::with_capacity(ast.inputs.len());
        let mut seen = HashSet::with_capacity(ast.inputs.len());
        for name in &ast.inputs {
            let id = variables.intern(name);
            if id.is_reserved() {
                return Err(TruthTableError::ReservedName { name: name.clone() });
            }
            if !seen.insert(id) {
                return Err(TruthTableError::DuplicateInput { name: name.clone() });
            }
            variables.mark_input(id);
            inputs.push(id);
        }

        let outputs: Vec<VarId> = ast
            .outputs
            .iter()
            .map(|name| variables.intern(name))
            .collect();
        for &id in &outputs {
            if !id.is_reserved() {
                variables.mark_output(id);
            }
        }

        let mut gates = Vec::with_capacity(ast.gates.len());
        for def in ast.gates {
            let params: Vec<VarId> = def
                .params
                .iter()
                .map(|name| variables.intern(name))
                .collect();

            for &id in &params[def.kind.output_range(def.size)] {
                if !id.is_reserved() {
                    variables.mark_output(id);
                }
            }

            gates.push(Gate::new(def.kind, def.size, params, def.line));
        }

        debug!(
            variables = variables.len(),
            gates = gates.len(),
            "built circuit model"
        );

        Ok(Circuit {
            inputs,
            outputs,
            variables,
            gates,
        })
    }

    /// Parse, build and validate a circuit from DSL text.
    pub fn parse(input: &str) -> Result<Self> {
        let circuit = Self::from_ast(dsl::parse(input)?)?;
        super::validate_circuit(&circuit)?;
        Ok(circuit)
    }

    /// Number of primary inputs.
    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Number of declared outputs.
    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// Find a variable by name.
    pub fn find(&self, name: &str) -> Option<VarId> {
        self.variables.find(name)
    }

    /// Current value of a named signal.
    pub fn value(&self, name: &str) -> Option<Signal> {
        self.find(name).map(|id| self.variables.get(id))
    }

    /// Input names in declaration order.
    pub fn input_names(&self) -> Vec<&str> {
        self.inputs.iter().map(|&id| self.variables.name(id)).collect()
    }

    /// Output names in declaration order.
    pub fn output_names(&self) -> Vec<&str> {
        self.outputs.iter().map(|&id| self.variables.name(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::GateKind;

    #[test]
    fn test_from_ast_resolves_names() {
        let ast = dsl::parse("INPUT 2 a b\nOUTPUT 1 c\nAND a b t\nNOT t c\n").unwrap();
        let circuit = Circuit::from_ast(ast).unwrap();

        assert_eq!(circuit.inputs, vec![VarId(3), VarId(4)]);
        assert_eq!(circuit.outputs, vec![VarId(5)]);
        assert_eq!(circuit.gates.len(), 2);
        assert_eq!(circuit.gates[0].kind, GateKind::And);
        assert_eq!(circuit.gates[0].params, vec![VarId(3), VarId(4), VarId(6)]);
        assert_eq!(circuit.gates[1].params, vec![VarId(6), VarId(5)]);
        assert_eq!(circuit.input_names(), vec!["a", "b"]);
        assert_eq!(circuit.output_names(), vec!["c"]);
    }

    #[test]
    fn test_from_ast_marks_roles() {
        let ast = dsl::parse("INPUT 1 a\nOUTPUT 1 q\nNOT a t\nPASS t q\nAND a x _\n").unwrap();
        let circuit = Circuit::from_ast(ast).unwrap();
        let var = |name: &str| circuit.variables.variable(circuit.find(name).unwrap()).clone();

        assert!(var("a").is_input);
        assert!(!var("a").is_declared_output);
        assert!(var("q").is_declared_output);
        // Internal gate outputs are flagged too.
        assert!(var("t").is_declared_output);
        // Read-only signals are not.
        assert!(!var("x").is_declared_output);
        assert!(!var("_").is_declared_output);
    }

    #[test]
    fn test_from_ast_rejects_reserved_input() {
        let ast = dsl::parse("INPUT 2 a _\nOUTPUT 0\n").unwrap();
        let err = Circuit::from_ast(ast).unwrap_err();
        assert!(matches!(err, TruthTableError::ReservedName { ref name } if name == "_"));

        let err = Circuit::parse("INPUT 1 1\nOUTPUT 0\n").unwrap_err();
        assert!(matches!(err, TruthTableError::ReservedName { ref name } if name == "1"));
    }

    #[test]
    fn test_from_ast_rejects_duplicate_input() {
        let ast = dsl::parse("INPUT 3 a b a\nOUTPUT 1 b\n").unwrap();
        let err = Circuit::from_ast(ast).unwrap_err();
        assert!(matches!(err, TruthTableError::DuplicateInput { ref name } if name == "a"));
        assert!(err.is_model_error());
    }

    #[test]
    fn test_hash_inside_signal_name() {
        let circuit = Circuit::parse("INPUT 1 a#1\nOUTPUT 1 b\nNOT a#1 b # invert\n").unwrap();
        assert_eq!(circuit.input_names(), vec!["a#1"]);
        assert_eq!(circuit.gates.len(), 1);
        assert_eq!(circuit.gates[0].params, vec![VarId(3), VarId(4)]);
    }

    #[test]
    fn test_constants_resolve_to_reserved_slots() {
        let ast = dsl::parse("INPUT 1 a\nOUTPUT 1 y\nAND a 1 y\n").unwrap();
        let circuit = Circuit::from_ast(ast).unwrap();
        assert_eq!(circuit.gates[0].params[1], VarId::TRUE);
        assert_eq!(circuit.variables.len(), 5);
    }
}
