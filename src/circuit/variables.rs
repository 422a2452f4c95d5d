//! Arena of named signals.

use std::collections::HashMap;

use super::types::{Signal, VarId};

/// A named signal and its current value.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Signal name, unique within the circuit
    pub name: String,
    /// Current value
    pub value: Signal,
    /// Listed in the circuit's INPUT declaration
    pub is_input: bool,
    /// Listed in the OUTPUT declaration or occupying a gate output slot
    pub is_declared_output: bool,
}

impl Variable {
    fn new(name: impl Into<String>, value: Signal) -> Self {
        Self {
            name: name.into(),
            value,
            is_input: false,
            is_declared_output: false,
        }
    }
}

/// Every variable of a circuit, addressed by [`VarId`].
///
/// The store only grows. Names are resolved once, while the circuit is
/// built; evaluation reads and writes values by handle.
#[derive(Debug, Clone)]
pub struct VariableStore {
    vars: Vec<Variable>,
    by_name: HashMap<String, VarId>,
}

impl VariableStore {
    /// Create a store holding only the reserved signals `0`, `1` and `_`.
    pub fn new() -> Self {
        let mut store = Self {
            vars: Vec::new(),
            by_name: HashMap::new(),
        };
        store.push(Variable::new("0", Signal::Low));
        store.push(Variable::new("1", Signal::High));
        store.push(Variable::new("_", Signal::Unknown));
        store
    }

    fn push(&mut self, var: Variable) -> VarId {
        let id = VarId(self.vars.len());
        self.by_name.insert(var.name.clone(), id);
        self.vars.push(var);
        id
    }

    /// Look up a variable by name, creating it (Unknown) if it is new.
    pub fn intern(&mut self, name: &str) -> VarId {
        match self.by_name.get(name) {
            Some(&id) => id,
            None => self.push(Variable::new(name, Signal::Unknown)),
        }
    }

    /// Find an existing variable by name.
    pub fn find(&self, name: &str) -> Option<VarId> {
        self.by_name.get(name).copied()
    }

    /// Current value of a variable.
    #[inline]
    pub fn get(&self, id: VarId) -> Signal {
        self.vars[id.0].value
    }

    /// Assign a variable. Writes to the reserved signals are discarded.
    #[inline]
    pub fn set(&mut self, id: VarId, value: Signal) {
        if !id.is_reserved() {
            self.vars[id.0].value = value;
        }
    }

    /// Get a variable by handle.
    pub fn variable(&self, id: VarId) -> &Variable {
        &self.vars[id.0]
    }

    /// Get the name of a variable.
    pub fn name(&self, id: VarId) -> &str {
        &self.vars[id.0].name
    }

    /// Flag a variable as a primary input.
    pub fn mark_input(&mut self, id: VarId) {
        self.vars[id.0].is_input = true;
    }

    /// Flag a variable as a declared output.
    pub fn mark_output(&mut self, id: VarId) {
        self.vars[id.0].is_declared_output = true;
    }

    /// Reset every non-reserved, non-input variable to Unknown.
    pub fn undefine(&mut self) {
        for var in self.vars.iter_mut().skip(VarId::RESERVED) {
            if !var.is_input {
                var.value = Signal::Unknown;
            }
        }
    }

    /// Number of variables, including the reserved ones.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Always false: the reserved signals are present from construction.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over all variables with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (VarId, &Variable)> {
        self.vars.iter().enumerate().map(|(i, v)| (VarId(i), v))
    }
}

impl Default for VariableStore {
    fn default() -> Self {
        Self::new()
    }
}
