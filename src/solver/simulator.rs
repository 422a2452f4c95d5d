//! Row driver: enumerates input assignments and evaluates each one.

use std::fmt;

use tracing::trace;

use crate::circuit::{Circuit, Signal};
use crate::error::Result;

use super::counter::InputCounter;
use super::relax::Relaxation;
use super::DEFAULT_PASS_FACTOR;

/// Configuration for the simulator.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Fixed pass bound per row; overrides `pass_factor` when set.
    pub max_passes: Option<usize>,
    /// Pass bound per row as a multiple of `gate_count + 1`.
    pub pass_factor: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_passes: None,
            pass_factor: DEFAULT_PASS_FACTOR,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed pass bound per row.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }

    /// Set the pass bound as a multiple of the gate count.
    ///
    /// An acyclic circuit settles within `gate_count + 1` passes whatever
    /// the gate order, so any factor of 1 or more accepts every well-formed
    /// description.
    pub fn with_pass_factor(mut self, pass_factor: usize) -> Self {
        self.pass_factor = pass_factor;
        self
    }

    /// Pass bound for a circuit with `gate_count` gates.
    pub fn pass_limit(&self, gate_count: usize) -> usize {
        self.max_passes
            .unwrap_or_else(|| self.pass_factor.saturating_mul(gate_count.saturating_add(1)))
    }
}

/// One line of the truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Input assignment in declaration order
    pub inputs: Vec<bool>,
    /// Settled outputs in declaration order
    pub outputs: Vec<bool>,
}

impl Row {
    /// Input values followed by output values.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.inputs.iter().chain(self.outputs.iter()).copied()
    }
}

impl fmt::Display for Row {
    /// `0 1 | 1 0`: each input followed by a space, a bar, each output
    /// preceded by a space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.inputs {
            write!(f, "{} ", u8::from(bit))?;
        }
        f.write_str("|")?;
        for &bit in &self.outputs {
            write!(f, " {}", u8::from(bit))?;
        }
        Ok(())
    }
}

/// Truth table generator for a single circuit.
pub struct Simulator {
    /// The circuit being evaluated
    circuit: Circuit,
    /// Enumerates input assignments
    counter: InputCounter,
    /// Per-row fixpoint loop
    relaxation: Relaxation,
    /// Every assignment has been visited
    exhausted: bool,
}

impl Simulator {
    /// Create a new simulator for the given circuit with default configuration.
    pub fn new(circuit: Circuit) -> Self {
        Self::with_config(circuit, SimulatorConfig::default())
    }

    /// Create a new simulator for the given circuit with custom configuration.
    pub fn with_config(mut circuit: Circuit, config: SimulatorConfig) -> Self {
        let counter = InputCounter::new(circuit.inputs.clone());
        counter.reset(&mut circuit.variables);
        let relaxation = Relaxation::new(config.pass_limit(circuit.gates.len()));

        Self {
            circuit,
            counter,
            relaxation,
            exhausted: false,
        }
    }

    /// Evaluate the current input assignment without advancing.
    ///
    /// Every non-input signal is reset first, so calling this twice yields
    /// the same row.
    pub fn evaluate(&mut self) -> Result<Row> {
        self.circuit.variables.undefine();
        let passes = self.relaxation.settle(&mut self.circuit)?;

        let row = self.read_row();
        trace!(row = %row, passes, "evaluated row");
        Ok(row)
    }

    fn read_row(&self) -> Row {
        let store = &self.circuit.variables;
        Row {
            inputs: self.counter.current(store),
            outputs: self
                .circuit
                .outputs
                .iter()
                .map(|&id| store.get(id) == Signal::High)
                .collect(),
        }
    }

    /// Evaluate the current row and advance to the next assignment.
    ///
    /// Returns `None` once every assignment has been emitted. An evaluation
    /// error also ends the enumeration.
    pub fn step(&mut self) -> Result<Option<Row>> {
        if self.exhausted {
            return Ok(None);
        }

        let row = match self.evaluate() {
            Ok(row) => row,
            Err(e) => {
                self.exhausted = true;
                return Err(e);
            }
        };

        self.exhausted = self.counter.increment(&mut self.circuit.variables);
        Ok(Some(row))
    }

    /// Iterate over the remaining rows.
    pub fn rows(&mut self) -> impl Iterator<Item = Result<Row>> + '_ {
        std::iter::from_fn(move || self.step().transpose())
    }

    /// Evaluate every remaining row.
    pub fn run(&mut self) -> Result<Vec<Row>> {
        self.rows().collect()
    }

    /// Restart the enumeration from all-false.
    pub fn reset(&mut self) {
        self.counter.reset(&mut self.circuit.variables);
        self.exhausted = false;
    }

    /// Whether every row has been emitted.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Total number of rows, `2^inputs`, or `None` if it does not fit in a `u128`.
    pub fn row_count(&self) -> Option<u128> {
        u32::try_from(self.counter.width())
            .ok()
            .and_then(|n| 1u128.checked_shl(n))
    }

    /// Pass bound applied to each row.
    pub fn max_passes(&self) -> usize {
        self.relaxation.max_passes
    }

    /// Get the current value of a signal by name.
    pub fn signal(&self, name: &str) -> Option<Signal> {
        self.circuit.value(name)
    }

    /// Get a reference to the circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TruthTableError;

    fn simulator(src: &str) -> Simulator {
        Simulator::new(Circuit::parse(src).unwrap())
    }

    fn row(inputs: &[u8], outputs: &[u8]) -> Row {
        Row {
            inputs: inputs.iter().map(|&b| b == 1).collect(),
            outputs: outputs.iter().map(|&b| b == 1).collect(),
        }
    }

    #[test]
    fn test_not_gate_table() {
        let rows = simulator("INPUT 1 a\nOUTPUT 1 b\nNOT a b\n").run().unwrap();
        assert_eq!(rows, vec![row(&[0], &[1]), row(&[1], &[0])]);
    }

    #[test]
    fn test_and_gate_table() {
        let rows = simulator("INPUT 2 a b\nOUTPUT 1 c\nAND a b c\n").run().unwrap();
        assert_eq!(
            rows,
            vec![
                row(&[0, 0], &[0]),
                row(&[0, 1], &[0]),
                row(&[1, 0], &[0]),
                row(&[1, 1], &[1]),
            ]
        );
    }

    #[test]
    fn test_row_count_and_order() {
        let mut sim = simulator("INPUT 4 a b c d\nOUTPUT 4 w x y z\nPASS a w\nPASS b x\nPASS c y\nPASS d z\n");
        assert_eq!(sim.row_count(), Some(16));

        let rows = sim.run().unwrap();
        assert_eq!(rows.len(), 16);
        for (n, r) in rows.iter().enumerate() {
            let value = r.inputs.iter().fold(0, |acc, &b| (acc << 1) | usize::from(b));
            assert_eq!(value, n);
            assert_eq!(r.outputs, r.inputs);
        }
        assert!(sim.is_exhausted());
        assert_eq!(sim.step().unwrap(), None);
    }

    #[test]
    fn test_no_inputs_single_row() {
        let rows = simulator("INPUT 0\nOUTPUT 2 x y\nPASS 1 x\nNOT 1 y\n").run().unwrap();
        assert_eq!(rows, vec![row(&[], &[1, 0])]);
    }

    #[test]
    fn test_no_outputs() {
        let rows = simulator("INPUT 2 a b\nOUTPUT 0\n").run().unwrap();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.outputs.is_empty()));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut sim = simulator("INPUT 2 a b\nOUTPUT 2 s c\nXOR a b s\nAND a b c\n");
        sim.step().unwrap();
        sim.step().unwrap();
        let first = sim.evaluate().unwrap();
        let second = sim.evaluate().unwrap();
        assert_eq!(first, second);
        assert_eq!(first, row(&[1, 0], &[1, 0]));
    }

    #[test]
    fn test_stale_values_are_cleared() {
        // y only settles through the decoder; a stale y from the previous
        // row must not leak into the next one.
        let mut sim = simulator("INPUT 1 s\nOUTPUT 2 y z\nDECODER 1 s z y\n");
        let rows = sim.run().unwrap();
        assert_eq!(rows, vec![row(&[0], &[0, 1]), row(&[1], &[1, 0])]);
    }

    #[test]
    fn test_reset_restarts_enumeration() {
        let mut sim = simulator("INPUT 1 a\nOUTPUT 1 b\nNOT a b\n");
        let first = sim.run().unwrap();
        sim.reset();
        assert!(!sim.is_exhausted());
        assert_eq!(sim.run().unwrap(), first);
    }

    #[test]
    fn test_convergence_failure_ends_enumeration() {
        let mut sim = simulator("INPUT 1 a\nOUTPUT 1 q\nXOR a q q\n");
        assert_eq!(sim.max_passes(), DEFAULT_PASS_FACTOR * 2);

        let err = sim.step().unwrap_err();
        assert!(matches!(err, TruthTableError::ConvergenceFailure { passes, .. } if passes == 8));
        assert!(sim.is_exhausted());
        assert_eq!(sim.step().unwrap(), None);
    }

    #[test]
    fn test_rows_iterator_stops_after_error() {
        let mut sim = simulator("INPUT 2 a b\nOUTPUT 1 q\nAND a b t\nOR t q q\n");
        let results: Vec<Result<Row>> = sim.rows().collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }

    #[test]
    fn test_custom_pass_limit() {
        let circuit = Circuit::parse("INPUT 1 a\nOUTPUT 1 d\nPASS c d\nNOT b c\nNOT a b\n").unwrap();
        let mut sim = Simulator::with_config(circuit.clone(), SimulatorConfig::new().with_max_passes(2));
        assert!(sim.step().is_err());

        let mut sim = Simulator::with_config(circuit, SimulatorConfig::new().with_pass_factor(1));
        assert_eq!(sim.max_passes(), 4);
        assert_eq!(sim.run().unwrap(), vec![row(&[0], &[0]), row(&[1], &[1])]);
    }

    #[test]
    fn test_signal_lookup() {
        let mut sim = simulator("INPUT 2 a b\nOUTPUT 1 c\nAND a b t\nNOT t c\n");
        sim.step().unwrap();
        assert_eq!(sim.signal("t"), Some(Signal::Low));
        assert_eq!(sim.signal("missing"), None);
    }

    #[test]
    fn test_row_display() {
        assert_eq!(row(&[0, 1], &[1]).to_string(), "0 1 | 1");
        assert_eq!(row(&[1], &[0, 1]).to_string(), "1 | 0 1");
        assert_eq!(row(&[], &[1]).to_string(), "| 1");
        assert_eq!(row(&[1, 0], &[1, 0]).values().collect::<Vec<_>>(), vec![true, false, true, false]);
    }
}
