//! Truth table evaluation engine.
//!
//! Each row of the table is produced in three steps:
//!
//! 1. Reset every non-input, non-constant signal to unknown
//! 2. Run full passes over the gates, in declaration order, until every
//!    declared output is defined
//! 3. Read the outputs, then advance the input counter
//!
//! Gates propagate unknowns, so a signal only becomes defined once all the
//! values it depends on are. Gate order only affects how many passes a row
//! needs. A circuit with a feedback loop may never settle; the pass loop is
//! bounded and reports [`ConvergenceFailure`](crate::TruthTableError::ConvergenceFailure)
//! instead of spinning.

mod counter;
mod gates;
mod relax;
mod simulator;

pub use counter::InputCounter;
pub use gates::{decode_bits, evaluate_gate};
pub use relax::{is_settled, Relaxation};
pub use simulator::{Row, Simulator, SimulatorConfig};

/// Default pass bound per row, as a multiple of `gate_count + 1`.
pub const DEFAULT_PASS_FACTOR: usize = 4;
