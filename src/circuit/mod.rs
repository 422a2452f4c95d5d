//! Circuit model and validation.
//!
//! This module provides the internal representation of a circuit after parsing.
//! The [`Circuit`] struct holds the variable arena, the declared inputs and
//! outputs, and the gates in declaration order.

mod gate;
mod graph;
mod types;
mod validate;
mod variables;

pub use gate::Gate;
pub use graph::Circuit;
pub use types::*;
pub use validate::validate_circuit;
pub use variables::{Variable, VariableStore};
