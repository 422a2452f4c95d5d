//! # Truthtable Core
//!
//! A truth table generator for combinational logic circuits.
//!
//! This library provides:
//! - A small text format for describing gate-level circuits
//! - A tri-state (0, 1, unknown) signal network evaluated by fixpoint relaxation
//! - Exhaustive enumeration of input assignments in binary counting order
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Parser for the circuit description format
//! - [`circuit`] - Variable arena, gate model and validation
//! - [`solver`] - Gate semantics, relaxation loop and row enumeration
//! - [`table`] - Text output of the truth table (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! truthtable circuits/half_adder.txt
//! ```
//!
//! ### Library
//!
//! ```
//! use truthtable_core::{Circuit, Simulator};
//!
//! let circuit = Circuit::parse("INPUT 2 a b\nOUTPUT 1 c\nAND a b c\n").unwrap();
//! let rows = Simulator::new(circuit).run().unwrap();
//! assert_eq!(rows.len(), 4);
//! assert_eq!(rows[3].to_string(), "1 1 | 1");
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmTruthTable } from 'truthtable_core';
//!
//! const table = new WasmTruthTable(circuitText);
//! console.log(table.render());
//! ```
//!
//! ## Evaluation Method
//!
//! For each input assignment, starting at all zeros:
//!
//! 1. Reset every internal and output signal to unknown
//! 2. Evaluate every gate in declaration order, repeating whole passes until
//!    all declared outputs are defined
//! 3. Emit the inputs and outputs, then increment the inputs as a binary
//!    number (first input most significant)

pub mod circuit;
pub mod dsl;
pub mod error;
pub mod solver;

#[cfg(feature = "cli")]
pub mod table;

// Re-export main types for convenience
pub use circuit::{Circuit, Signal};
pub use error::{Result, TruthTableError};
pub use solver::{Row, Simulator, SimulatorConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmTruthTable;

/// Largest selector width accepted for DECODER and MULTIPLEXER gates.
pub const MAX_SELECTOR_BITS: usize = 20;
