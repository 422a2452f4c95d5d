//! WASM bindings for Truthtable Core.
//!
//! This module provides JavaScript-friendly bindings for use in web browsers.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmTruthTable } from 'truthtable_core';
//!
//! await init();
//!
//! const circuitText = `
//!   INPUT 2 a b
//!   OUTPUT 2 sum carry
//!   XOR a b sum
//!   AND a b carry
//! `;
//!
//! const table = new WasmTruthTable(circuitText);
//! console.log(table.render());
//!
//! // Or row by row, as 0/1 bytes (inputs then outputs):
//! table.reset();
//! let row;
//! while ((row = table.next_row()) !== undefined) {
//!   draw(row);
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::Circuit;
use crate::error::TruthTableError;
use crate::solver::{Simulator, SimulatorConfig};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: TruthTableError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible truth table generator.
///
/// This struct wraps the native `Simulator` and provides a JavaScript-friendly API.
#[wasm_bindgen]
pub struct WasmTruthTable {
    simulator: Simulator,
}

#[wasm_bindgen]
impl WasmTruthTable {
    /// Create a new generator from circuit description text.
    ///
    /// # Returns
    /// A new `WasmTruthTable` or an error if the description is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(circuit_dsl: &str) -> Result<WasmTruthTable, JsValue> {
        Self::build(circuit_dsl, SimulatorConfig::new())
    }

    /// Create a new generator with a fixed pass bound per row.
    #[wasm_bindgen]
    pub fn with_max_passes(circuit_dsl: &str, max_passes: usize) -> Result<WasmTruthTable, JsValue> {
        Self::build(circuit_dsl, SimulatorConfig::new().with_max_passes(max_passes))
    }

    fn build(circuit_dsl: &str, config: SimulatorConfig) -> Result<WasmTruthTable, JsValue> {
        // Parse, build and validate
        let circuit = Circuit::parse(circuit_dsl).map_err(to_js)?;
        let simulator = Simulator::with_config(circuit, config);
        Ok(WasmTruthTable { simulator })
    }

    /// Render the complete table, one line per row.
    ///
    /// Restarts the enumeration first.
    #[wasm_bindgen]
    pub fn render(&mut self) -> Result<String, JsValue> {
        self.simulator.reset();
        let mut text = String::new();
        for row in self.simulator.rows() {
            let row = row.map_err(to_js)?;
            text.push_str(&row.to_string());
            text.push('\n');
        }
        Ok(text)
    }

    /// Evaluate the next row.
    ///
    /// # Returns
    /// Input bits followed by output bits as 0/1 bytes, or `undefined` once
    /// every row has been produced.
    #[wasm_bindgen]
    pub fn next_row(&mut self) -> Result<Option<Vec<u8>>, JsValue> {
        let row = self.simulator.step().map_err(to_js)?;
        Ok(row.map(|r| r.values().map(u8::from).collect()))
    }

    /// Restart the enumeration from all zeros.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.simulator.reset();
    }

    /// Number of primary inputs.
    #[wasm_bindgen(getter)]
    pub fn num_inputs(&self) -> usize {
        self.simulator.circuit().num_inputs()
    }

    /// Number of declared outputs.
    #[wasm_bindgen(getter)]
    pub fn num_outputs(&self) -> usize {
        self.simulator.circuit().num_outputs()
    }

    /// Total number of rows, or `undefined` if it does not fit in a double.
    #[wasm_bindgen(getter)]
    pub fn row_count(&self) -> Option<f64> {
        self.simulator
            .row_count()
            .filter(|&n| n <= 1u128 << f64::MANTISSA_DIGITS)
            .map(|n| n as f64)
    }

    /// Input names, in declaration order.
    #[wasm_bindgen]
    pub fn input_names(&self) -> Vec<String> {
        self.simulator
            .circuit()
            .input_names()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Output names, in declaration order.
    #[wasm_bindgen]
    pub fn output_names(&self) -> Vec<String> {
        self.simulator
            .circuit()
            .output_names()
            .into_iter()
            .map(String::from)
            .collect()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
