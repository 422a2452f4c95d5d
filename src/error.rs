//! Error types for the truth table generator.
//!
//! This module provides a unified error type [`TruthTableError`] that covers
//! all error conditions that can occur while parsing a circuit description,
//! building and validating the circuit model, and evaluating rows.

use thiserror::Error;

/// Result type alias using [`TruthTableError`].
pub type Result<T> = std::result::Result<T, TruthTableError>;

/// Unified error type for all truth table operations.
#[derive(Error, Debug)]
pub enum TruthTableError {
    // ============ DSL Parsing Errors ============
    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Unknown gate keyword
    #[error("Unknown gate type '{keyword}' at line {line}")]
    UnknownGate { keyword: String, line: usize },

    /// Gate with a malformed parameter list or size
    #[error("Invalid {gate} gate at line {line}: {message}")]
    InvalidGate {
        gate: String,
        line: usize,
        message: String,
    },

    // ============ Circuit Model Errors ============
    /// A reserved signal name used where a user signal is required
    #[error("Reserved signal '{name}' cannot be declared as an input")]
    ReservedName { name: String },

    /// The same signal declared twice in the INPUT list
    #[error("Input '{name}' is declared more than once")]
    DuplicateInput { name: String },

    /// A gate drives one of the constant signals
    #[error("{gate} gate at line {line} drives the constant signal '{name}'")]
    ConstantDriven {
        gate: String,
        line: usize,
        name: String,
    },

    /// A gate drives a primary input
    #[error("{gate} gate at line {line} drives the primary input '{name}'")]
    InputDriven {
        gate: String,
        line: usize,
        name: String,
    },

    // ============ Resource Errors ============
    /// A size that would require an unreasonable allocation
    #[error("{what} of {value} exceeds the supported limit of {limit}")]
    ResourceLimit {
        what: &'static str,
        value: usize,
        limit: usize,
    },

    // ============ Evaluation Errors ============
    /// The relaxation loop did not settle every declared output
    #[error("Circuit did not settle after {passes} passes for inputs [{inputs}]; undefined outputs: {pending}")]
    ConvergenceFailure {
        passes: usize,
        inputs: String,
        pending: String,
    },

    // ============ I/O Errors ============
    /// Error reading circuit file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the truth table
    #[error("Failed to write truth table: {source}")]
    OutputError {
        #[source]
        source: std::io::Error,
    },
}

impl TruthTableError {
    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid gate error
    pub fn invalid_gate(gate: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::InvalidGate {
            gate: gate.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a convergence failure error
    pub fn convergence_failure(
        passes: usize,
        inputs: impl Into<String>,
        pending: impl Into<String>,
    ) -> Self {
        Self::ConvergenceFailure {
            passes,
            inputs: inputs.into(),
            pending: pending.into(),
        }
    }

    /// Whether this error was raised while building the circuit model,
    /// i.e. before any row was evaluated.
    pub fn is_model_error(&self) -> bool {
        matches!(
            self,
            Self::ParseError { .. }
                | Self::UnknownGate { .. }
                | Self::InvalidGate { .. }
                | Self::ReservedName { .. }
                | Self::DuplicateInput { .. }
                | Self::ConstantDriven { .. }
                | Self::InputDriven { .. }
        )
    }
}
