//! Abstract Syntax Tree types for the circuit DSL.

use std::fmt;
use std::ops::Range;

/// Complete AST representation of a parsed circuit.
#[derive(Debug, Clone)]
pub struct CircuitAst {
    /// Input signal names, in declaration order
    pub inputs: Vec<String>,
    /// Output signal names, in declaration order
    pub outputs: Vec<String>,
    /// All gate instances, in declaration order
    pub gates: Vec<GateDef>,
}

impl CircuitAst {
    /// Create a new empty circuit AST.
    pub fn new() -> Self {
        Self {
            inputs: Vec::new(),
            outputs: Vec::new(),
            gates: Vec::new(),
        }
    }
}

impl Default for CircuitAst {
    fn default() -> Self {
        Self::new()
    }
}

/// A gate instance from the DSL.
#[derive(Debug, Clone)]
pub struct GateDef {
    /// Gate type
    pub kind: GateKind,
    /// Selector width for DECODER and MULTIPLEXER, 0 otherwise
    pub size: usize,
    /// Signal names in parameter order
    pub params: Vec<String>,
    /// Source line number for error reporting
    pub line: usize,
}

/// Gate types supported by the DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    And,
    Or,
    Nand,
    Nor,
    Xor,
    Not,
    Pass,
    /// One-hot decoder over `size` selector bits
    Decoder,
    /// `2^size`-way multiplexer
    Multiplexer,
}

impl GateKind {
    /// Parse a gate type from its keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NAND" => Some(Self::Nand),
            "NOR" => Some(Self::Nor),
            "XOR" => Some(Self::Xor),
            "NOT" => Some(Self::Not),
            "PASS" => Some(Self::Pass),
            "DECODER" => Some(Self::Decoder),
            "MULTIPLEXER" => Some(Self::Multiplexer),
            _ => None,
        }
    }

    /// The DSL keyword for this gate type.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Nand => "NAND",
            Self::Nor => "NOR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::Pass => "PASS",
            Self::Decoder => "DECODER",
            Self::Multiplexer => "MULTIPLEXER",
        }
    }

    /// Whether the gate takes a size argument before its parameters.
    pub fn is_sized(&self) -> bool {
        matches!(self, Self::Decoder | Self::Multiplexer)
    }

    /// Get the expected number of parameters for this gate type.
    pub fn param_count(&self, size: usize) -> usize {
        match self {
            Self::And | Self::Or | Self::Nand | Self::Nor | Self::Xor => 3,
            Self::Not | Self::Pass => 2,
            Self::Decoder => size + (1 << size),
            Self::Multiplexer => (1 << size) + size + 1,
        }
    }

    /// Positions of the output slots within the parameter list.
    pub fn output_range(&self, size: usize) -> Range<usize> {
        match self {
            Self::And | Self::Or | Self::Nand | Self::Nor | Self::Xor => 2..3,
            Self::Not | Self::Pass => 1..2,
            Self::Decoder => size..size + (1 << size),
            Self::Multiplexer => {
                let out = (1 << size) + size;
                out..out + 1
            }
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
