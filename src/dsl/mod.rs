//! DSL (Domain Specific Language) parser for circuit descriptions.
//!
//! A circuit is described as a free-form stream of whitespace-separated
//! words. Line breaks carry no meaning, so a gate may span several lines.
//!
//! # Grammar Overview
//!
//! ```text
//! circuit   = inputs outputs { gate }
//! inputs    = "INPUT" count { name }
//! outputs   = "OUTPUT" count { name }
//! gate      = binary name name name
//!           | unary name name
//!           | "DECODER" size { name }
//!           | "MULTIPLEXER" size { name }
//! binary    = "AND" | "OR" | "NAND" | "NOR" | "XOR"
//! unary     = "NOT" | "PASS"
//! count     = digit+
//! size      = digit+
//! name      = any word
//! comment   = '#' { any_char } (at the start of a word, to end of line)
//! ```
//!
//! Keywords are case-insensitive. Names `0` and `1` denote the constant
//! signals and `_` denotes a don't-care signal that is never assigned.
//!
//! # Gate Types
//!
//! | Type | Parameters |
//! |------|------------|
//! | AND, OR, NAND, NOR, XOR | `<in1> <in2> <out>` |
//! | NOT, PASS | `<in> <out>` |
//! | DECODER s | `s` selectors (MSB first), then `2^s` outputs |
//! | MULTIPLEXER s | `2^s` data inputs, `s` selectors (MSB first), then one output |
//!
//! # Example
//!
//! ```text
//! # Half adder
//! INPUT 2 a b
//! OUTPUT 2 sum carry
//!
//! XOR a b sum
//! AND a b carry
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a circuit DSL string into an AST.
pub fn parse(input: &str) -> Result<CircuitAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

/// Parse a circuit DSL file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<CircuitAst> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::error::TruthTableError::FileReadError {
            path: path.display().to_string(),
            source: e,
        }
    })?;
    parse(&content)
}
