//! Parser for the circuit DSL.

use tracing::debug;

use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{Result, TruthTableError};
use crate::MAX_SELECTOR_BITS;

/// Parser for circuit DSL.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Parse the entire circuit description.
    pub fn parse(&mut self) -> Result<CircuitAst> {
        let mut ast = CircuitAst::new();

        ast.inputs = self.parse_header("INPUT")?;
        ast.outputs = self.parse_header("OUTPUT")?;

        while self.current.kind != TokenKind::Eof {
            let gate = self.parse_gate()?;
            ast.gates.push(gate);
        }

        debug!(
            inputs = ast.inputs.len(),
            outputs = ast.outputs.len(),
            gates = ast.gates.len(),
            "parsed circuit description"
        );

        Ok(ast)
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Consume the current word, failing with a message naming `what` at EOF.
    fn expect_word(&mut self, what: &str) -> Result<Token> {
        if self.current.kind == TokenKind::Word {
            let tok = self.current.clone();
            self.advance();
            Ok(tok)
        } else {
            Err(TruthTableError::parse(
                self.current.line,
                format!("expected {}, reached end of input", what),
            ))
        }
    }

    fn parse_count(&mut self, what: &str) -> Result<usize> {
        let tok = self.expect_word(what)?;
        tok.text.parse::<usize>().map_err(|_| {
            TruthTableError::parse(
                tok.line,
                format!("expected {}, got '{}'", what, tok.text),
            )
        })
    }

    /// Parse `<KEYWORD> <n> <name_1> ... <name_n>`.
    fn parse_header(&mut self, keyword: &str) -> Result<Vec<String>> {
        let tok = self.expect_word(&format!("'{}' directive", keyword))?;
        if !tok.text.eq_ignore_ascii_case(keyword) {
            return Err(TruthTableError::parse(
                tok.line,
                format!("expected '{}', got '{}'", keyword, tok.text),
            ));
        }

        let count = self.parse_count(&format!("{} count", keyword))?;
        let mut names = Vec::with_capacity(count.min(64));
        for _ in 0..count {
            let name = self.expect_word(&format!("{} signal name", keyword))?;
            names.push(name.text);
        }
        Ok(names)
    }

    fn parse_gate(&mut self) -> Result<GateDef> {
        let keyword = self.expect_word("gate type")?;
        let line = keyword.line;

        let kind = GateKind::from_keyword(&keyword.text).ok_or_else(|| {
            TruthTableError::UnknownGate {
                keyword: keyword.text.clone(),
                line,
            }
        })?;

        let size = if kind.is_sized() {
            let tok = self.expect_word("gate size")?;
            let size = tok.text.parse::<usize>().map_err(|_| {
                TruthTableError::invalid_gate(
                    kind.keyword(),
                    line,
                    format!("expected a size, got '{}'", tok.text),
                )
            })?;
            if size > MAX_SELECTOR_BITS {
                return Err(TruthTableError::ResourceLimit {
                    what: "selector width",
                    value: size,
                    limit: MAX_SELECTOR_BITS,
                });
            }
            size
        } else {
            0
        };

        let expected = kind.param_count(size);
        let mut params = Vec::with_capacity(expected);
        while params.len() < expected {
            if self.current.kind == TokenKind::Eof {
                return Err(TruthTableError::invalid_gate(
                    kind.keyword(),
                    line,
                    format!("expected {} parameters, got {}", expected, params.len()),
                ));
            }
            params.push(self.current.text.clone());
            self.advance();
        }

        Ok(GateDef {
            kind,
            size,
            params,
            line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_gate() {
        let input = "INPUT 2 a b\nOUTPUT 1 c\nAND a b c\n";
        let ast = super::super::parse(input).unwrap();
        assert_eq!(ast.inputs, vec!["a", "b"]);
        assert_eq!(ast.outputs, vec!["c"]);
        assert_eq!(ast.gates.len(), 1);
        assert_eq!(ast.gates[0].kind, GateKind::And);
        assert_eq!(ast.gates[0].params, vec!["a", "b", "c"]);
        assert_eq!(ast.gates[0].line, 3);
    }

    #[test]
    fn test_parse_free_form_layout() {
        // Line breaks are not significant.
        let input = "INPUT 1 a OUTPUT 1 b NOT\na\nb";
        let ast = super::super::parse(input).unwrap();
        assert_eq!(ast.gates.len(), 1);
        assert_eq!(ast.gates[0].kind, GateKind::Not);
    }

    #[test]
    fn test_parse_sized_gates() {
        let input = "INPUT 3 s0 s1 d\nOUTPUT 1 y\n\
                     DECODER 2 s0 s1 o0 o1 o2 o3\n\
                     MULTIPLEXER 1 o0 d s1 y\n";
        let ast = super::super::parse(input).unwrap();
        assert_eq!(ast.gates[0].kind, GateKind::Decoder);
        assert_eq!(ast.gates[0].size, 2);
        assert_eq!(ast.gates[0].params.len(), 6);
        assert_eq!(ast.gates[1].kind, GateKind::Multiplexer);
        assert_eq!(ast.gates[1].params, vec!["o0", "d", "s1", "y"]);
    }

    #[test]
    fn test_parse_empty_headers() {
        let ast = super::super::parse("INPUT 0 OUTPUT 1 1").unwrap();
        assert!(ast.inputs.is_empty());
        assert_eq!(ast.outputs, vec!["1"]);
        assert!(ast.gates.is_empty());
    }

    #[test]
    fn test_parse_missing_output_header() {
        let err = super::super::parse("INPUT 1 a\nNOT a b").unwrap_err();
        assert!(matches!(err, TruthTableError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_parse_bad_count() {
        let err = super::super::parse("INPUT two a b").unwrap_err();
        assert!(matches!(err, TruthTableError::ParseError { line: 1, .. }));
    }

    #[test]
    fn test_parse_short_name_list() {
        let err = super::super::parse("INPUT 3 a b").unwrap_err();
        assert!(err.to_string().contains("INPUT signal name"));
    }

    #[test]
    fn test_parse_unknown_gate() {
        let err = super::super::parse("INPUT 1 a\nOUTPUT 1 b\nLATCH a b").unwrap_err();
        assert!(matches!(
            err,
            TruthTableError::UnknownGate { ref keyword, line: 3 } if keyword == "LATCH"
        ));
    }

    #[test]
    fn test_parse_truncated_gate() {
        let err = super::super::parse("INPUT 2 a b\nOUTPUT 1 c\nAND a b").unwrap_err();
        assert!(matches!(err, TruthTableError::InvalidGate { line: 3, .. }));
    }

    #[test]
    fn test_parse_oversized_decoder() {
        let err = super::super::parse("INPUT 0 OUTPUT 0 DECODER 64 a").unwrap_err();
        assert!(matches!(err, TruthTableError::ResourceLimit { value: 64, .. }));
    }

    #[test]
    fn test_parse_bad_size() {
        let err = super::super::parse("INPUT 0 OUTPUT 0 MULTIPLEXER x a b").unwrap_err();
        assert!(matches!(err, TruthTableError::InvalidGate { .. }));
    }
}
