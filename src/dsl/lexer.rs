//! Lexer (tokenizer) for the circuit DSL.
//!
//! Every run of non-whitespace characters is a word, so the lexer itself
//! cannot fail. A `#` starts a comment only at the beginning of a word;
//! inside a word it is an ordinary character.

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the DSL.
///
/// The format is a free-form stream of whitespace-separated words, so
/// keywords, counts and signal names are all words; the parser decides
/// what each one means from its position.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Any run of non-whitespace characters
    Word,
    /// End of file
    Eof,
}

/// Lexer for tokenizing circuit DSL input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        if self.chars.peek().is_none() {
            return Token {
                kind: TokenKind::Eof,
                text: String::new(),
                line: self.line,
                column: self.column,
            };
        }

        let start_line = self.line;
        let start_column = self.column;
        let text = self.read_word();
        Token {
            kind: TokenKind::Word,
            text,
            line: start_line,
            column: start_column,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else if ch == '#' {
                // Skip comment until end of line
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let tok = self.next_token();
        (tok.kind != TokenKind::Eof).then_some(tok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_basic() {
        let input = "AND a b c";
        let mut lexer = Lexer::new(input);

        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Word);
        assert_eq!(tok.text, "AND");

        let tok = lexer.next_token();
        assert_eq!(tok.text, "a");
        assert_eq!(tok.column, 5);

        lexer.next_token();
        lexer.next_token();
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_lexer_positions_across_lines() {
        let input = "INPUT 1 a\n  OUTPUT 1 b\n";
        let tokens: Vec<Token> = Lexer::new(input).collect();
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[3].text, "OUTPUT");
        assert_eq!(tokens[3].line, 2);
        assert_eq!(tokens[3].column, 3);
    }

    #[test]
    fn test_lexer_comments() {
        let input = "# header\nNOT a b # invert\nPASS b c";
        let words: Vec<String> = Lexer::new(input).map(|t| t.text).collect();
        assert_eq!(words, vec!["NOT", "a", "b", "PASS", "b", "c"]);
    }

    #[test]
    fn test_lexer_hash_inside_word() {
        let words: Vec<String> = Lexer::new("NOT a#1 b#\n#c d\nx\u{7}y")
            .map(|t| t.text)
            .collect();
        assert_eq!(words, vec!["NOT", "a#1", "b#", "x\u{7}y"]);
    }
}
