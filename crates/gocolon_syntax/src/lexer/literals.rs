//! Literal and comment scanning for the Go lexer
//!
//! Literals are only delimited here, not evaluated: the colonizer copies them through verbatim, so escape
//! sequences and digit validity are not checked beyond what is needed to find the end of the token.

use super::Lexer;
use super::tokens::TokenKind;

impl<'a> Lexer<'a> {
    // ========================================================================
    // Comments
    // ========================================================================

    /// Scan a block comment. `/*` has already been consumed.
    pub(super) fn scan_block_comment(&mut self, start: usize) {
        loop {
            match self.advance() {
                Some('*') if self.match_char('/') => break,
                Some(_) => {}
                None => {
                    self.error("comment not terminated", start);
                    break;
                }
            }
        }
        self.add_token(TokenKind::Comment, start);
    }

    // ========================================================================
    // Strings and runes
    // ========================================================================

    /// Scan an interpreted string literal. The opening `"` has already been consumed.
    pub(super) fn scan_string(&mut self, start: usize) {
        if !self.scan_quoted('"') {
            self.error("string literal not terminated", start);
        }
        self.add_token(TokenKind::String, start);
    }

    /// Scan a rune literal. The opening `'` has already been consumed.
    pub(super) fn scan_rune(&mut self, start: usize) {
        if !self.scan_quoted('\'') {
            self.error("rune literal not terminated", start);
        }
        self.add_token(TokenKind::Rune, start);
    }

    /// Scan a raw string literal. The opening backquote has already been consumed.
    ///
    /// Raw strings may span lines; only end of input terminates them early.
    pub(super) fn scan_raw_string(&mut self, start: usize) {
        self.advance_while(|c| c != '`');
        if !self.match_char('`') {
            self.error("raw string literal not terminated", start);
        }
        self.add_token(TokenKind::RawString, start);
    }

    /// Consume up to and including the closing `quote`, honoring backslash escapes.
    ///
    /// Stops before a line break; returns `false` if the literal is unterminated.
    fn scan_quoted(&mut self, quote: char) -> bool {
        while let Some(c) = self.peek() {
            match c {
                '\n' | '\r' => return false,
                '\\' => {
                    self.advance();
                    if self.peek().is_some_and(|c| !matches!(c, '\n' | '\r')) {
                        self.advance();
                    }
                }
                _ if c == quote => {
                    self.advance();
                    return true;
                }
                _ => {
                    self.advance();
                }
            }
        }
        false
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    /// Scan a numeric literal. `first` (a digit, or `.` followed by a digit) has already been consumed.
    pub(super) fn scan_number(&mut self, start: usize, first: char) {
        let mut kind = TokenKind::Int;

        if first == '0' && self.peek().is_some_and(|c| matches!(c, 'x' | 'X')) {
            self.advance();
            self.advance_while(|c| c.is_ascii_hexdigit() || c == '_');
            if self.match_char('.') {
                kind = TokenKind::Float;
                self.advance_while(|c| c.is_ascii_hexdigit() || c == '_');
            }
            if self.peek().is_some_and(|c| matches!(c, 'p' | 'P')) {
                kind = TokenKind::Float;
                self.scan_exponent();
            }
        } else if first == '0' && self.peek().is_some_and(|c| matches!(c, 'b' | 'B' | 'o' | 'O')) {
            self.advance();
            self.advance_while(|c| c.is_ascii_digit() || c == '_');
        } else {
            if first == '.' {
                kind = TokenKind::Float;
            }
            self.advance_while(|c| c.is_ascii_digit() || c == '_');
            if first != '.' && self.match_char('.') {
                kind = TokenKind::Float;
                self.advance_while(|c| c.is_ascii_digit() || c == '_');
            }
            if self.peek().is_some_and(|c| matches!(c, 'e' | 'E')) {
                kind = TokenKind::Float;
                self.scan_exponent();
            }
        }

        if self.match_char('i') {
            kind = TokenKind::Imaginary;
        }

        self.add_token(kind, start);
    }

    /// Consume an exponent marker (`e`, `E`, `p`, `P`), an optional sign, and its digits.
    fn scan_exponent(&mut self) {
        self.advance();
        if self.peek().is_some_and(|c| matches!(c, '+' | '-'))
            && self.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.advance();
        }
        self.advance_while(|c| c.is_ascii_digit() || c == '_');
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{TokenKind, lex, lex_lossy};

    fn first_kind_and_text(source: &str) -> (TokenKind, String) {
        let tokens = lex(source).unwrap();
        (tokens[0].kind, tokens[0].text.clone())
    }

    #[test]
    fn test_numbers() {
        for (source, kind) in [
            ("42", TokenKind::Int),
            ("1_000_000", TokenKind::Int),
            ("0x1F", TokenKind::Int),
            ("0b1010", TokenKind::Int),
            ("0o17", TokenKind::Int),
            ("3.14", TokenKind::Float),
            ("1.", TokenKind::Float),
            (".5", TokenKind::Float),
            ("1e10", TokenKind::Float),
            ("6.02E+23", TokenKind::Float),
            ("0x1p-2", TokenKind::Float),
            ("2i", TokenKind::Imaginary),
            ("1.5e-3i", TokenKind::Imaginary),
        ] {
            assert_eq!(first_kind_and_text(source), (kind, source.to_string()), "lexing {source:?}");
        }
    }

    #[test]
    fn test_strings_and_runes() {
        assert_eq!(
            first_kind_and_text(r#""a \"quoted\" \\ word" rest"#),
            (TokenKind::String, r#""a \"quoted\" \\ word""#.to_string())
        );
        assert_eq!(first_kind_and_text(r"'\''"), (TokenKind::Rune, r"'\''".to_string()));
        assert_eq!(
            first_kind_and_text("`raw\nstring` x"),
            (TokenKind::RawString, "`raw\nstring`".to_string())
        );
    }

    #[test]
    fn test_block_comment_may_span_lines() {
        assert_eq!(
            first_kind_and_text("/* a\n * b\n */x"),
            (TokenKind::Comment, "/* a\n * b\n */".to_string())
        );
    }

    #[test]
    fn test_unterminated_string_stops_at_newline() {
        let (tokens, errors) = lex_lossy("s := \"abc\nnext");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "string literal not terminated");
        let string = tokens.iter().find(|t| t.kind == TokenKind::String).unwrap();
        assert_eq!(string.text, "\"abc");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Terminator));
    }

    #[test]
    fn test_unterminated_comment_and_raw_string() {
        let (_, errors) = lex_lossy("/* never closed");
        assert_eq!(errors[0].message, "comment not terminated");

        let (_, errors) = lex_lossy("`never closed");
        assert_eq!(errors[0].message, "raw string literal not terminated");

        let (_, errors) = lex_lossy("'x");
        assert_eq!(errors[0].message, "rune literal not terminated");
    }
}
