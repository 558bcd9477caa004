//! Lexer for Go source text
//!
//! Handles tokenization including:
//! - Keywords and identifiers (Unicode letters allowed, as in Go)
//! - Numeric, rune, interpreted-string and raw-string literals
//! - Operators and punctuation (longest match against the registry)
//! - Layout on the hidden channel: whitespace, line terminators, block and line comments
//!
//! Lexing is **lossless**: concatenating the text of every token reproduces the source exactly. Problems are
//! reported as [`SyntaxError`]s while the offending text is still emitted as a token, so tools that only need
//! to copy the source through can keep going.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Channel, Token)
//! - `literals` - Number, string, rune, and comment scanning

mod literals;
pub mod tokens;

pub use tokens::{Channel, Token, TokenKind, keyword_id};

use crate::diagnostics::SyntaxError;
use crate::span::Span;
use gocolon_core::lang::punctuation::{self, MAX_SPELLING_LEN};

/// Lexer for Go source code.
///
/// Converts source text into a stream of tokens where every token records its index in the stream.
/// The token stream always ends with an `Eof` token.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
    errors: Vec<SyntaxError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns the tokens on success, or every error found on failure.
    pub fn tokenize(self) -> Result<Vec<Token>, Vec<SyntaxError>> {
        let (tokens, errors) = self.tokenize_lossy();
        if errors.is_empty() { Ok(tokens) } else { Err(errors) }
    }

    /// Tokenize the entire source code, returning the tokens together with any errors.
    ///
    /// The tokens are complete (lossless, `Eof`-terminated) even when errors were found.
    pub fn tokenize_lossy(mut self) -> (Vec<Token>, Vec<SyntaxError>) {
        while !self.is_at_end() {
            self.scan_token();
        }

        let end = self.current_pos;
        self.push(TokenKind::Eof, Span::new(end, end));

        (self.tokens, self.errors)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Hidden channel
            ' ' | '\t' | '\u{000C}' => {
                self.advance_while(|c| matches!(c, ' ' | '\t' | '\u{000C}'));
                self.add_token(TokenKind::Whitespace, start);
            }
            '\r' | '\n' => {
                self.advance_while(|c| matches!(c, '\r' | '\n'));
                self.add_token(TokenKind::Terminator, start);
            }
            '/' if self.match_char('/') => {
                self.advance_while(|c| !matches!(c, '\r' | '\n'));
                self.add_token(TokenKind::LineComment, start);
            }
            '/' if self.match_char('*') => self.scan_block_comment(start),

            // Literals
            '"' => self.scan_string(start),
            '`' => self.scan_raw_string(start),
            '\'' => self.scan_rune(start),
            '0'..='9' => self.scan_number(start, c),
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => self.scan_number(start, c),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start),

            // Operators and punctuation
            _ => self.scan_punctuation(start, c),
        }
    }

    // ========================================================================
    // Token emission
    // ========================================================================

    fn push(&mut self, kind: TokenKind, span: Span) {
        let index = self.tokens.len();
        let text = &self.source[span.start..span.end];
        self.tokens.push(Token::new(kind, text, index, span));
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.push(kind, Span::new(start, self.current_pos));
    }

    fn error(&mut self, message: impl Into<String>, start: usize) {
        self.errors
            .push(SyntaxError::lexical(message, Span::new(start, self.current_pos)));
    }

    // ========================================================================
    // Identifiers and punctuation
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        self.advance_while(is_ident_continue);

        let spelling = &self.source[start..self.current_pos];
        match keyword_id(spelling) {
            Some(id) => self.add_token(TokenKind::Keyword(id), start),
            None => self.add_token(TokenKind::Ident, start),
        }
    }

    /// Longest match against the punctuation registry. `first` has already been consumed.
    fn scan_punctuation(&mut self, start: usize, first: char) {
        for len in (1..=MAX_SPELLING_LEN).rev() {
            let Some(candidate) = self.source.get(start..start + len) else {
                continue;
            };
            if let Some(id) = punctuation::from_str(candidate) {
                // Punctuation is ASCII, so the remaining bytes are single chars.
                for _ in 1..len {
                    self.advance();
                }
                self.add_token(TokenKind::Punctuation(id), start);
                return;
            }
        }

        self.error(format!("unexpected character {first:?}"), start);
        self.add_token(TokenKind::Invalid, start);
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<SyntaxError>> {
    Lexer::new(source).tokenize()
}

/// Lex a source string, keeping the (lossless) tokens even when errors were found.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex_lossy(source: &str) -> (Vec<Token>, Vec<SyntaxError>) {
    let (tokens, errors) = Lexer::new(source).tokenize_lossy();
    tracing::debug!(tokens = tokens.len(), errors = errors.len(), "lexed source");
    (tokens, errors)
}

// ============================================================================
// TESTS
// ============================================================================
