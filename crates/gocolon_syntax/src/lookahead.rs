//! Terminator lookahead: the lexical guards behind implicit statement terminators.
//!
//! Go lets a newline end a statement. Whether a terminator belongs between two significant tokens depends on
//! what sits on the hidden channel between them, which the grammar cannot see. [`Lookahead`] answers those
//! questions for one cursor position:
//!
//! - [`Lookahead::line_terminator_ahead`]: is the current token preceded by a line break?
//! - [`Lookahead::no_terminator_between`]: is the `k`-th token free of a preceding `"\n"`?
//! - [`Lookahead::no_terminator_after_params`]: does a parenthesized list stay on the line of what follows it?
//! - [`Lookahead::check_previous_token_text`]: does the token at lookahead offset 1 spell a given text?
//!
//! ## Notes
//! - A `Lookahead` is a `Copy` view over a borrowed stream and a cursor. Every predicate takes `&self` and
//!   only reads, so callers may probe the same position any number of times while backtracking.
//! - Offsets are 1-based and count default-channel tokens from the cursor; offset 1 is the current token.

use thiserror::Error;

use crate::diagnostics::SyntaxError;
use crate::lexer::{Channel, Token, TokenKind};
use crate::span::Span;
use crate::stream::TokenStream;
use gocolon_core::lang::punctuation::PunctuationId;

/// Failure of a bounded lookahead scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookaheadError {
    /// The stream ended before the parenthesis opened at `open` was closed.
    #[error("unbalanced parentheses: `(` is never closed")]
    UnbalancedParens { open: Span },
}

impl LookaheadError {
    pub fn span(&self) -> Span {
        match self {
            LookaheadError::UnbalancedParens { open } => *open,
        }
    }
}

impl From<LookaheadError> for SyntaxError {
    fn from(err: LookaheadError) -> Self {
        let span = err.span();
        SyntaxError::syntax(err.to_string(), span).with_hint("add the missing `)`")
    }
}

/// Read-only view of a token stream at a fixed cursor.
pub struct Lookahead<'s, S: TokenStream + ?Sized> {
    stream: &'s S,
    cursor: usize,
}

impl<S: TokenStream + ?Sized> Clone for Lookahead<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: TokenStream + ?Sized> Copy for Lookahead<'_, S> {}

impl<'s, S: TokenStream + ?Sized> Lookahead<'s, S> {
    /// View `stream` with the parser positioned on the token at absolute index `cursor`.
    pub fn new(stream: &'s S, cursor: usize) -> Self {
        Self { stream, cursor }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The token the parser is currently matching.
    pub fn current(&self) -> Option<&'s Token> {
        self.stream.get(self.cursor)
    }

    /// The `k`-th significant token from the cursor (1-based).
    pub fn lt(&self, k: usize) -> Option<&'s Token> {
        self.stream.lt(self.cursor, k)
    }

    /// Whether the current token is preceded by a line break on the hidden channel.
    ///
    /// Looks at the token just before the cursor, hopping over at most one whitespace token. A raw terminator or
    /// a block comment containing a line break counts. The start of the stream counts as a line break too.
    pub fn line_terminator_ahead(&self) -> bool {
        let Some(mut index) = self.cursor.checked_sub(1) else {
            return true;
        };
        let Some(mut token) = self.stream.get(index) else {
            return true;
        };
        if token.channel != Channel::Hidden {
            return false;
        }
        if token.kind == TokenKind::Terminator {
            return true;
        }
        if token.kind == TokenKind::Whitespace {
            index = match index.checked_sub(1) {
                Some(previous) => previous,
                None => return true,
            };
            token = match self.stream.get(index) {
                Some(previous) => previous,
                None => return true,
            };
        }
        match token.kind {
            TokenKind::Terminator => true,
            TokenKind::Comment => token.text.contains(['\r', '\n']),
            _ => false,
        }
    }

    /// Whether no hidden token directly left of the `offset`-th significant token contains `"\n"`.
    ///
    /// Vacuously true when the offset does not resolve or there are no hidden tokens. A lone `\r` does not count.
    pub fn no_terminator_between(&self, offset: usize) -> bool {
        let Some(target) = self.lt(offset) else {
            return true;
        };
        !self
            .stream
            .hidden_tokens_to_left(target.index)
            .iter()
            .any(|t| t.text.contains('\n'))
    }

    /// Offset of the `)` matching the `(` at `offset`, or `None` if that token is not `(`.
    ///
    /// Nested parentheses are skipped. The scan stops at end of stream instead of running on.
    pub fn closing_paren_offset(&self, offset: usize) -> Result<Option<usize>, LookaheadError> {
        let Some(open) = self.lt(offset) else {
            return Ok(None);
        };
        if !open.is_punctuation(PunctuationId::LParen) {
            return Ok(None);
        }

        let unbalanced = LookaheadError::UnbalancedParens { open: open.span };
        let mut depth = 1usize;
        let mut current = offset;
        let mut index = open.index + 1;
        while depth > 0 {
            let token = self.stream.get(index).ok_or_else(|| unbalanced.clone())?;
            index += 1;
            if token.channel != Channel::Default {
                continue;
            }
            current += 1;
            match token.kind {
                TokenKind::Eof => return Err(unbalanced),
                TokenKind::Punctuation(PunctuationId::LParen) => depth += 1,
                TokenKind::Punctuation(PunctuationId::RParen) => depth -= 1,
                _ => {}
            }
        }
        Ok(Some(current))
    }

    /// Whether no line break follows the parenthesized list starting at `offset`.
    ///
    /// Vacuously true when the token at `offset` is not `(`. Otherwise the matching `)` is found and
    /// [`no_terminator_between`](Self::no_terminator_between) is asked about the token after it.
    pub fn no_terminator_after_params(&self, offset: usize) -> Result<bool, LookaheadError> {
        match self.closing_paren_offset(offset)? {
            Some(close) => Ok(self.no_terminator_between(close + 1)),
            None => Ok(true),
        }
    }

    /// Whether the token at lookahead offset 1 has exactly the text `text`.
    ///
    /// The end-of-file token has no text and never matches.
    pub fn check_previous_token_text(&self, text: &str) -> bool {
        self.lt(1).and_then(Token::text) == Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use crate::stream::TokenBuffer;

    /// Hand-built stream: each entry becomes one token, with spans laid end to end.
    fn mock(parts: &[(TokenKind, &str)]) -> Vec<Token> {
        let mut offset = 0;
        parts
            .iter()
            .enumerate()
            .map(|(index, (kind, text))| {
                let span = Span::new(offset, offset + text.len());
                offset += text.len();
                Token::new(*kind, *text, index, span)
            })
            .collect()
    }

    fn buffer(source: &str) -> TokenBuffer {
        TokenBuffer::new(lex(source).unwrap())
    }

    /// Index of the first significant token spelled `text`.
    fn find(stream: &TokenBuffer, text: &str) -> usize {
        stream
            .tokens()
            .iter()
            .position(|t| !t.is_hidden() && t.text == text)
            .unwrap()
    }

    const IDENT: TokenKind = TokenKind::Ident;
    const WS: TokenKind = TokenKind::Whitespace;
    const NL: TokenKind = TokenKind::Terminator;
    const COMMENT: TokenKind = TokenKind::Comment;
    const LINE_COMMENT: TokenKind = TokenKind::LineComment;
    const LPAREN: TokenKind = TokenKind::Punctuation(PunctuationId::LParen);
    const RPAREN: TokenKind = TokenKind::Punctuation(PunctuationId::RParen);

    // ---- line_terminator_ahead ----

    #[test]
    fn test_start_of_stream_is_a_terminator() {
        let tokens = mock(&[(IDENT, "a"), (TokenKind::Eof, "")]);
        assert!(Lookahead::new(tokens.as_slice(), 0).line_terminator_ahead());

        let empty: Vec<Token> = Vec::new();
        assert!(Lookahead::new(empty.as_slice(), 0).line_terminator_ahead());
    }

    #[test]
    fn test_default_channel_neighbour_is_not_a_terminator() {
        let tokens = mock(&[(IDENT, "a"), (TokenKind::Punctuation(PunctuationId::Plus), "+"), (IDENT, "b")]);
        assert!(!Lookahead::new(tokens.as_slice(), 1).line_terminator_ahead());
        assert!(!Lookahead::new(tokens.as_slice(), 2).line_terminator_ahead());
    }

    #[test]
    fn test_raw_terminator() {
        let tokens = mock(&[(IDENT, "a"), (NL, "\n"), (IDENT, "b")]);
        assert!(Lookahead::new(tokens.as_slice(), 2).line_terminator_ahead());
    }

    #[test]
    fn test_terminator_behind_one_whitespace() {
        let tokens = mock(&[(IDENT, "a"), (NL, "\n"), (WS, "\t"), (IDENT, "b")]);
        assert!(Lookahead::new(tokens.as_slice(), 3).line_terminator_ahead());
    }

    #[test]
    fn test_whitespace_at_start_of_stream() {
        let tokens = mock(&[(WS, "  "), (IDENT, "a")]);
        assert!(Lookahead::new(tokens.as_slice(), 1).line_terminator_ahead());
    }

    #[test]
    fn test_plain_whitespace_is_not_a_terminator() {
        let tokens = mock(&[(IDENT, "a"), (WS, " "), (IDENT, "b")]);
        assert!(!Lookahead::new(tokens.as_slice(), 2).line_terminator_ahead());
    }

    #[test]
    fn test_block_comments() {
        let single = mock(&[(IDENT, "a"), (WS, " "), (COMMENT, "/* c */"), (WS, " "), (IDENT, "b")]);
        assert!(!Lookahead::new(single.as_slice(), 4).line_terminator_ahead());

        let multi = mock(&[(IDENT, "a"), (WS, " "), (COMMENT, "/* c\n */"), (WS, " "), (IDENT, "b")]);
        assert!(Lookahead::new(multi.as_slice(), 4).line_terminator_ahead());

        let adjacent = mock(&[(IDENT, "a"), (COMMENT, "/*\r*/"), (IDENT, "b")]);
        assert!(Lookahead::new(adjacent.as_slice(), 2).line_terminator_ahead());
    }

    #[test]
    fn test_line_comment_alone_is_not_a_terminator() {
        let tokens = mock(&[(IDENT, "a"), (WS, " "), (LINE_COMMENT, "// c"), (TokenKind::Eof, "")]);
        assert!(!Lookahead::new(tokens.as_slice(), 3).line_terminator_ahead());
    }

    #[test]
    fn test_only_one_whitespace_hop() {
        // Two whitespace tokens in a row never come out of the lexer, but the hop count is fixed regardless.
        let tokens = mock(&[(IDENT, "a"), (NL, "\n"), (WS, " "), (WS, " "), (IDENT, "b")]);
        assert!(!Lookahead::new(tokens.as_slice(), 4).line_terminator_ahead());
    }

    #[test]
    fn test_line_terminator_ahead_on_lexed_source() {
        let stream = buffer("x := 1\n\ty++ /* note\n */ z");
        assert!(Lookahead::new(&stream, find(&stream, "y")).line_terminator_ahead());
        assert!(!Lookahead::new(&stream, find(&stream, "++")).line_terminator_ahead());
        assert!(Lookahead::new(&stream, find(&stream, "z")).line_terminator_ahead());
        assert!(!Lookahead::new(&stream, find(&stream, ":=")).line_terminator_ahead());
    }

    // ---- no_terminator_between ----

    #[test]
    fn test_no_hidden_tokens_means_no_terminator() {
        let tokens = mock(&[(IDENT, "a"), (LPAREN, "("), (IDENT, "b")]);
        let view = Lookahead::new(tokens.as_slice(), 0);
        assert!(view.no_terminator_between(1));
        assert!(view.no_terminator_between(2));
        assert!(view.no_terminator_between(3));
    }

    #[test]
    fn test_newline_in_hidden_tokens() {
        let tokens = mock(&[(IDENT, "a"), (WS, " "), (COMMENT, "/* x */"), (NL, "\n"), (IDENT, "b")]);
        let view = Lookahead::new(tokens.as_slice(), 0);
        assert!(!view.no_terminator_between(2));

        let comment = mock(&[(IDENT, "a"), (COMMENT, "/* x\n */"), (IDENT, "b")]);
        assert!(!Lookahead::new(comment.as_slice(), 0).no_terminator_between(2));
    }

    #[test]
    fn test_lone_carriage_return_is_not_a_newline() {
        let tokens = mock(&[(IDENT, "a"), (NL, "\r"), (IDENT, "b")]);
        assert!(Lookahead::new(tokens.as_slice(), 0).no_terminator_between(2));
    }

    #[test]
    fn test_unresolvable_offset() {
        let tokens = mock(&[(IDENT, "a")]);
        let view = Lookahead::new(tokens.as_slice(), 0);
        assert!(view.no_terminator_between(0));
        assert!(view.no_terminator_between(7));
    }

    // ---- no_terminator_after_params ----

    #[test]
    fn test_not_a_paren_is_vacuously_true() {
        let stream = buffer("f\n\n(a)\nx");
        let view = Lookahead::new(&stream, 0);
        assert_eq!(view.no_terminator_after_params(1), Ok(true));
        assert_eq!(view.closing_paren_offset(1), Ok(None));

        let stream = buffer("x )\n y");
        assert_eq!(Lookahead::new(&stream, 0).no_terminator_after_params(2), Ok(true));
    }

    #[test]
    fn test_nested_parens_are_skipped() {
        let stream = buffer("f((a,b),c) x");
        let view = Lookahead::new(&stream, 0);
        // f ( ( a , b ) , c ) x
        assert_eq!(view.closing_paren_offset(2), Ok(Some(10)));
        assert_eq!(view.closing_paren_offset(3), Ok(Some(7)));
        assert_eq!(view.no_terminator_after_params(2), Ok(true));

        let stream = buffer("f((a,b),c)\nx");
        assert_eq!(Lookahead::new(&stream, 0).no_terminator_after_params(2), Ok(false));
    }

    #[test]
    fn test_newlines_inside_the_list_do_not_matter() {
        let stream = buffer("foo(\n a, b\n)x");
        let view = Lookahead::new(&stream, 0);
        assert_eq!(view.no_terminator_after_params(2), Ok(true));

        let stream = buffer("foo(\n a, b\n)\n x");
        assert_eq!(Lookahead::new(&stream, 0).no_terminator_after_params(2), Ok(false));

        let stream = buffer("foo(a) /* c */ x");
        assert_eq!(Lookahead::new(&stream, 0).no_terminator_after_params(2), Ok(true));
    }

    #[test]
    fn test_close_at_end_of_stream() {
        // After the `)` comes EOF with no hidden tokens in between.
        let stream = buffer("(a)");
        assert_eq!(Lookahead::new(&stream, 0).no_terminator_after_params(1), Ok(true));

        let stream = buffer("(a)\n");
        assert_eq!(Lookahead::new(&stream, 0).no_terminator_after_params(1), Ok(false));
    }

    #[test]
    fn test_unbalanced_parens_fail_closed() {
        let stream = buffer("f((a)\n x");
        let err = Lookahead::new(&stream, 0).no_terminator_after_params(2).unwrap_err();
        assert_eq!(err, LookaheadError::UnbalancedParens { open: Span::new(1, 2) });

        // No EOF token at all: the scan stops at the end of the slice.
        let tokens = mock(&[(IDENT, "f"), (LPAREN, "("), (LPAREN, "("), (RPAREN, ")")]);
        let err = Lookahead::new(tokens.as_slice(), 0).no_terminator_after_params(2);
        assert!(matches!(err, Err(LookaheadError::UnbalancedParens { .. })));
    }

    #[test]
    fn test_lookahead_error_becomes_syntax_error() {
        let err: SyntaxError = LookaheadError::UnbalancedParens { open: Span::new(3, 4) }.into();
        assert_eq!(err.span, Span::new(3, 4));
        assert_eq!(err.message, "unbalanced parentheses: `(` is never closed");
        assert_eq!(err.hints, vec!["add the missing `)`".to_string()]);
    }

    // ---- check_previous_token_text ----

    #[test]
    fn test_check_previous_token_text() {
        let stream = buffer("a ; b");
        let semi = find(&stream, ";");
        assert!(Lookahead::new(&stream, semi).check_previous_token_text(";"));
        assert!(!Lookahead::new(&stream, semi).check_previous_token_text(";;"));
        assert!(Lookahead::new(&stream, 0).check_previous_token_text("a"));
        assert!(!Lookahead::new(&stream, 0).check_previous_token_text("b"));
        // Cursor on hidden whitespace: offset 1 is the next significant token.
        assert!(Lookahead::new(&stream, 1).check_previous_token_text(";"));
    }

    #[test]
    fn test_eof_text_is_absent() {
        let stream = buffer("a");
        let view = Lookahead::new(&stream, 1);
        assert!(view.lt(1).unwrap().is_eof());
        assert!(!view.check_previous_token_text(""));

        let empty: Vec<Token> = Vec::new();
        assert!(!Lookahead::new(empty.as_slice(), 0).check_previous_token_text(""));
    }

    // ---- properties shared by all predicates ----

    #[test]
    fn test_predicates_are_repeatable() {
        let stream = buffer("func (r T) m(a int,\n\tb int) {\n\treturn /* x\n */ r\n}\n");
        for cursor in 0..stream.tokens().len() {
            let view = Lookahead::new(&stream, cursor);
            let copy = view;
            for offset in 0..4 {
                assert_eq!(view.no_terminator_between(offset), copy.no_terminator_between(offset));
                assert_eq!(view.no_terminator_after_params(offset), view.no_terminator_after_params(offset));
            }
            assert_eq!(view.line_terminator_ahead(), copy.line_terminator_ahead());
            assert_eq!(view.check_previous_token_text("r"), view.check_previous_token_text("r"));
        }
    }

    #[test]
    fn test_current_and_lt() {
        let stream = buffer("a \n b");
        let view = Lookahead::new(&stream, 4);
        assert_eq!(view.cursor(), 4);
        assert_eq!(view.current().map(|t| t.text.as_str()), Some("b"));
        assert_eq!(view.lt(1).map(|t| t.index), Some(4));
        assert!(view.lt(2).unwrap().is_eof());
    }
}
