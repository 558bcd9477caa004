//! Token types for the Go lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Punctuation(PunctuationId)` for operators and punctuation
//!
//! Every byte of the source ends up in exactly one token. Whitespace, line terminators, and comments are kept
//! on the [`Channel::Hidden`] channel so lookahead can still see them.
//!
//! ## Notes
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::span::Span;
use gocolon_core::lang::keywords::{self, KeywordId};
use gocolon_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Int,
    Float,
    Imaginary,
    Rune,
    String,
    RawString,

    // ========== Hidden channel ==========
    /// Spaces, tabs and form feeds.
    Whitespace,
    /// A run of raw `\r` / `\n` characters.
    Terminator,
    /// A `/* ... */` comment, possibly spanning lines.
    Comment,
    /// A `// ...` comment, excluding the line break.
    LineComment,

    // ========== Special ==========
    /// Text the lexer could not classify; kept so no source byte is dropped.
    Invalid,
    Eof,
}

impl TokenKind {
    /// The channel tokens of this kind are emitted on.
    pub fn channel(self) -> Channel {
        match self {
            TokenKind::Whitespace | TokenKind::Terminator | TokenKind::Comment | TokenKind::LineComment => {
                Channel::Hidden
            }
            _ => Channel::Default,
        }
    }
}

/// Token channel.
///
/// The default channel carries tokens the grammar matches; the hidden channel carries layout (whitespace,
/// newlines, comments) that only matters for lookahead and for reproducing the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Default,
    Hidden,
}

/// A token with its kind, channel, lexeme, position in the stream, and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub channel: Channel,
    pub text: String,
    /// Ordinal position in the full token sequence, hidden tokens included.
    pub index: usize,
    pub span: Span,
}

impl Token {
    /// Construct a new token; the channel follows from the kind.
    pub fn new(kind: TokenKind, text: impl Into<String>, index: usize, span: Span) -> Self {
        Self {
            kind,
            channel: kind.channel(),
            text: text.into(),
            index,
            span,
        }
    }

    /// The lexeme, or `None` for the end-of-file token, which has no text.
    pub fn text(&self) -> Option<&str> {
        match self.kind {
            TokenKind::Eof => None,
            _ => Some(&self.text),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.channel == Channel::Hidden
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
