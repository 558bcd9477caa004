//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use gocolon_core::lang::keywords::{self, KeywordId};
use gocolon_core::lang::punctuation::{self, PunctuationId};

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` if this is a basic literal (number, rune, or string).
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Float
                | TokenKind::Imaginary
                | TokenKind::Rune
                | TokenKind::String
                | TokenKind::RawString
        )
    }

    /// Return `true` if a line break directly after this token implies a statement terminator.
    ///
    /// That is the case for identifiers, basic literals, `break`/`continue`/`fallthrough`/`return`,
    /// and `++ -- ) ] }`.
    pub fn ends_statement(&self) -> bool {
        match self {
            TokenKind::Ident => true,
            TokenKind::Keyword(id) => keywords::ends_statement(*id),
            TokenKind::Punctuation(id) => punctuation::ends_statement(*id),
            kind => kind.is_literal(),
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }

    /// Convenience wrapper for `self.kind.is_punctuation(id)`.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        self.kind.is_punctuation(id)
    }

    /// Convenience wrapper for `self.kind.ends_statement()`.
    pub fn ends_statement(&self) -> bool {
        self.kind.ends_statement()
    }
}
