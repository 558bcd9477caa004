//! Operator and punctuation vocabulary.
//!
//! Go's specification lists operators and punctuation as a single token class, and so does this registry:
//! arithmetic/bitwise/logical operators, assignment forms, delimiters, and separators.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact; the lexer performs longest-match by trying spellings of decreasing length
//!   (at most [`MAX_SPELLING_LEN`] bytes).
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use gocolon_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("&^="), Some(PunctuationId::AndNotAssign));
//! assert_eq!(punctuation::as_str(PunctuationId::Define), ":=");
//! assert!(punctuation::ends_statement(PunctuationId::RBrace));
//! ```

/// Longest spelling in [`PUNCTUATION`], in bytes.
pub const MAX_SPELLING_LEN: usize = 3;

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// `+ - * / %`, `++ --`.
    Arithmetic,
    /// `& | ^ << >> &^ ~`.
    Bitwise,
    /// `== != < <= > >=`.
    Comparison,
    /// `&& || ! <-`.
    Logical,
    /// `=`, `:=` and the compound assignment forms.
    Assignment,
    /// Brackets and braces.
    Delimiter,
    /// `, ; : . ...`.
    Separator,
}

/// Stable identifier for operator and punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Inc,
    Dec,

    // Bitwise
    Amp,
    Pipe,
    Caret,
    Shl,
    Shr,
    AndNot,
    Tilde,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical / channel
    AndAnd,
    OrOr,
    Not,
    Arrow,

    // Assignment
    Assign,
    Define,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
    PercentAssign,
    AmpAssign,
    PipeAssign,
    CaretAssign,
    ShlAssign,
    ShrAssign,
    AndNotAssign,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    // Separators
    Comma,
    Semicolon,
    Colon,
    Dot,
    Ellipsis,
}

/// Metadata for a punctuation token.
///
/// ## Notes
/// - `ends_statement` marks the tokens after which a newline implies a terminator (`++ -- ) ] }`).
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    pub ends_statement: bool,
}

/// Registry of all operator and punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Arithmetic
    info(PunctuationId::Plus, "+", PunctuationCategory::Arithmetic),
    info(PunctuationId::Minus, "-", PunctuationCategory::Arithmetic),
    info(PunctuationId::Star, "*", PunctuationCategory::Arithmetic),
    info(PunctuationId::Slash, "/", PunctuationCategory::Arithmetic),
    info(PunctuationId::Percent, "%", PunctuationCategory::Arithmetic),
    terminating(PunctuationId::Inc, "++", PunctuationCategory::Arithmetic),
    terminating(PunctuationId::Dec, "--", PunctuationCategory::Arithmetic),
    // Bitwise
    info(PunctuationId::Amp, "&", PunctuationCategory::Bitwise),
    info(PunctuationId::Pipe, "|", PunctuationCategory::Bitwise),
    info(PunctuationId::Caret, "^", PunctuationCategory::Bitwise),
    info(PunctuationId::Shl, "<<", PunctuationCategory::Bitwise),
    info(PunctuationId::Shr, ">>", PunctuationCategory::Bitwise),
    info(PunctuationId::AndNot, "&^", PunctuationCategory::Bitwise),
    info(PunctuationId::Tilde, "~", PunctuationCategory::Bitwise),
    // Comparison
    info(PunctuationId::EqEq, "==", PunctuationCategory::Comparison),
    info(PunctuationId::NotEq, "!=", PunctuationCategory::Comparison),
    info(PunctuationId::Lt, "<", PunctuationCategory::Comparison),
    info(PunctuationId::LtEq, "<=", PunctuationCategory::Comparison),
    info(PunctuationId::Gt, ">", PunctuationCategory::Comparison),
    info(PunctuationId::GtEq, ">=", PunctuationCategory::Comparison),
    // Logical / channel
    info(PunctuationId::AndAnd, "&&", PunctuationCategory::Logical),
    info(PunctuationId::OrOr, "||", PunctuationCategory::Logical),
    info(PunctuationId::Not, "!", PunctuationCategory::Logical),
    info(PunctuationId::Arrow, "<-", PunctuationCategory::Logical),
    // Assignment
    info(PunctuationId::Assign, "=", PunctuationCategory::Assignment),
    info(PunctuationId::Define, ":=", PunctuationCategory::Assignment),
    info(PunctuationId::PlusAssign, "+=", PunctuationCategory::Assignment),
    info(PunctuationId::MinusAssign, "-=", PunctuationCategory::Assignment),
    info(PunctuationId::StarAssign, "*=", PunctuationCategory::Assignment),
    info(PunctuationId::SlashAssign, "/=", PunctuationCategory::Assignment),
    info(PunctuationId::PercentAssign, "%=", PunctuationCategory::Assignment),
    info(PunctuationId::AmpAssign, "&=", PunctuationCategory::Assignment),
    info(PunctuationId::PipeAssign, "|=", PunctuationCategory::Assignment),
    info(PunctuationId::CaretAssign, "^=", PunctuationCategory::Assignment),
    info(PunctuationId::ShlAssign, "<<=", PunctuationCategory::Assignment),
    info(PunctuationId::ShrAssign, ">>=", PunctuationCategory::Assignment),
    info(PunctuationId::AndNotAssign, "&^=", PunctuationCategory::Assignment),
    // Delimiters
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    terminating(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    terminating(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    terminating(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
    // Separators
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator),
    info(PunctuationId::Dot, ".", PunctuationCategory::Separator),
    info(PunctuationId::Ellipsis, "...", PunctuationCategory::Separator),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Whether a newline directly after this token implies a statement terminator.
pub fn ends_statement(id: PunctuationId) -> bool {
    info_for(id).ends_statement
}

/// Return the opening delimiter matched by a closing one, or `None` for anything else.
pub fn opener_of(id: PunctuationId) -> Option<PunctuationId> {
    match id {
        PunctuationId::RParen => Some(PunctuationId::LParen),
        PunctuationId::RBracket => Some(PunctuationId::LBracket),
        PunctuationId::RBrace => Some(PunctuationId::LBrace),
        _ => None,
    }
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category,
        ends_statement: false,
    }
}

const fn terminating(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo {
        ends_statement: true,
        ..info(id, canonical, category)
    }
}
