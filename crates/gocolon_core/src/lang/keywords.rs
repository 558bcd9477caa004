//! Define the reserved keyword vocabulary of Go.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! categories, and terminator behavior.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (`Func` is an identifier, not a keyword).
//! - This registry is intentionally **pure** (no token types/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use gocolon_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("return"), Some(KeywordId::Return));
//! assert!(keywords::ends_statement(KeywordId::Return));
//! assert!(!keywords::ends_statement(KeywordId::If));
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Const,
    Func,
    Import,
    Package,
    Type,
    Var,

    // Composite types
    Chan,
    Interface,
    Map,
    Struct,

    // Control flow
    Break,
    Case,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Go,
    Goto,
    If,
    Range,
    Return,
    Select,
    Switch,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    CompositeType,
    ControlFlow,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `ends_statement` marks the keywords after which a newline implies a terminator
///   (`break`, `continue`, `fallthrough`, `return`).
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub ends_statement: bool,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Const, "const", KeywordCategory::Declaration),
    info(KeywordId::Func, "func", KeywordCategory::Declaration),
    info(KeywordId::Import, "import", KeywordCategory::Declaration),
    info(KeywordId::Package, "package", KeywordCategory::Declaration),
    info(KeywordId::Type, "type", KeywordCategory::Declaration),
    info(KeywordId::Var, "var", KeywordCategory::Declaration),
    // Composite types
    info(KeywordId::Chan, "chan", KeywordCategory::CompositeType),
    info(KeywordId::Interface, "interface", KeywordCategory::CompositeType),
    info(KeywordId::Map, "map", KeywordCategory::CompositeType),
    info(KeywordId::Struct, "struct", KeywordCategory::CompositeType),
    // Control flow
    terminating(KeywordId::Break, "break"),
    info(KeywordId::Case, "case", KeywordCategory::ControlFlow),
    terminating(KeywordId::Continue, "continue"),
    info(KeywordId::Default, "default", KeywordCategory::ControlFlow),
    info(KeywordId::Defer, "defer", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    terminating(KeywordId::Fallthrough, "fallthrough"),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow),
    info(KeywordId::Go, "go", KeywordCategory::ControlFlow),
    info(KeywordId::Goto, "goto", KeywordCategory::ControlFlow),
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Range, "range", KeywordCategory::ControlFlow),
    terminating(KeywordId::Return, "return"),
    info(KeywordId::Select, "select", KeywordCategory::ControlFlow),
    info(KeywordId::Switch, "switch", KeywordCategory::ControlFlow),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Whether a newline directly after this keyword implies a statement terminator.
pub fn ends_statement(id: KeywordId) -> bool {
    info_for(id).ends_statement
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is a reserved word.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        ends_statement: false,
    }
}

const fn terminating(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    KeywordInfo {
        ends_statement: true,
        ..info(id, canonical, KeywordCategory::ControlFlow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_has_twenty_five_keywords() {
        assert_eq!(KEYWORDS.len(), 25);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("func"), Some(KeywordId::Func));
        assert_eq!(from_str("Func"), None);
        assert_eq!(from_str("fn"), None);
    }

    #[test]
    fn test_only_jump_keywords_end_statements() {
        let ending: Vec<&str> = KEYWORDS.iter().filter(|k| k.ends_statement).map(|k| k.canonical).collect();
        assert_eq!(ending, vec!["break", "continue", "fallthrough", "return"]);
    }
}
