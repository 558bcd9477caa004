//! Go language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords and operator/punctuation
//! tokens.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `PunctuationId`) and look up spellings/metadata via
//! registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token types, no IO, no side effects.
//! - The lexer enforces syntax; registries provide spellings and metadata for shared use (diagnostics, token
//!   classification, terminator insertion).
//!
//! ## Examples
//! ```rust
//! use gocolon_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("func"), Some(KeywordId::Func));
//! assert_eq!(keywords::as_str(KeywordId::Func), "func");
//! ```

pub mod keywords;
pub mod punctuation;
