//! Shared syntax frontend for gocolon: lexer, token stream, terminator lookahead, diagnostics.
//!
//! This crate is dependency-light and has no notion of files, configuration, or output. It turns Go source into a
//! token stream that keeps layout on a hidden channel, and answers lexical questions about that stream.
//!
//! ## Notes
//! - No AST is built: the lookahead predicates work directly on tokens.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `gocolon_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use gocolon_syntax::lexer;
//! use gocolon_syntax::lookahead::Lookahead;
//! use gocolon_syntax::stream::TokenBuffer;
//!
//! let stream = TokenBuffer::new(lexer::lex("x := 1\ny++\n").unwrap());
//! let y = stream.tokens().iter().position(|t| t.text == "y").unwrap();
//! assert!(Lookahead::new(&stream, y).line_terminator_ahead());
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod lookahead;
pub mod span;
pub mod stream;
pub mod token_helpers;

pub use diagnostics::{ErrorKind, SyntaxError};
pub use lookahead::{Lookahead, LookaheadError};
pub use span::Span;
pub use stream::{TokenBuffer, TokenStream};
