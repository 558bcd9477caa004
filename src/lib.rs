#![forbid(unsafe_code)]
//! gocolon: make Go's implicit statement terminators explicit
//!
//! Go lets a line break end a statement. This crate lexes Go source, asks the terminator lookahead from
//! `gocolon_syntax` where those implicit terminators are, and writes the source back out with an explicit `;`
//! at each of them. Comments and whitespace are copied through untouched.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod colonize;
pub mod version;

pub use gocolon_syntax::diagnostics;
pub use gocolon_syntax::lexer;
pub use gocolon_syntax::lookahead;

pub use colonize::{
    ColonizeConfig, ColonizeError, Colonized, Colonizer, OnParseError, check_colonized, colonize_source,
    colonize_source_with_config,
};
