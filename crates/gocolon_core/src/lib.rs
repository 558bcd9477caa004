//! Provide the canonical Go language vocabulary shared by the gocolon lexer and tooling.
//!
//! This crate is intentionally small and dependency-free. It contains the reserved keywords and the
//! operator/punctuation tokens of Go as registry tables with stable IDs, so the lexer and the colonizer never need
//! stringly-typed checks.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no global state, and no lexer/parser types.
//! - Metadata that drives implicit terminator insertion (which tokens may end a statement) lives next to the
//!   spellings, so there is a single place to consult.

pub mod lang;
