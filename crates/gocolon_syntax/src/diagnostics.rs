//! Diagnostics for the gocolon syntax frontend.
//!
//! Every problem the lexer or the colonizer finds is a [`SyntaxError`]: a message, a [`Span`] into the source,
//! an [`ErrorKind`], and optional hints. Errors implement [`miette::Diagnostic`], so callers can attach the source
//! text and render them with context:
//!
//! ```rust,no_run
//! use gocolon_syntax::lexer;
//!
//! let source = "x := \"unterminated\n";
//! if let Err(errors) = lexer::lex(source) {
//!     for error in errors {
//!         let report = miette::Report::new(error).with_source_code(source.to_string());
//!         eprintln!("{report:?}");
//!     }
//! }
//! ```

use std::fmt;

use miette::{Diagnostic, LabeledSpan};
use thiserror::Error;

use crate::span::{Span, line_col};

/// What went wrong, coarsely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The lexer could not form a token.
    Lexical,
    /// The token sequence is not well-formed (delimiters, signatures).
    Syntax,
}

impl ErrorKind {
    /// Stable diagnostic code for this kind.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "gocolon::lexical",
            ErrorKind::Syntax => "gocolon::syntax",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// A syntax-level error with location information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub hints: Vec<String>,
}

impl SyntaxError {
    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            kind: ErrorKind::Lexical,
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            kind: ErrorKind::Syntax,
            hints: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Format as `[path:]line:column message`, the one-line form used in logs.
    pub fn one_line(&self, path: Option<&str>, source: &str) -> String {
        let (line, column) = line_col(source, self.span.start);
        match path {
            Some(path) => format!("{path}:{line}:{column} {}", self.message),
            None => format!("{line}:{column} {}", self.message),
        }
    }
}

impl Diagnostic for SyntaxError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() {
            None
        } else {
            Some(Box::new(self.hints.join("\n")))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.kind.to_string()),
            self.span,
        ))))
    }
}
