//! Property-based tests for gocolon
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use gocolon::colonize::{ColonizeConfig, Colonizer, OnParseError};
use gocolon_syntax::lexer;
use gocolon_syntax::lookahead::Lookahead;
use gocolon_syntax::stream::TokenBuffer;
use proptest::prelude::*;

fn tolerant() -> Colonizer {
    Colonizer::new(ColonizeConfig::new().with_on_parse_error(OnParseError::Ignore))
}

/// Remove every `;` so outputs can be compared against inputs.
fn without_semicolons(s: &str) -> String {
    s.chars().filter(|&c| c != ';').collect()
}

// Strategy for identifiers that are not Go keywords
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}".prop_filter("Not a keyword", |s| gocolon_core::lang::keywords::from_str(s).is_none())
}

// Strategy for one line of Go-ish statement text
fn statement_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (ident_strategy(), 0u32..1000).prop_map(|(name, n)| format!("{name} := {n}")),
        (ident_strategy(), ident_strategy()).prop_map(|(f, a)| format!("{f}({a})")),
        ident_strategy().prop_map(|name| format!("{name}++")),
        Just("return".to_string()),
        Just("x = y /* note */".to_string()),
        Just("// a comment".to_string()),
        Just("if ok {".to_string()),
        Just("}".to_string()),
    ]
}

// Strategy for what separates two statements
fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("\n"),
        Just("\n\n\t"),
        Just("\r\n"),
        Just(" "),
        Just("; "),
        Just(" /* multi\nline */ "),
    ]
}

fn program_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((statement_strategy(), separator_strategy()), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(stmt, sep)| format!("{stmt}{sep}"))
            .collect()
    })
}

proptest! {
    /// Property: colonizing its own output changes nothing
    #[test]
    fn colonize_is_idempotent(source in program_strategy()) {
        let once = tolerant().colonize_str(&source, None).unwrap();
        let twice = tolerant().colonize_str(&once.output, None).unwrap();
        prop_assert_eq!(&twice.output, &once.output);
        prop_assert_eq!(twice.inserted, 0);
    }

    /// Property: the only change is added `;` characters
    #[test]
    fn colonize_only_adds_semicolons(source in program_strategy()) {
        let result = tolerant().colonize_str(&source, None).unwrap();
        prop_assert_eq!(without_semicolons(&result.output), without_semicolons(&source));
        prop_assert_eq!(result.output.len(), source.len() + result.inserted);
    }

    /// Property: lexing is lossless and indices follow stream order, on any input
    #[test]
    fn lexing_is_lossless(source in "\\PC{0,64}") {
        let (tokens, _) = lexer::lex_lossy(&source);
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(rebuilt, source);
        for (i, token) in tokens.iter().enumerate() {
            prop_assert_eq!(token.index, i);
        }
        prop_assert!(tokens.last().is_some_and(|t| t.is_eof()));
    }

    /// Property: the predicates answer the same way every time they are asked
    #[test]
    fn predicates_are_repeatable(source in program_strategy(), offset in 0usize..6) {
        let (tokens, _) = lexer::lex_lossy(&source);
        let stream = TokenBuffer::new(tokens);
        for cursor in 0..stream.tokens().len() {
            let view = Lookahead::new(&stream, cursor);
            prop_assert_eq!(view.line_terminator_ahead(), view.line_terminator_ahead());
            prop_assert_eq!(view.no_terminator_between(offset), view.no_terminator_between(offset));
            prop_assert_eq!(view.no_terminator_after_params(offset), view.no_terminator_after_params(offset));
            prop_assert_eq!(view.check_previous_token_text(";"), view.check_previous_token_text(";"));
        }
    }

    /// Property: the first token of any stream sits after a virtual line break
    #[test]
    fn start_of_stream_is_a_terminator(source in program_strategy()) {
        let stream = TokenBuffer::new(lexer::lex_lossy(&source).0);
        prop_assert!(Lookahead::new(&stream, 0).line_terminator_ahead());
    }
}
