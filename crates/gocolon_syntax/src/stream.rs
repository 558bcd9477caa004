//! Token streams with random access to the hidden channel.
//!
//! [`TokenStream`] is the narrow capability the terminator lookahead needs: indexed access, the hidden tokens
//! left of an index, and significant-token lookahead from a cursor. [`TokenBuffer`] is the fully-populated,
//! immutable implementation built from lexer output.
//!
//! ## Notes
//! - A *cursor* is the absolute index of the token the parser is currently matching. Streams never own a
//!   cursor; callers pass one in, so a stream can be shared by any number of speculative readers.

use crate::lexer::{Channel, Token};

/// Read-only, randomly indexable sequence of tokens, hidden channel included.
///
/// ## Notes
/// - Implementations must keep `get(i).index == i`.
/// - `hidden_tokens_to_left` returns every hidden token between the previous default-channel token and
///   `index` (exclusive), in stream order. An out-of-range index yields an empty slice.
pub trait TokenStream {
    /// Number of tokens, hidden ones included.
    fn len(&self) -> usize;

    /// The token at an absolute index.
    fn get(&self, index: usize) -> Option<&Token>;

    /// The run of hidden tokens immediately to the left of `index`.
    fn hidden_tokens_to_left(&self, index: usize) -> &[Token];

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve the `k`-th default-channel token at or after `cursor` (1-based).
    ///
    /// `k == 0` yields `None`. Walking past the end clamps to the `Eof` token; a stream that runs out
    /// without one yields `None`.
    fn lt(&self, cursor: usize, k: usize) -> Option<&Token> {
        if k == 0 {
            return None;
        }
        let mut seen = 0;
        let mut index = cursor;
        loop {
            let token = self.get(index)?;
            if token.channel == Channel::Default {
                seen += 1;
                if seen == k || token.is_eof() {
                    return Some(token);
                }
            }
            index += 1;
        }
    }
}

impl TokenStream for [Token] {
    fn len(&self) -> usize {
        <[Token]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&Token> {
        <[Token]>::get(self, index)
    }

    fn hidden_tokens_to_left(&self, index: usize) -> &[Token] {
        if index >= <[Token]>::len(self) {
            return &[];
        }
        let start = self[..index]
            .iter()
            .rposition(|t| t.channel == Channel::Default)
            .map_or(0, |p| p + 1);
        &self[start..index]
    }
}

/// A fully-populated token stream built from lexer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
}

impl TokenBuffer {
    /// Wrap lexer output.
    ///
    /// ## Panics
    /// - In debug builds, if token indices do not match their positions.
    pub fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(
            tokens.iter().enumerate().all(|(i, t)| t.index == i),
            "token indices must match stream positions"
        );
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Index of the first default-channel token strictly after `index`.
    pub fn next_significant(&self, index: usize) -> Option<usize> {
        self.tokens
            .iter()
            .skip(index + 1)
            .find(|t| t.channel == Channel::Default)
            .map(|t| t.index)
    }
}

impl TokenStream for TokenBuffer {
    fn len(&self) -> usize {
        self.tokens.len()
    }

    fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    fn hidden_tokens_to_left(&self, index: usize) -> &[Token] {
        self.tokens.as_slice().hidden_tokens_to_left(index)
    }
}

impl From<Vec<Token>> for TokenBuffer {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}
