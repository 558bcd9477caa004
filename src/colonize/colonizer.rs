//! Semicolon insertion over a lexed token stream.
//!
//! The colonizer walks the significant tokens once. After every token that can end a statement it asks the
//! terminator lookahead, positioned on the next significant token, whether a line break separates the two; if so
//! (or if the input ends there) a `;` is recorded right after the ending token. The output is the source with
//! those `;` spliced in, every other byte copied through.
//!
//! Alongside insertion the walk checks what the lookahead needs to be meaningful: delimiters must balance, and a
//! function body must open on the line of its signature.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use gocolon_core::lang::keywords::KeywordId;
use gocolon_core::lang::punctuation::{self, PunctuationId};
use gocolon_syntax::diagnostics::SyntaxError;
use gocolon_syntax::lexer::{self, Token, TokenKind};
use gocolon_syntax::lookahead::{Lookahead, LookaheadError};
use gocolon_syntax::span::Span;
use gocolon_syntax::stream::TokenBuffer;
use thiserror::Error;

use super::config::{ColonizeConfig, OnParseError};

/// Maximum source size (100 MB)
///
/// Larger inputs are rejected instead of being read into memory.
pub const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Name used for stdin in messages.
pub const STDIN_NAME: &str = "<stdin>";

/// Errors that stop a colonize run.
#[derive(Debug, Error)]
pub enum ColonizeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("{name} is too large (max {max} bytes)")]
    TooLarge { name: String, max: u64 },
    /// A parse error under [`OnParseError::Fatal`].
    #[error("{0}")]
    Fatal(SyntaxError),
}

/// Result of colonizing one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colonized {
    /// The source with terminators inserted.
    pub output: String,
    /// Number of `;` inserted.
    pub inserted: usize,
    /// Parse errors that were tolerated under the configured policy, in source order.
    pub diagnostics: Vec<SyntaxError>,
}

/// Inserts explicit `;` terminators into Go source.
#[derive(Debug, Clone, Default)]
pub struct Colonizer {
    config: ColonizeConfig,
}

impl Colonizer {
    pub fn new(config: ColonizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ColonizeConfig {
        &self.config
    }

    /// Colonize a source string. `path` only labels log messages.
    #[tracing::instrument(skip_all, fields(path = path.unwrap_or(STDIN_NAME), source_len = source.len()))]
    pub fn colonize_str(&self, source: &str, path: Option<&str>) -> Result<Colonized, ColonizeError> {
        let (tokens, mut errors) = lexer::lex_lossy(source);
        let stream = TokenBuffer::new(tokens);

        let walk = Walk::run(&stream, &errors);
        errors.extend(walk.errors);
        errors.sort_by_key(|e| e.span.start);

        for error in &errors {
            self.report(error, path, source)?;
        }

        let output = splice(&stream, &walk.inserts);
        tracing::debug!(inserted = walk.inserts.len(), "colonized source");
        Ok(Colonized {
            output,
            inserted: walk.inserts.len(),
            diagnostics: errors,
        })
    }

    /// Read all of `reader`, colonize it, and write the result to `writer`.
    pub fn colonize_io<R: Read, W: Write>(
        &self,
        reader: R,
        mut writer: W,
        path: Option<&str>,
    ) -> Result<Colonized, ColonizeError> {
        let source = read_limited(reader, path.unwrap_or(STDIN_NAME), MAX_SOURCE_SIZE)?;
        let colonized = self.colonize_str(&source, path)?;
        writer.write_all(colonized.output.as_bytes())?;
        writer.flush()?;
        Ok(colonized)
    }

    /// Colonize a file (or stdin when `input` is `None`) into a file (or stdout when `output` is `None`).
    ///
    /// The output file is only created once colonizing succeeded.
    pub fn colonize_path(&self, input: Option<&Path>, output: Option<&Path>) -> Result<Colonized, ColonizeError> {
        let label = input.map(|p| p.display().to_string());
        let source = read_input(input)?;
        let colonized = self.colonize_str(&source, label.as_deref())?;
        write_output(output, &colonized.output)?;
        Ok(colonized)
    }

    fn report(&self, error: &SyntaxError, path: Option<&str>, source: &str) -> Result<(), ColonizeError> {
        match self.config.on_parse_error {
            OnParseError::Fatal => {
                tracing::error!("{}", error.one_line(path, source));
                Err(ColonizeError::Fatal(error.clone()))
            }
            OnParseError::Warn => {
                tracing::warn!("{}", error.one_line(path, source));
                Ok(())
            }
            OnParseError::Ignore => Ok(()),
        }
    }
}

/// Read Go source from `input`, or from stdin when `None`.
///
/// Anything over [`MAX_SOURCE_SIZE`] is refused with [`ColonizeError::TooLarge`].
pub fn read_input(input: Option<&Path>) -> Result<String, ColonizeError> {
    match input {
        Some(path) => read_limited(File::open(path)?, &path.display().to_string(), MAX_SOURCE_SIZE),
        None => read_limited(io::stdin().lock(), STDIN_NAME, MAX_SOURCE_SIZE),
    }
}

/// Write colonized text to `output`, or to stdout when `None`.
pub fn write_output(output: Option<&Path>, text: &str) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, text),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()
        }
    }
}

fn read_limited<R: Read>(reader: R, name: &str, max: u64) -> Result<String, ColonizeError> {
    let mut source = String::new();
    reader.take(max + 1).read_to_string(&mut source)?;
    if source.len() as u64 > max {
        return Err(ColonizeError::TooLarge {
            name: name.to_string(),
            max,
        });
    }
    Ok(source)
}

/// Copy every token through, adding `;` after the tokens at `inserts` (ascending stream indices).
fn splice(stream: &TokenBuffer, inserts: &[usize]) -> String {
    let len: usize = stream.tokens().iter().map(|t| t.text.len()).sum();
    let mut output = String::with_capacity(len + inserts.len());
    let mut pending = inserts.iter().peekable();
    for token in stream.tokens() {
        output.push_str(&token.text);
        if pending.next_if(|&&i| i == token.index).is_some() {
            output.push(';');
        }
    }
    output
}

/// One pass over the significant tokens.
struct Walk<'s> {
    stream: &'s TokenBuffer,
    /// Default-channel tokens in stream order, `Eof` included. Positions below index into this.
    significant: Vec<&'s Token>,
    /// Position of the closer matching the opener at each position.
    closers: Vec<Option<usize>>,
    inserts: Vec<usize>,
    errors: Vec<SyntaxError>,
    open: Vec<&'s Token>,
}

impl<'s> Walk<'s> {
    /// Walk `stream`. `lexical` are the lexer's errors for it.
    ///
    /// A literal the lexer could not close gets no `;`: it would become part of the literal on the next run.
    fn run(stream: &'s TokenBuffer, lexical: &[SyntaxError]) -> Self {
        let significant: Vec<&Token> = stream.tokens().iter().filter(|t| !t.is_hidden()).collect();
        let closers = match_delimiters(&significant);
        let mut walk = Self {
            stream,
            significant,
            closers,
            inserts: Vec::new(),
            errors: Vec::new(),
            open: Vec::new(),
        };
        let unclosed_literals: HashSet<Span> = lexical.iter().map(|e| e.span).collect();

        for pos in 0..walk.significant.len() {
            let token = walk.significant[pos];
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Keyword(KeywordId::Func) => {
                    if let Err(err) = walk.check_signature(pos) {
                        walk.errors.push(err.into());
                    }
                }
                TokenKind::Punctuation(id) => walk.track_delimiter(token, id),
                _ => {}
            }
            if token.ends_statement() && !unclosed_literals.contains(&token.span) && walk.terminates(token) {
                walk.inserts.push(token.index);
            }
        }

        let reported: HashSet<Span> = walk.errors.iter().map(|e| e.span).collect();
        for open in std::mem::take(&mut walk.open) {
            if !reported.contains(&open.span) {
                walk.errors.push(
                    SyntaxError::syntax(format!("unclosed delimiter `{}`", open.text), open.span)
                        .with_hint("add the matching closing delimiter"),
                );
            }
        }
        walk
    }

    /// Whether a terminator belongs right after `token`.
    fn terminates(&self, token: &Token) -> bool {
        let Some(next) = self.stream.next_significant(token.index) else {
            return false;
        };
        let view = Lookahead::new(self.stream, next);
        if view.check_previous_token_text(";") {
            return false;
        }
        view.current().is_some_and(Token::is_eof) || view.line_terminator_ahead()
    }

    fn track_delimiter(&mut self, token: &'s Token, id: PunctuationId) {
        match id {
            PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::LBrace => self.open.push(token),
            PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace => {
                let expected = punctuation::opener_of(id);
                match self.open.pop() {
                    Some(open) if open.punctuation_id() == expected => {}
                    Some(open) => self.errors.push(
                        SyntaxError::syntax(
                            format!("mismatched closing delimiter `{}`", token.text),
                            token.span,
                        )
                        .with_hint(format!("`{}` opened at byte {} is still open", open.text, open.span.start)),
                    ),
                    None => self.errors.push(SyntaxError::syntax(
                        format!("unexpected closing delimiter `{}`", token.text),
                        token.span,
                    )),
                }
            }
            _ => {}
        }
    }

    /// Report a function body that opens on a line after its signature.
    fn check_signature(&mut self, func: usize) -> Result<(), LookaheadError> {
        let Some(params) = self.params_position(func)? else {
            return Ok(());
        };
        let close = self.closer(params).ok_or_else(|| self.unbalanced(params))?;
        let view = Lookahead::new(self.stream, self.significant[func].index);
        let body = if view.no_terminator_after_params(params - func + 1)? {
            self.skip_result(close + 1)
        } else {
            close + 1
        };
        let brace = self.at(body).filter(|t| t.is_punctuation(PunctuationId::LBrace));
        if let Some(brace) = brace.filter(|_| self.line_break_before(body)) {
            self.errors.push(
                SyntaxError::syntax("unexpected newline before function body", brace.span)
                    .with_hint("put the opening `{` on the same line as the signature"),
            );
        }
        Ok(())
    }

    /// Position of the parameter list of the `func` at `func`.
    ///
    /// Skips a method receiver, the function name, and type parameters. `None` when the tokens do not look like a
    /// signature.
    fn params_position(&self, func: usize) -> Result<Option<usize>, LookaheadError> {
        let mut pos = func + 1;
        if self.is_at(pos, PunctuationId::LParen) {
            let close = self.closer(pos).ok_or_else(|| self.unbalanced(pos))?;
            let receiver = self.is_ident_at(close + 1)
                && (self.is_at(close + 2, PunctuationId::LParen) || self.is_at(close + 2, PunctuationId::LBracket));
            if !receiver {
                // Function literal or function type.
                return Ok(Some(pos));
            }
            pos = close + 1;
        }

        if !self.is_ident_at(pos) {
            return Ok(None);
        }
        pos += 1;

        if self.is_at(pos, PunctuationId::LBracket) {
            match self.closer(pos) {
                Some(close) => pos = close + 1,
                None => return Ok(None),
            }
        }

        Ok(self.is_at(pos, PunctuationId::LParen).then_some(pos))
    }

    /// Position of the first token after the result type starting at `pos`.
    ///
    /// A result is a parenthesized list or a type, and never crosses a line break.
    fn skip_result(&self, mut pos: usize) -> usize {
        while let Some(token) = self.at(pos) {
            if self.line_break_before(pos) {
                break;
            }
            let group = match token.kind {
                TokenKind::Ident
                | TokenKind::Keyword(KeywordId::Map | KeywordId::Chan | KeywordId::Func)
                | TokenKind::Punctuation(PunctuationId::Dot | PunctuationId::Star | PunctuationId::Arrow) => None,
                TokenKind::Punctuation(PunctuationId::LParen | PunctuationId::LBracket) => Some(pos),
                TokenKind::Keyword(KeywordId::Struct | KeywordId::Interface)
                    if self.is_at(pos + 1, PunctuationId::LBrace) =>
                {
                    Some(pos + 1)
                }
                _ => break,
            };
            pos = match group {
                Some(open) => match self.closer(open) {
                    Some(close) => close + 1,
                    None => break,
                },
                None => pos + 1,
            };
        }
        pos
    }

    fn at(&self, pos: usize) -> Option<&'s Token> {
        self.significant.get(pos).copied()
    }

    fn is_at(&self, pos: usize, id: PunctuationId) -> bool {
        self.at(pos).is_some_and(|t| t.is_punctuation(id))
    }

    fn is_ident_at(&self, pos: usize) -> bool {
        self.at(pos).is_some_and(|t| t.kind == TokenKind::Ident)
    }

    fn closer(&self, pos: usize) -> Option<usize> {
        self.closers.get(pos).copied().flatten()
    }

    /// Whether a `"\n"` sits on the hidden channel right before the token at `pos`.
    fn line_break_before(&self, pos: usize) -> bool {
        self.at(pos)
            .is_some_and(|t| !Lookahead::new(self.stream, t.index).no_terminator_between(1))
    }

    fn unbalanced(&self, pos: usize) -> LookaheadError {
        LookaheadError::UnbalancedParens {
            open: self.at(pos).map(|t| t.span).unwrap_or_default(),
        }
    }
}

/// Pair each `(`, `[` and `{` with its closer. Each kind is counted on its own, so a stray `]` does not hide a `)`.
fn match_delimiters(significant: &[&Token]) -> Vec<Option<usize>> {
    let mut closers = vec![None; significant.len()];
    let mut stacks: [Vec<usize>; 3] = Default::default();
    for (pos, token) in significant.iter().enumerate() {
        let (kind, opens) = match token.punctuation_id() {
            Some(PunctuationId::LParen) => (0, true),
            Some(PunctuationId::RParen) => (0, false),
            Some(PunctuationId::LBracket) => (1, true),
            Some(PunctuationId::RBracket) => (1, false),
            Some(PunctuationId::LBrace) => (2, true),
            Some(PunctuationId::RBrace) => (2, false),
            _ => continue,
        };
        if opens {
            stacks[kind].push(pos);
        } else if let Some(open) = stacks[kind].pop() {
            closers[open] = Some(pos);
        }
    }
    closers
}
