//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use gocolon_syntax::diagnostics::SyntaxError;
use gocolon_syntax::lexer::{self, Token};
use miette::{NamedSource, Report};

use super::{CliError, CliResult, ExitCode};
use crate::colonize::{ColonizeConfig, ColonizeError, Colonizer, STDIN_NAME, read_input, write_output};

/// Read source from a file, or stdin when `None`, within the colonizer's size limit.
pub fn read_source(input: Option<&Path>) -> CliResult<String> {
    read_input(input).map_err(|e| match e {
        ColonizeError::Io(e) => CliError::failure(format!("Cannot read '{}': {e}", display_name(input))),
        other => CliError::failure(other.to_string()),
    })
}

fn display_name(input: Option<&Path>) -> String {
    input.map_or_else(|| STDIN_NAME.to_string(), |p| p.display().to_string())
}

/// Render a syntax error with its source context.
pub fn render_error(error: SyntaxError, name: &str, source: &str) -> String {
    let report = Report::new(error).with_source_code(NamedSource::new(name, source.to_string()));
    format!("{report:?}")
}

/// Colonize `input` (stdin when `None`) into `output` (stdout when `None`).
pub fn colonize(input: Option<&Path>, output: Option<&Path>, config: ColonizeConfig) -> CliResult<ExitCode> {
    let name = display_name(input);
    let source = read_source(input)?;

    let colonized = match Colonizer::new(config).colonize_str(&source, Some(&name)) {
        Ok(colonized) => colonized,
        Err(ColonizeError::Fatal(error)) => return Err(CliError::failure(render_error(error, &name, &source))),
        Err(e) => return Err(CliError::failure(format!("Error colonizing '{name}': {e}"))),
    };

    write_output(output, &colonized.output).map_err(|e| {
        let target = output.map_or_else(|| "stdout".to_string(), |p| format!("file '{}'", p.display()));
        CliError::failure(format!("Error writing {target}: {e}"))
    })?;

    tracing::debug!(input = %name, inserted = colonized.inserted, "colonized");
    Ok(ExitCode::SUCCESS)
}

/// Tokenize and display tokens, one per line.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(Some(file_path))?;
    let name = file_path.display().to_string();
    let tokens = match lexer::lex(&source) {
        Ok(tokens) => tokens,
        Err(errs) => {
            let mut msg = String::new();
            for err in errs {
                msg.push_str(&render_error(err, &name, &source));
                msg.push('\n');
            }
            return Err(CliError::failure(msg.trim_end()));
        }
    };

    for token in &tokens {
        println!("{}", describe_token(token));
    }
    Ok(ExitCode::SUCCESS)
}

/// One-line description of a token for `--lex`.
pub fn describe_token(token: &Token) -> String {
    format!(
        "{:>4} {:<6} {:?} {:?}",
        token.index,
        if token.is_hidden() { "hidden" } else { "" },
        token.kind,
        token.text().unwrap_or("")
    )
}
