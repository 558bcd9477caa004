//! CLI module for gocolon
//!
//! ## Usage
//!
//! - `gocolon [INPUT] [-o OUTPUT]` - Colonize a Go file (or stdin) into a file (or stdout)
//! - `gocolon --on-error warn|ignore ...` - Keep going past parse errors
//! - `gocolon --lex FILE` - Dump the token stream, hidden channel included (debug)
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use crate::colonize::{ColonizeConfig, OnParseError};
use crate::version::GOCOLON_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Insert explicit statement terminators into Go source
#[derive(Parser, Debug)]
#[command(name = "gocolon")]
#[command(version = GOCOLON_VERSION)]
#[command(about = "Insert explicit statement terminators into Go source", long_about = None)]
pub struct Cli {
    /// Go source file to colonize (`-` or nothing reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write the colonized source here instead of stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// What to do when the source is not well-formed
    #[arg(long = "on-error", value_enum, default_value_t = OnParseError::Fatal)]
    pub on_error: OnParseError,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with_all = ["input", "output"])]
    pub lex_file: Option<PathBuf>,
}

impl Cli {
    /// The input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }

    pub fn config(&self) -> ColonizeConfig {
        ColonizeConfig::new().with_on_parse_error(self.on_error)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != ExitCode::SUCCESS {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    if let Some(file) = &cli.lex_file {
        return commands::lex_file(file);
    }
    commands::colonize(cli.input_path(), cli.output.as_deref(), cli.config())
}

// ============================================================================
// Tests
// ============================================================================
