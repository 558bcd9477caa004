//! Colonizer configuration
//!
//! The only knob is what to do when the source is not well-formed. Colonizing itself is deterministic.

/// What to do when lexing or delimiter checks find a problem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum OnParseError {
    /// Log the error and abort without producing output.
    #[default]
    Fatal,
    /// Log a warning and keep colonizing.
    Warn,
    /// Keep colonizing without logging.
    Ignore,
}

/// Colonizer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColonizeConfig {
    /// Parse error policy
    pub on_parse_error: OnParseError,
}

impl ColonizeConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parse error policy
    pub fn with_on_parse_error(mut self, policy: OnParseError) -> Self {
        self.on_parse_error = policy;
        self
    }
}
