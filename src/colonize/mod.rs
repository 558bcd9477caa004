//! Terminator insertion ("colonizing") for Go source
//!
//! This module turns Go source that relies on implicit statement terminators into source where every terminator
//! is an explicit `;`. Whitespace and comments are preserved byte for byte; the only change is the added `;`s.
//!
//! ## Example
//!
//! ```rust
//! use gocolon::colonize::{ColonizeConfig, Colonizer};
//!
//! let colonizer = Colonizer::new(ColonizeConfig::default());
//! let result = colonizer.colonize_str("x := 1\ny := 2\n", None).unwrap();
//! assert_eq!(result.output, "x := 1;\ny := 2;\n");
//! ```

mod colonizer;
mod config;

pub use colonizer::{
    ColonizeError, Colonized, Colonizer, MAX_SOURCE_SIZE, STDIN_NAME, read_input, write_output,
};
pub use config::{ColonizeConfig, OnParseError};

/// Colonize Go source with default settings
pub fn colonize_source(source: &str) -> Result<String, ColonizeError> {
    colonize_source_with_config(source, ColonizeConfig::default())
}

/// Colonize Go source with custom configuration
pub fn colonize_source_with_config(source: &str, config: ColonizeConfig) -> Result<String, ColonizeError> {
    Ok(Colonizer::new(config).colonize_str(source, None)?.output)
}

/// Check if source already has every terminator spelled out
pub fn check_colonized(source: &str) -> Result<bool, ColonizeError> {
    Ok(Colonizer::default().colonize_str(source, None)?.inserted == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colonize_source() {
        assert_eq!(colonize_source("package main\n").unwrap(), "package main;\n");
    }

    #[test]
    fn test_colonize_source_with_config() {
        let config = ColonizeConfig::new().with_on_parse_error(OnParseError::Ignore);
        assert_eq!(colonize_source_with_config("f(\n", config).unwrap(), "f(\n");
        assert!(colonize_source("f(\n").is_err());
    }

    #[test]
    fn test_check_colonized() {
        assert!(!check_colonized("x\n").unwrap());
        assert!(check_colonized("x;\n").unwrap());
        assert!(check_colonized("").unwrap());
    }
}
