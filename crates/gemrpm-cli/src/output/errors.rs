//! Error message formatting with actionable suggestions.

use super::colors::ColorSupport;
use gemrpm_core::error::GemRpmError;
use std::error::Error;

/// Error formatter with suggestions
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    /// Create a new error formatter
    pub fn new() -> Self {
        Self::with_colors(ColorSupport::detect())
    }

    /// Create an error formatter with explicit color support
    pub fn with_colors(colors: ColorSupport) -> Self {
        Self { colors }
    }

    /// Format an error with context and suggestions
    pub fn format_error(&self, error: &GemRpmError) -> String {
        let mut output = String::new();

        output.push_str(&self.colors.red("error"));
        output.push_str(": ");
        output.push_str(&error.to_string());
        output.push('\n');

        if let Some(suggestion) = error.suggestion() {
            output.push('\n');
            output.push_str(&self.colors.dim("help"));
            output.push_str(": ");
            output.push_str(suggestion);
            output.push('\n');
        }

        let mut source = error.source();
        while let Some(err) = source {
            output.push('\n');
            output.push_str(&self.colors.dim("caused by"));
            output.push_str(": ");
            output.push_str(&err.to_string());
            source = err.source();
        }

        output
    }

    /// Format a warning message
    pub fn format_warning(&self, message: &str) -> String {
        format!("{}: {}", self.colors.yellow("warning"), message)
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> ErrorFormatter {
        ErrorFormatter::with_colors(ColorSupport::disabled())
    }

    #[test]
    fn test_format_error_with_suggestion_and_chain() {
        let err = GemRpmError::in_manifest(
            "foo.toml",
            GemRpmError::UnknownOperator {
                operator: "=>".to_string(),
                requirement: "=> 1.0".to_string(),
            },
        );

        let formatted = plain().format_error(&err);
        assert!(formatted.starts_with("error: In manifest foo.toml\n"));
        assert!(formatted.contains("help: Supported operators are"));
        assert!(formatted.contains("caused by: Unknown operator '=>' in requirement '=> 1.0'"));
    }

    #[test]
    fn test_format_error_without_suggestion() {
        let err = GemRpmError::io(
            "Failed to read foo.toml",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );

        let formatted = plain().format_error(&err);
        assert!(formatted.starts_with("error: IO error: Failed to read foo.toml\n"));
        assert!(!formatted.contains("help:"));
        assert!(formatted.contains("caused by:"));
    }

    #[test]
    fn test_format_warning() {
        assert_eq!(plain().format_warning("no manifests given"), "warning: no manifests given");
    }
}
