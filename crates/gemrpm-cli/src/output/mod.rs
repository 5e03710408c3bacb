//! Terminal output formatting.
//!
//! Generator lines go to stdout untouched; everything aimed at a human
//! (warnings, errors) goes to stderr so it never mixes with RPM metadata.

pub mod colors;
pub mod errors;

use gemrpm_core::error::GemRpmError;

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    errors: errors::ErrorFormatter,
}

impl OutputHandler {
    /// Create a new output handler
    pub fn new() -> Self {
        Self {
            errors: errors::ErrorFormatter::new(),
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        println!("{}", message);
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        eprintln!("{}", self.errors.format_warning(message));
    }

    /// Print an error with its suggestion and cause chain
    pub fn error(&self, error: &GemRpmError) {
        eprintln!("{}", self.errors.format_error(error));
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
