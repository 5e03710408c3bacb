//! RubyGems to RPM dependency translation engine
//!
//! This crate turns a resolved gem specification into RPM `Provides`,
//! `Requires` and `Conflicts` lines. Translation is pure and synchronous:
//! the same specification always yields the same lines, and independent
//! specifications can be translated from any number of threads.

pub mod classify;
pub mod compose;
pub mod pessimistic;
pub mod pipeline;
pub mod version;

// Re-export main types
pub use classify::{classify, Classified, Regular};
pub use compose::{compose, presence, Clause, RpmOp};
pub use pessimistic::expand;
pub use pipeline::{EmitOptions, Mode, Pipeline};
pub use version::translate;

use gemrpm_core::error::GemRpmError;

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, GemRpmError>;
