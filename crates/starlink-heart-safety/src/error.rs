//! Error types for safety rule compilation.

use thiserror::Error;

/// Errors returned while compiling safety rules.
#[derive(Debug, Error)]
pub enum SafetyError {
    /// A rule pattern failed to compile.
    #[error("invalid safety pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
}
