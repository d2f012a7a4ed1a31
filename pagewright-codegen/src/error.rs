//! Code generation error types.

use thiserror::Error;

/// Result type for code generation lookups.
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Errors from choosing what to generate. Generators themselves are
/// infallible.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The export format name is not recognized.
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),
}
