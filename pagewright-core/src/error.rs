//! Error types for editor operations.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors that can occur in editor operations.
///
/// Mutations that reference a missing element are no-ops, not errors; the
/// only user-facing failure of the document model is a bad import payload.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Import payload is not valid JSON or does not match the document schema.
    #[error("Invalid import data: {0}")]
    InvalidImport(#[from] serde_json::Error),

    /// Import payload parsed but has no `elements` field.
    #[error("Import data has no elements field")]
    MissingElements,

    /// Unknown component kind name.
    #[error("Unknown element kind: {0}")]
    UnknownKind(String),

    /// Unknown theme name.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// No template with this name.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// No premade project with this name.
    #[error("Premade project not found: {0}")]
    PremadeNotFound(String),

    /// No saved project with this name.
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// Persistence failure.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}
