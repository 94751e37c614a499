//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool operations.
///
/// Validation and datastore failures never surface through this type -
/// they become `{ "error": ... }` envelopes in the tool result. This enum
/// is reserved for dispatcher-level problems.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool name is not registered.
    #[error("unknown tool: {0}")]
    Unknown(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::Unknown(name.into())
    }
}
