//! Tool-specific error types.
//!
//! Every failure inside a tool call collapses into a [`ToolError`] before it
//! reaches the dispatcher, so a tool invocation always yields a value.

use thiserror::Error;

use crate::core::client::ClientError;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A required parameter is missing.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// The upstream API returned a non-success status code.
    #[error("Upstream error {status_code}: {message}")]
    Upstream { status_code: i64, message: String },

    /// The upstream envelope contained no task results.
    #[error("Upstream response contained no results")]
    EmptyResult,

    /// The HTTP call to the upstream API failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "missing parameter" error.
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
