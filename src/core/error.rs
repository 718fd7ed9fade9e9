//! Error types and handling for the HubSpot MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies. Note that tool handlers never
//! surface these across the protocol boundary: every tool call resolves to a
//! normal response envelope, and failures are flattened into its text (see
//! `domains::tools::envelope`).

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the HubSpot MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the outbound HubSpot API client.
    #[error("Client error: {0}")]
    Client(#[from] crate::core::client::ClientError),

    /// Error originating from the prompts domain.
    #[error("Prompt error: {0}")]
    Prompt(#[from] crate::domains::prompts::PromptError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from transport communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
