//! Error types for the chat completions client.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// Chat completions client errors.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, empty choices, filtered content)
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}
