/*
[INPUT]:  Error sources (transport, response parsing, exchange envelope, local validation)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::error::Error as StdError;

use thiserror::Error;

/// Boxed cause carried by transport failures
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Main error type for the YoBit adapter
#[derive(Error, Debug)]
pub enum YobitError {
    /// Network or connection failure reported by the transport
    #[error("HTTP transport failed: {0}")]
    Transport(#[source] BoxError),

    /// Response body is not JSON or does not have the expected shape
    #[error("Protocol error (HTTP {status}): {detail}")]
    Protocol { status: u16, detail: String },

    /// Well-formed envelope with `success=0`
    #[error("Exchange error: {message}")]
    Exchange { message: String },

    /// Required parameter missing or malformed, raised before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for YobitError {
    fn from(err: reqwest::Error) -> Self {
        YobitError::Transport(Box::new(err))
    }
}

impl YobitError {
    /// Check if the error is retryable
    ///
    /// Only transport failures qualify. The library itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, YobitError::Transport(_))
    }

    /// Check if the exchange rejected the request
    pub fn is_exchange_error(&self) -> bool {
        matches!(self, YobitError::Exchange { .. })
    }

    /// Check if the request was rejected locally before reaching the network
    pub fn is_validation_error(&self) -> bool {
        matches!(self, YobitError::Validation(_))
    }

    /// Server message for exchange errors
    pub fn exchange_message(&self) -> Option<&str> {
        match self {
            YobitError::Exchange { message } => Some(message),
            _ => None,
        }
    }

    /// Create a protocol error from a status code and detail
    pub fn protocol(status: u16, detail: impl Into<String>) -> Self {
        YobitError::Protocol {
            status,
            detail: detail.into(),
        }
    }

    /// Create a transport error from any cause; used by custom transports
    pub fn transport(source: impl Into<BoxError>) -> Self {
        YobitError::Transport(source.into())
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        YobitError::Validation(message.into())
    }
}

/// Result type alias for YoBit operations
pub type Result<T> = std::result::Result<T, YobitError>;
