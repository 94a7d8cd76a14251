//! Custom error types for the application.
//!
//! Each domain gets its own error enum:
//!
//! - [`FetchError`] - HTTP/network errors raised by the retrying fetch loop
//! - [`PolicyError`] - Invalid retry policy parameters
//! - [`AssistantError`] - Failures of the AI assistant request

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Server answered 429 Too Many Requests.
    #[error("rate limited (HTTP 429)")]
    RateLimited,
    /// Connection failed, request timed out, or the request could not be built.
    #[error("network error: {0}")]
    Transport(String),
    /// Any other non-2xx response.
    #[error("API error: {status} {status_text}")]
    Http { status: u16, status_text: String },
    /// The 2xx body was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    /// The payload could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),
    /// The retry policy ran out; carries the error from the final attempt.
    #[error("request failed after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last: Box<FetchError>,
    },
}

/// Rejected retry policy parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    #[error("initial delay must be greater than zero")]
    ZeroInitialDelay,
    #[error("backoff factor must be greater than 1 (got {0})")]
    FactorTooSmall(f64),
}

/// AI assistant errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssistantError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The configured retry policy was rejected before any request was sent.
    #[error("invalid retry policy: {0}")]
    Policy(#[from] PolicyError),
    /// The response parsed but carried no candidate text.
    #[error("no valid response from API")]
    NoValidResponse,
}

impl AssistantError {
    /// The single message shown to visitors, whatever went wrong.
    pub fn user_message(&self) -> &'static str {
        "failed to generate ai response. please try again."
    }
}
