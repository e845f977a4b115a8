//! Client error types
//!
//! The failure space is deliberately two-sided: transport failures (nothing
//! interpretable came back) and business failures (the envelope arrived with
//! a non-zero code). Both carry a human-readable message, so callers never
//! need to tell them apart to report them.

use thiserror::Error;

/// Shown when a business failure carries an empty message.
pub const SERVICE_ERROR_FALLBACK: &str = "service error";

/// Shown when a transport failure carries no description.
pub const NETWORK_ERROR_FALLBACK: &str = "network request failed";

/// Which side of the failure space an [`ApiError`] falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No interpretable envelope reached the client.
    Transport,
    /// The envelope arrived with `code != 0`.
    Business,
}

/// Error for a single backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP-layer failure: connect error, timeout, or non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not decode as an envelope (or its payload).
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Envelope parsed, backend reported a business failure.
    #[error("{message}")]
    Business {
        /// Backend business code, non-zero.
        code: i64,
        /// User-facing reason, possibly empty.
        message: String,
    },
}

impl ApiError {
    /// Transport/business classification of this failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Http(_) | ApiError::Decode(_) => FailureKind::Transport,
            ApiError::Business { .. } => FailureKind::Business,
        }
    }

    /// Text for the user-visible error channel, with the configured
    /// fallbacks when no usable description exists.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Business { message, .. } => {
                if message.is_empty() {
                    SERVICE_ERROR_FALLBACK.to_string()
                } else {
                    message.clone()
                }
            }
            ApiError::Http(e) => {
                let text = e.to_string();
                if text.is_empty() {
                    NETWORK_ERROR_FALLBACK.to_string()
                } else {
                    text
                }
            }
            ApiError::Decode(_) => NETWORK_ERROR_FALLBACK.to_string(),
        }
    }
}

/// Result type for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;
