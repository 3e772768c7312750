//! The seam between batching and the network.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while talking to the translation backend.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or the response body could not be read.
    #[error("Failed to reach translation backend: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Translation backend returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The backend is throttling requests.
    #[error("Translation backend is rate limiting requests (status {status}): {body}")]
    RateLimited {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The configured endpoint is not a usable base URL.
    #[error("Invalid translation endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// The response body did not have the expected shape.
    #[error("Malformed response from translation backend: {0}")]
    MalformedResponse(String),
}

impl TransportError {
    /// Classifies a non-success HTTP status.
    pub fn from_status(status: u16, body: String) -> Self {
        if status == 429 {
            Self::RateLimited { status, body }
        } else {
            Self::Status { status, body }
        }
    }

    /// Returns `true` if the backend reported throttling.
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

/// Anything that can translate a block of text.
///
/// Implementations receive text that may contain `\n` line separators and
/// must return the translation of the whole block.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TransportError> {
        (**self).translate(text, source_language, target_language).await
    }
}
