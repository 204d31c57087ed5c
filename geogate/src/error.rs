//! Error types for the gateway core.

use reqwest::StatusCode;
use thiserror::Error;

use crate::provider::ProviderKind;

/// Errors raised by the provider clients.
///
/// Every variant names the provider it came from, and the `Display` text is
/// what callers ultimately see in the `{"error": ...}` response body. The
/// gateway never retries; a failed call surfaces as-is.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The outbound request could not be completed (connect failure, DNS,
    /// timeout).
    #[error("request to {provider} provider failed: {source}")]
    Transport {
        provider: ProviderKind,
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status code.
    #[error("{provider} provider returned status {status}")]
    Status {
        provider: ProviderKind,
        status: StatusCode,
    },

    /// The provider answered 2xx but the body was not valid JSON.
    #[error("invalid JSON from {provider} provider: {source}")]
    Decode {
        provider: ProviderKind,
        source: reqwest::Error,
    },
}

impl ProviderError {
    /// The provider this error originated from.
    pub fn provider(&self) -> ProviderKind {
        match self {
            ProviderError::Transport { provider, .. }
            | ProviderError::Status { provider, .. }
            | ProviderError::Decode { provider, .. } => *provider,
        }
    }
}

/// Result type alias using [`ProviderError`].
pub type Result<T> = std::result::Result<T, ProviderError>;
