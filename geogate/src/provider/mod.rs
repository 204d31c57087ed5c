//! Clients for the external geospatial providers.
//!
//! Each client issues exactly one outbound GET per lookup and hands the
//! provider's JSON body back untouched, as an opaque [`serde_json::Value`].
//! The gateway never reshapes, caches, or reorders a provider payload, and
//! never retries a failed call.

use std::fmt;

use reqwest::Client;
use serde_json::Value;

use crate::error::{ProviderError, Result};

mod air_quality;
mod routing;
mod traffic;

pub use air_quality::AirQualityClient;
pub use routing::RoutingClient;
pub use traffic::TrafficClient;

/// Identifies which upstream a request or error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Traffic,
    Routing,
    AirQuality,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Traffic => "traffic",
            ProviderKind::Routing => "routing",
            ProviderKind::AirQuality => "air-quality",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue a GET and decode the JSON body, mapping each failure phase to its
/// [`ProviderError`] variant.
pub(crate) async fn get_json(
    http: &Client,
    provider: ProviderKind,
    url: &str,
    params: &[(&str, &str)],
) -> Result<Value> {
    tracing::debug!(provider = %provider, url, "dispatching provider request");

    let response = http
        .get(url)
        .query(params)
        .send()
        .await
        .map_err(|source| ProviderError::Transport { provider, source })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(provider = %provider, %status, "provider returned error status");
        return Err(ProviderError::Status { provider, status });
    }

    let body = response
        .json()
        .await
        .map_err(|source| ProviderError::Decode { provider, source })?;

    tracing::debug!(provider = %provider, "provider request succeeded");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_kind_labels() {
        assert_eq!(ProviderKind::Traffic.to_string(), "traffic");
        assert_eq!(ProviderKind::Routing.to_string(), "routing");
        assert_eq!(ProviderKind::AirQuality.to_string(), "air-quality");
    }
}
