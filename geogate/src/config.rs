//! Gateway configuration.
//!
//! All settings come from `GEOGATE_*` environment variables, read once at
//! startup into an immutable [`GatewayConfig`] that is passed by reference
//! to each provider client constructor. Credentials are never hardcoded and
//! never read from mutable global state.

use std::time::Duration;

use thiserror::Error;

/// Default base URL for the traffic incident provider (TomTom Incident Details).
pub const DEFAULT_TRAFFIC_URL: &str =
    "https://api.tomtom.com/traffic/services/4/incidentDetails/s3";

/// Default base URL for the routing provider (TomTom Routing).
pub const DEFAULT_ROUTING_URL: &str = "https://api.tomtom.com/routing/1/calculateRoute";

/// Default base URL for the air quality provider (WAQI geo feed).
pub const DEFAULT_AIR_QUALITY_URL: &str = "https://api.waqi.info/feed/geo";

/// Default timeout for outbound provider requests, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors raised while reading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable (provider credential) is unset or empty.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A variable is set but its value cannot be parsed.
    #[error("invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },
}

/// Immutable gateway configuration.
///
/// Base URLs default to the real provider endpoints and are overridable so
/// tests can point the clients at a local mock server.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the traffic incident provider.
    pub traffic_base_url: String,
    /// API key for the traffic incident provider.
    pub traffic_api_key: String,
    /// Base URL of the routing provider.
    pub routing_base_url: String,
    /// API key for the routing provider.
    pub routing_api_key: String,
    /// Base URL of the air quality provider.
    pub air_quality_base_url: String,
    /// Access token for the air quality provider.
    pub air_quality_token: String,
    /// Total timeout applied to every outbound provider request.
    pub http_timeout: Duration,
}

impl GatewayConfig {
    /// Build the configuration from `GEOGATE_*` environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `GEOGATE_TRAFFIC_URL` | TomTom incident details endpoint |
    /// | `GEOGATE_TRAFFIC_KEY` | required |
    /// | `GEOGATE_ROUTING_URL` | TomTom routing endpoint |
    /// | `GEOGATE_ROUTING_KEY` | required |
    /// | `GEOGATE_AIR_QUALITY_URL` | WAQI geo feed endpoint |
    /// | `GEOGATE_AIR_QUALITY_TOKEN` | required |
    /// | `GEOGATE_HTTP_TIMEOUT_SECS` | 10 |
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            traffic_base_url: var_or("GEOGATE_TRAFFIC_URL", DEFAULT_TRAFFIC_URL),
            traffic_api_key: require("GEOGATE_TRAFFIC_KEY")?,
            routing_base_url: var_or("GEOGATE_ROUTING_URL", DEFAULT_ROUTING_URL),
            routing_api_key: require("GEOGATE_ROUTING_KEY")?,
            air_quality_base_url: var_or("GEOGATE_AIR_QUALITY_URL", DEFAULT_AIR_QUALITY_URL),
            air_quality_token: require("GEOGATE_AIR_QUALITY_TOKEN")?,
            http_timeout: timeout_from_env()?,
        })
    }

    /// Build the shared outbound HTTP client with the configured timeout.
    ///
    /// The returned client is cheap to clone; one instance backs all three
    /// provider clients so they share a connection pool.
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.http_timeout)
            .build()
    }
}

/// Read a required variable, treating empty values as unset.
fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

/// Read an optional variable, falling back to a default.
fn var_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn timeout_from_env() -> Result<Duration, ConfigError> {
    match std::env::var("GEOGATE_HTTP_TIMEOUT_SECS") {
        Ok(value) => {
            let secs: u64 = value.parse().map_err(|_| ConfigError::InvalidVar {
                name: "GEOGATE_HTTP_TIMEOUT_SECS",
                value,
            })?;
            Ok(Duration::from_secs(secs))
        }
        Err(_) => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_unset_and_empty() {
        std::env::remove_var("GEOGATE_TEST_UNSET");
        assert!(matches!(
            require("GEOGATE_TEST_UNSET"),
            Err(ConfigError::MissingVar("GEOGATE_TEST_UNSET"))
        ));

        std::env::set_var("GEOGATE_TEST_EMPTY", "");
        assert!(require("GEOGATE_TEST_EMPTY").is_err());

        std::env::set_var("GEOGATE_TEST_SET", "secret");
        assert_eq!(require("GEOGATE_TEST_SET").unwrap(), "secret");
    }

    #[test]
    fn var_or_falls_back_to_default() {
        std::env::remove_var("GEOGATE_TEST_FALLBACK");
        assert_eq!(var_or("GEOGATE_TEST_FALLBACK", "default"), "default");

        std::env::set_var("GEOGATE_TEST_OVERRIDE", "custom");
        assert_eq!(var_or("GEOGATE_TEST_OVERRIDE", "default"), "custom");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::MissingVar("GEOGATE_TRAFFIC_KEY");
        assert!(err.to_string().contains("GEOGATE_TRAFFIC_KEY"));

        let err = ConfigError::InvalidVar {
            name: "GEOGATE_HTTP_TIMEOUT_SECS",
            value: "soon".to_string(),
        };
        assert!(err.to_string().contains("soon"));
    }
}
