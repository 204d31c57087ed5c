//! # Geogate - Geospatial Provider Gateway Core
//!
//! Core library for the geogate HTTP gateway. The gateway exposes three
//! read-only endpoints that proxy requests to external geospatial data
//! providers: traffic incidents, route calculation, and air-quality lookup.
//!
//! This crate holds everything below the HTTP surface:
//!
//! - **Configuration**: an immutable [`GatewayConfig`] built once at startup
//!   from `GEOGATE_*` environment variables.
//! - **Validation**: typed per-endpoint query structs ([`TrafficQuery`],
//!   [`RouteQuery`], [`AirQualityQuery`]) that reject malformed parameters
//!   before any outbound call is made.
//! - **Provider clients**: [`TrafficClient`], [`RoutingClient`] and
//!   [`AirQualityClient`], each issuing exactly one outbound GET and handing
//!   the provider's JSON body back untouched.
//!
//! ## Quick Start
//!
//! ```ignore
//! use geogate::{GatewayConfig, TrafficClient, TrafficQuery};
//!
//! let config = GatewayConfig::from_env()?;
//! let http = config.http_client()?;
//! let traffic = TrafficClient::new(http, &config);
//!
//! let query = TrafficQuery::parse(Some("51.0,3.0,52.0,4.0"))?;
//! let incidents = traffic.incidents(&query).await?;
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod query;

// Re-export main types at crate root for convenience
pub use config::{ConfigError, GatewayConfig};
pub use error::{ProviderError, Result};
pub use provider::{AirQualityClient, ProviderKind, RoutingClient, TrafficClient};
pub use query::{AirQualityQuery, RouteQuery, TrafficQuery, ValidationError, VehicleType};
