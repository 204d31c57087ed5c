//! Route calculation lookups.
//!
//! Follows the TomTom Routing URL shape: source and destination coordinates
//! joined by `:` as a path segment, travel mode as a query parameter.

use reqwest::Client;
use serde_json::Value;

use super::{get_json, ProviderKind};
use crate::config::GatewayConfig;
use crate::error::Result;
use crate::query::RouteQuery;

/// Client for the routing provider.
#[derive(Debug, Clone)]
pub struct RoutingClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl RoutingClient {
    pub fn new(http: Client, config: &GatewayConfig) -> Self {
        Self {
            http,
            base_url: config.routing_base_url.clone(),
            api_key: config.routing_api_key.clone(),
        }
    }

    /// Calculate a route between the query's source and destination.
    ///
    /// Instructions are requested in coded form with a polyline route
    /// representation, which is what the callers of this gateway render.
    pub async fn route(&self, query: &RouteQuery) -> Result<Value> {
        let url = format!("{}/{}:{}/json", self.base_url, query.source, query.destination);

        get_json(
            &self.http,
            ProviderKind::Routing,
            &url,
            &[
                ("key", self.api_key.as_str()),
                ("instructionsType", "coded"),
                ("routeRepresentation", "polyline"),
                ("travelMode", query.vehicle_type.as_str()),
            ],
        )
        .await
    }
}
