//! Traffic incident lookups.
//!
//! Follows the TomTom Incident Details URL shape: the bounding box is a path
//! segment, followed by a fixed zoom level and traffic model id.

use reqwest::Client;
use serde_json::Value;

use super::{get_json, ProviderKind};
use crate::config::GatewayConfig;
use crate::error::Result;
use crate::query::TrafficQuery;

/// Client for the traffic incident provider.
#[derive(Debug, Clone)]
pub struct TrafficClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl TrafficClient {
    pub fn new(http: Client, config: &GatewayConfig) -> Self {
        Self {
            http,
            base_url: config.traffic_base_url.clone(),
            api_key: config.traffic_api_key.clone(),
        }
    }

    /// Fetch current incidents inside the query's bounding box.
    ///
    /// Zoom 22 and traffic model id -1 ("most recent") are fixed path
    /// segments of the incident details endpoint.
    pub async fn incidents(&self, query: &TrafficQuery) -> Result<Value> {
        let url = format!("{}/{}/22/-1/json", self.base_url, query.bounding_box);

        get_json(
            &self.http,
            ProviderKind::Traffic,
            &url,
            &[
                ("key", self.api_key.as_str()),
                ("projection", "EPSG4326"),
                ("originalPosition", "true"),
            ],
        )
        .await
    }
}
