//! Air quality lookups.
//!
//! Follows the WAQI geo feed URL shape: `{base}:{lat};{lon}/` returns the
//! nearest station's feed for the given coordinates.

use reqwest::Client;
use serde_json::Value;

use super::{get_json, ProviderKind};
use crate::config::GatewayConfig;
use crate::error::Result;
use crate::query::AirQualityQuery;

/// Client for the air quality provider.
#[derive(Debug, Clone)]
pub struct AirQualityClient {
    http: Client,
    base_url: String,
    token: String,
}

impl AirQualityClient {
    pub fn new(http: Client, config: &GatewayConfig) -> Self {
        Self {
            http,
            base_url: config.air_quality_base_url.clone(),
            token: config.air_quality_token.clone(),
        }
    }

    /// Fetch the nearest available air quality feed for the coordinates.
    pub async fn nearest(&self, query: &AirQualityQuery) -> Result<Value> {
        let url = format!("{}:{};{}/", self.base_url, query.lat, query.lon);

        get_json(
            &self.http,
            ProviderKind::AirQuality,
            &url,
            &[("token", self.token.as_str())],
        )
        .await
    }
}
