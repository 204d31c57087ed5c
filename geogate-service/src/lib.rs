//! Geogate Service Library
//!
//! HTTP handlers and router for the geospatial proxy gateway.
//! This library is used by both the geogate-service binary and integration tests.

pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use geogate::{AirQualityClient, RoutingClient, TrafficClient};

/// Application state shared across handlers.
pub struct AppState {
    /// Client for the traffic incident provider.
    pub traffic: TrafficClient,
    /// Client for the routing provider.
    pub routing: RoutingClient,
    /// Client for the air quality provider.
    pub air_quality: AirQualityClient,
}

/// Build the gateway router.
///
/// The binary layers request tracing, CORS and the Swagger UI on top of
/// this; tests drive it directly.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/traffic-incidents", get(handlers::traffic_incidents))
        .route("/route", get(handlers::route))
        .route("/air-quality", get(handlers::air_quality))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}

// Re-export commonly used types for convenience
pub use handlers::{ErrorResponse, HealthResponse};
