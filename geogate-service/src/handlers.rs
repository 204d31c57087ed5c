//! HTTP request handlers for the proxy gateway.
//!
//! Each proxy handler runs the same two steps: validate the raw query
//! parameters into a typed query, then forward it to the matching provider
//! client. Validation failures answer 400 before any outbound call; provider
//! failures answer 502; everything else is the provider's JSON, verbatim.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use geogate::{AirQualityQuery, ProviderError, RouteQuery, TrafficQuery, ValidationError};

use crate::AppState;

/// Raw query parameters for the traffic incidents endpoint.
///
/// Every field is optional at the framework level; presence and validity
/// are decided by the validation layer so the error messages stay under the
/// gateway's control.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrafficParams {
    /// Bounding box as `southLat,westLon,northLat,eastLon`.
    pub bounding_box: Option<String>,
}

/// Raw query parameters for the route endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RouteParams {
    /// Start coordinate as `lat,lon`.
    pub source: Option<String>,
    /// End coordinate as `lat,lon`.
    pub destination: Option<String>,
    /// One of `car`, `truck`, `bicycle`, `pedestrian`.
    pub vehicle_type: Option<String>,
}

/// Raw query parameters for the air quality endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AirQualityParams {
    /// Latitude in decimal degrees.
    pub lat: Option<String>,
    /// Longitude in decimal degrees.
    pub lon: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Proxy traffic incident lookups.
///
/// # Query Parameters
///
/// - `bounding_box`: region of interest as `southLat,westLon,northLat,eastLon`
///
/// # Returns
///
/// - `200 OK` with the provider's incident payload, forwarded verbatim
/// - `400 Bad Request` if `bounding_box` is missing or empty
/// - `502 Bad Gateway` if the provider call fails
#[utoipa::path(
    get,
    path = "/traffic-incidents",
    params(TrafficParams),
    responses(
        (status = 200, description = "Provider incident payload, forwarded verbatim"),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 502, description = "Provider request failed", body = ErrorResponse),
    ),
    tag = "proxy"
)]
#[axum::debug_handler]
pub async fn traffic_incidents(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TrafficParams>,
) -> Response {
    let query = match TrafficQuery::parse(params.bounding_box.as_deref()) {
        Ok(query) => query,
        Err(e) => return validation_failure(e),
    };

    tracing::debug!(bounding_box = %query.bounding_box, "traffic incidents query");

    match state.traffic.incidents(&query).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => provider_failure(e),
    }
}

/// Proxy route calculations.
///
/// # Query Parameters
///
/// - `source`: start coordinate as `lat,lon`
/// - `destination`: end coordinate as `lat,lon`
/// - `vehicle_type`: one of `car`, `truck`, `bicycle`, `pedestrian`
///
/// # Returns
///
/// - `200 OK` with the provider's route payload, forwarded verbatim
/// - `400 Bad Request` if a parameter is missing or the vehicle type is unknown
/// - `502 Bad Gateway` if the provider call fails
#[utoipa::path(
    get,
    path = "/route",
    params(RouteParams),
    responses(
        (status = 200, description = "Provider route payload, forwarded verbatim"),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 502, description = "Provider request failed", body = ErrorResponse),
    ),
    tag = "proxy"
)]
#[axum::debug_handler]
pub async fn route(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RouteParams>,
) -> Response {
    let query = match RouteQuery::parse(
        params.source.as_deref(),
        params.destination.as_deref(),
        params.vehicle_type.as_deref(),
    ) {
        Ok(query) => query,
        Err(e) => return validation_failure(e),
    };

    tracing::debug!(
        source = %query.source,
        destination = %query.destination,
        vehicle_type = %query.vehicle_type,
        "route query"
    );

    match state.routing.route(&query).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => provider_failure(e),
    }
}

/// Proxy air quality lookups.
///
/// # Query Parameters
///
/// - `lat`: latitude in decimal degrees
/// - `lon`: longitude in decimal degrees
///
/// # Returns
///
/// - `200 OK` with the provider's feed payload, forwarded verbatim
/// - `400 Bad Request` if a coordinate is missing or not numeric
/// - `502 Bad Gateway` if the provider call fails
#[utoipa::path(
    get,
    path = "/air-quality",
    params(AirQualityParams),
    responses(
        (status = 200, description = "Provider feed payload, forwarded verbatim"),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 502, description = "Provider request failed", body = ErrorResponse),
    ),
    tag = "proxy"
)]
#[axum::debug_handler]
pub async fn air_quality(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AirQualityParams>,
) -> Response {
    let query = match AirQualityQuery::parse(params.lat.as_deref(), params.lon.as_deref()) {
        Ok(query) => query,
        Err(e) => return validation_failure(e),
    };

    tracing::debug!(lat = query.lat, lon = query.lon, "air quality query");

    match state.air_quality.nearest(&query).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => provider_failure(e),
    }
}

/// Health check endpoint.
///
/// Returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "system"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Render a pre-flight validation failure. No outbound call has been made.
fn validation_failure(e: ValidationError) -> Response {
    tracing::warn!(error = %e, "rejected request");

    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

/// Render a failed provider call.
///
/// The upstream's own status is not forwarded; every provider-side failure
/// surfaces as 502 with the error text in the body.
fn provider_failure(e: ProviderError) -> Response {
    tracing::warn!(provider = %e.provider(), error = %e, "provider call failed");

    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}
