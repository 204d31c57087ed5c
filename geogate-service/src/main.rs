//! Geogate Service - HTTP gateway for third-party geospatial data providers.
//!
//! Proxies traffic-incident, route-calculation and air-quality lookups to
//! their external providers, validating query parameters before each
//! outbound call and relaying provider JSON verbatim.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `GEOGATE_TRAFFIC_URL` | Traffic incidents base URL | TomTom incident details |
//! | `GEOGATE_TRAFFIC_KEY` | Traffic provider API key | Required |
//! | `GEOGATE_ROUTING_URL` | Routing base URL | TomTom routing |
//! | `GEOGATE_ROUTING_KEY` | Routing provider API key | Required |
//! | `GEOGATE_AIR_QUALITY_URL` | Air quality base URL | WAQI geo feed |
//! | `GEOGATE_AIR_QUALITY_TOKEN` | Air quality provider token | Required |
//! | `GEOGATE_HTTP_TIMEOUT_SECS` | Outbound request timeout | 10 |
//! | `GEOGATE_PORT` | HTTP server port | 8080 |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `GET /traffic-incidents?bounding_box=S,W,N,E` - Traffic incidents in a region
//! - `GET /route?source=lat,lon&destination=lat,lon&vehicle_type=car` - Route details
//! - `GET /air-quality?lat=X&lon=Y` - Nearest air quality feed
//! - `GET /health` - Health check
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use std::net::SocketAddr;
use std::sync::Arc;

use geogate::{AirQualityClient, GatewayConfig, RoutingClient, TrafficClient};
use geogate_service::{handlers, AppState};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation for the geogate service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Geogate",
        version = "0.1.0",
        description = "HTTP gateway proxying traffic, routing and air-quality providers.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        handlers::traffic_incidents,
        handlers::route,
        handlers::air_quality,
        handlers::health_check,
    ),
    components(schemas(handlers::ErrorResponse, handlers::HealthResponse)),
    tags(
        (name = "proxy", description = "Provider proxy endpoints"),
        (name = "system", description = "System and health endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geogate_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load port from environment (service-specific config)
    let port: u16 = std::env::var("GEOGATE_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    // Provider credentials and base URLs; aborts if a credential is missing
    let config = GatewayConfig::from_env()?;

    // One connection pool shared by all three clients
    let http = config.http_client()?;

    let state = Arc::new(AppState {
        traffic: TrafficClient::new(http.clone(), &config),
        routing: RoutingClient::new(http.clone(), &config),
        air_quality: AirQualityClient::new(http, &config),
    });

    tracing::info!(
        traffic_url = %config.traffic_base_url,
        routing_url = %config.routing_base_url,
        air_quality_url = %config.air_quality_base_url,
        timeout_secs = config.http_timeout.as_secs(),
        port = port,
        "Starting geogate service"
    );

    // Build router
    let app = geogate_service::router(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
