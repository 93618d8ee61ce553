//! The dashboard router.
//!
//! `main.rs` and the integration tests both go through [`build_app_router`],
//! so tests see the same middleware as production.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::html::IMAGE_ROUTE;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID: &str = "x-request-id";

/// Assemble pages, API, images and middleware.
///
/// Requests pass through CORS first, then get a request id, are traced,
/// have the id copied to the response, time out after
/// `request_timeout_secs` (408), and are compressed. Panics become 500s.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Result<Router, BuildError> {
    let cors = build_cors_layer(config)?;
    let request_id = HeaderName::from_static(REQUEST_ID);

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::dashboard::router())
        .nest("/api/v1", routes::api_routes())
        .nest_service(IMAGE_ROUTE, ServeDir::new(&config.img_dir));

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Ok(app
        .layer(CatchPanicLayer::new())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(trace)
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors)
        .with_state(state))
}

/// A configured CORS origin is not a valid header value.
#[derive(Debug, thiserror::Error)]
#[error("Invalid CORS origin '{origin}'")]
pub struct BuildError {
    pub origin: String,
}

/// CORS for the configured origins. Everything served is read-only, so
/// `GET` is the only method allowed.
pub fn build_cors_layer(config: &ServerConfig) -> Result<CorsLayer, BuildError> {
    let mut origins = Vec::with_capacity(config.cors_origins.len());
    for origin in &config.cors_origins {
        let value = origin.parse::<HeaderValue>().map_err(|_| BuildError {
            origin: origin.clone(),
        })?;
        origins.push(value);
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600)))
}
