//! Shared integration-test harness.
//!
//! Builds the full application router with all middleware layers so tests
//! exercise the same stack (CORS, request ID, timeout, tracing, panic
//! recovery) that production uses, but against a fresh in-memory store and
//! a no-op observability sink.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use rigwatch_api::config::ServerConfig;
use rigwatch_api::routes;
use rigwatch_api::sink::NoopSink;
use rigwatch_api::state::AppState;
use rigwatch_core::reading::{DecodePolicy, TelemetryStore};

/// Build a test `ServerConfig` with safe defaults and the given policy.
pub fn test_config(policy: DecodePolicy) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        decode_policy: policy,
    }
}

/// Build the application router with the default (loose) decode policy.
pub fn build_test_app() -> Router {
    build_test_app_with_policy(DecodePolicy::Loose)
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs`.
pub fn build_test_app_with_policy(policy: DecodePolicy) -> Router {
    let state = AppState {
        store: Arc::new(TelemetryStore::new()),
        config: Arc::new(test_config(policy)),
        sink: Arc::new(NoopSink),
    };

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::telemetry::router())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: &Router, path: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a JSON POST request to the app and return the raw response.
pub async fn post_json(app: &Router, path: &str, body: serde_json::Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
