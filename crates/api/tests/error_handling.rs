//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use rigwatch_api::error::AppError;
use rigwatch_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::InvalidFieldType maps to 400 with INVALID_FIELD_TYPE code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_field_type_returns_400() {
    let err = AppError::Core(CoreError::InvalidFieldType {
        field: "temperature",
        value: "\"hot\"".to_string(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_FIELD_TYPE");
    assert_eq!(
        json["error"],
        "Invalid value for field 'temperature': expected a number, got \"hot\""
    );
}
