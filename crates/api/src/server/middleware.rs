//! Axum middleware layers applied to the router.
//!
//! Includes request tracing and the panic-recovery responder.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use common::protocol::InternalErrorResponse;

/// Converts a recovered handler panic into the generic 500 response.
///
/// The panic payload is logged and replaced with the fixed wire body so no
/// internal detail reaches the client.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "non-string panic payload".to_string()
    };

    error!(panic = %detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(InternalErrorResponse::new()),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use axum::routing::get;
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    // Explicit return type: a closure with a bare `panic!` body trips
    // never-type fallback.
    async fn boom() -> &'static str {
        panic!("seed data corrupted")
    }

    #[tokio::test]
    async fn panicking_handler_becomes_generic_500() {
        let app: Router = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));

        let response = app
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Internal Server Error" }));
    }
}
