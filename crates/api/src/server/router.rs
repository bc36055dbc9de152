//! Axum router construction.

use axum::{routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use super::{handlers, middleware, state::AppState};

/// Build the application [`Router`] with all routes and middleware attached.
///
/// `TraceLayer` sits outside the panic responder so a recovered 500 still
/// shows up in the request log. Request spans and response events are raised
/// to INFO so every request is logged at the default level.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::info))
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready))
        .route("/k8sinfo", get(handlers::k8sinfo))
        .route("/ui", get(handlers::ui))
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route("/api/users/:id", get(handlers::get_user))
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
