//! Axum request handlers for all service endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use chrono::{SecondsFormat, Utc};

use common::protocol::{
    CreateUserRequest, ErrorResponse, HealthResponse, InfoResponse, KubernetesInfo, ReadyResponse,
    User,
};
use common::ServiceError;

use super::error::ApiError;
use super::state::AppState;
use crate::kube;

/// Service name reported by the info document and the UI page.
const SERVICE_NAME: &str = "k8s-demo-svc";

/// Service description reported by the info document.
const SERVICE_DESCRIPTION: &str = "Axum demo service for Kubernetes deployments";

/// Endpoint summaries reported by `GET /`. The UI page is a browser
/// convenience and intentionally absent from the list.
const ENDPOINTS: [&str; 7] = [
    "GET / - This information",
    "GET /health - Health check (for liveness probe)",
    "GET /ready - Readiness check (for readiness probe)",
    "GET /k8sinfo - Kubernetes information",
    "GET /api/users - Get all users",
    "GET /api/users/:id - Get user by ID",
    "POST /api/users - Create a new user",
];

/// Current time as an ISO 8601 UTC string with millisecond precision.
fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `GET /health` — liveness probe.
///
/// Always `200 OK`: the process being able to answer is the signal.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: iso_timestamp(),
    })
}

/// `GET /ready` — readiness probe.
///
/// The store is seeded in-process before the listener binds, so readiness
/// has nothing further to wait on.
pub async fn ready() -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: "READY".to_string(),
        timestamp: iso_timestamp(),
    })
}

/// `GET /k8sinfo` — snapshot of the pod-facing environment.
pub async fn k8sinfo() -> Json<KubernetesInfo> {
    Json(kube::from_env())
}

/// `GET /` — self-describing welcome document.
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: SERVICE_NAME.to_string(),
        description: SERVICE_DESCRIPTION.to_string(),
        kubernetes: kube::from_env(),
        endpoints: ENDPOINTS.iter().map(|s| s.to_string()).collect(),
        timestamp: iso_timestamp(),
    })
}

/// `GET /ui` — static browser page exercising the JSON endpoints.
pub async fn ui() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

/// `GET /api/users` — list every user in insertion order.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list().await)
}

/// `GET /api/users/:id` — look up one user.
///
/// The identifier is parsed here rather than by the extractor so an
/// unparseable id answers 404 like an absent one, not a routing 400.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id: u64 = id.parse().map_err(|_| ServiceError::NotFound)?;
    let user = state.users.get(id).await?;
    Ok(Json(user))
}

/// `POST /api/users` — validate and append a new user.
///
/// Both fields are optional on the wire; absence and emptiness answer the
/// same 400 from the store's validation.
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state
        .users
        .create(req.name.unwrap_or_default(), req.email.unwrap_or_default())
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}
