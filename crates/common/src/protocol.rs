//! Request and response types for the HTTP surface.
//!
//! Every body in the external contract has an explicit struct here; handlers
//! never build ad-hoc JSON.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Users resource
// ---------------------------------------------------------------------------

/// A user record, as stored and as returned by the `/api/users` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier; positive and unique for the process lifetime.
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Request body for `POST /api/users`.
///
/// Both fields deserialise as `Option` so that an absent field reaches the
/// validation path (400 with a message body) instead of being rejected by the
/// JSON extractor with a framework-shaped error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// Probes
// ---------------------------------------------------------------------------

/// Response body for `GET /health` (liveness probe).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"UP"` while the process can answer at all.
    pub status: String,
    /// Version of the running binary.
    pub version: String,
    /// ISO8601 timestamp of the probe evaluation.
    pub timestamp: String,
}

/// Response body for `GET /ready` (readiness probe).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    /// Always `"READY"`; the store is seeded before the listener binds.
    pub status: String,
    pub timestamp: String,
}

// ---------------------------------------------------------------------------
// Cluster introspection & info document
// ---------------------------------------------------------------------------

/// Response body for `GET /k8sinfo`: the pod-facing environment snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesInfo {
    pub namespace: String,
    pub pod_name: String,
    pub pod_ip: String,
    pub node_ip: String,
}

/// Response body for `GET /`: the self-describing welcome document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub name: String,
    pub description: String,
    pub kubernetes: KubernetesInfo,
    /// Human-readable list of the documented endpoints.
    pub endpoints: Vec<String>,
    pub timestamp: String,
}

// ---------------------------------------------------------------------------
// Error bodies
// ---------------------------------------------------------------------------

/// Error body for 4xx responses: `{"message": …}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body for unhandled failures: `{"error": "Internal Server Error"}`.
///
/// Deliberately carries no detail; whatever failed is logged server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternalErrorResponse {
    pub error: String,
}

impl InternalErrorResponse {
    /// The one generic body every unhandled failure maps to.
    pub fn new() -> Self {
        Self {
            error: "Internal Server Error".into(),
        }
    }
}

impl Default for InternalErrorResponse {
    fn default() -> Self {
        Self::new()
    }
}
