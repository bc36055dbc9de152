//! Common types shared across `k8s-demo-svc` crates: wire protocol and errors.

pub mod error;
pub mod protocol;

pub use error::ServiceError;
