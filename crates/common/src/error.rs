//! Common error types shared across crates.

use thiserror::Error;

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::NotFound`] → 404
/// - [`ServiceError::InvalidInput`] → 400
/// - [`ServiceError::Internal`] → 500
///
/// The `Display` text of the 4xx variants is the exact `message` body sent to
/// clients. `Internal` detail is logged server-side and never exposed.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested user does not exist, or the id segment was not a valid integer.
    #[error("User not found")]
    NotFound,

    /// A required field on create was missing or empty.
    #[error("Name and email are required")]
    InvalidInput,

    /// Any other failure inside a handler.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::NotFound => 404,
            ServiceError::InvalidInput => 400,
            ServiceError::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_codes() {
        assert_eq!(ServiceError::NotFound.http_status(), 404);
        assert_eq!(ServiceError::InvalidInput.http_status(), 400);
        assert_eq!(ServiceError::Internal("x".into()).http_status(), 500);
    }

    #[test]
    fn display_is_the_wire_message() {
        assert_eq!(ServiceError::NotFound.to_string(), "User not found");
        assert_eq!(
            ServiceError::InvalidInput.to_string(),
            "Name and email are required"
        );
    }

    #[test]
    fn internal_detail_stays_in_display() {
        let e = ServiceError::Internal("store lock poisoned".into());
        assert!(e.to_string().contains("store lock poisoned"));
    }
}
