//! Shared application state injected into every Axum handler.

use crate::users::UserStore;

/// Application state shared across all request handlers.
///
/// The store is cheaply cloneable (`Arc`-backed) so that Axum can clone the
/// state for each request without copying the records.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe store for the user records.
    pub users: UserStore,
}

impl AppState {
    /// Create a new [`AppState`] around the provided store.
    pub fn new(users: UserStore) -> Self {
        Self { users }
    }
}

impl Default for AppState {
    /// Creates an [`AppState`] with the seeded store, mirroring startup.
    fn default() -> Self {
        Self::new(UserStore::seeded())
    }
}
