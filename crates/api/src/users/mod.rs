//! In-memory user resource.
//!
//! # Lifecycle
//!
//! 1. At startup, `main` builds a [`UserStore`] pre-seeded with three demo
//!    records and hands it to the router state.
//! 2. Handlers read and append through the store's async accessors; records
//!    are never updated or deleted.
//! 3. Everything lives in process memory and vanishes on termination.

pub mod store;

pub use store::UserStore;
