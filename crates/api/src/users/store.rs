//! Lock-guarded in-memory user records.

use std::sync::Arc;

use tokio::sync::RwLock;

use common::protocol::User;
use common::ServiceError;

/// Demo records every fresh service instance starts with.
fn seed_records() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 2,
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
        },
        User {
            id: 3,
            name: "Charlie".to_string(),
            email: "charlie@example.com".to_string(),
        },
    ]
}

/// Shared handle to the user records.
///
/// Clones are cheap and refer to the same underlying data. Reads take a
/// shared lock; `create` takes the write lock for the whole
/// read-max-then-append sequence so concurrent creates cannot observe the
/// same maximum and mint duplicate ids.
#[derive(Debug, Clone)]
pub struct UserStore {
    records: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a store pre-populated with the demo records.
    pub fn seeded() -> Self {
        Self {
            records: Arc::new(RwLock::new(seed_records())),
        }
    }

    /// Returns all records in insertion order.
    pub async fn list(&self) -> Vec<User> {
        self.records.read().await.clone()
    }

    /// Looks up a record by id.
    pub async fn get(&self, id: u64) -> Result<User, ServiceError> {
        self.records
            .read()
            .await
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or(ServiceError::NotFound)
    }

    /// Validates and appends a new record, assigning the next id.
    ///
    /// The id is one greater than the current maximum, or 1 for an empty
    /// store. Ids of removed records are never a concern here since records
    /// are append-only.
    pub async fn create(&self, name: String, email: String) -> Result<User, ServiceError> {
        if name.is_empty() || email.is_empty() {
            return Err(ServiceError::InvalidInput);
        }

        let mut records = self.records.write().await;
        let id = records.iter().map(|user| user.id).max().map_or(1, |max| max + 1);
        let user = User { id, name, email };
        records.push(user.clone());
        Ok(user)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
