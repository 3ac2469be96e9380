//! Persistence port.
//!
//! The orchestrators talk to storage only through [`Store`]. Identifiers and
//! timestamps are assigned by the store when a row is inserted, the same way
//! a relational backend fills them with column defaults.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

/// A stored chirp row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChirpRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

/// Insert parameters for a chirp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChirp {
    pub body: String,
    pub user_id: Uuid,
}

/// Failures reported by a [`Store`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("a user with email `{email}` already exists")]
    Conflict { email: String },

    #[error("user {user_id} does not exist")]
    ForeignKey { user_id: Uuid },

    #[error("storage backend unavailable: {message}")]
    Unavailable { message: String },
}

/// Storage for users and chirps.
#[async_trait]
pub trait Store: Send + Sync {
    /// Inserts a user with a fresh id and timestamps. Emails are unique.
    async fn create_user(&self, email: &str) -> Result<UserRecord, StoreError>;

    /// Every user, oldest first.
    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// Removes every user row. Chirp rows are left alone.
    async fn delete_all_users(&self) -> Result<(), StoreError>;

    /// Inserts a chirp owned by an existing user.
    async fn create_chirp(&self, chirp: NewChirp) -> Result<ChirpRecord, StoreError>;

    /// Every chirp, oldest first.
    async fn list_chirps(&self) -> Result<Vec<ChirpRecord>, StoreError>;
}
