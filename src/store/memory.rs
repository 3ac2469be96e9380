//! In-process [`Store`] implementation.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{ChirpRecord, NewChirp, Store, StoreError, UserRecord};

/// Keeps rows in insertion order behind a single lock per table.
///
/// Rows live as long as the process. Each call takes one lock, so
/// concurrent writers are serialised per table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<UserRecord>>,
    chirps: RwLock<Vec<ChirpRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, email: &str) -> Result<UserRecord, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::Conflict { email: email.to_owned() });
        }

        let now = Utc::now();
        let user = UserRecord {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email: email.to_owned(),
        };
        users.push(user.clone());
        debug!(user_id = %user.id, "user row inserted");
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn delete_all_users(&self) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        debug!(deleted = users.len(), "user rows deleted");
        users.clear();
        Ok(())
    }

    async fn create_chirp(&self, chirp: NewChirp) -> Result<ChirpRecord, StoreError> {
        // Hold the users lock while inserting so the owner cannot vanish
        // between the check and the write.
        let users = self.users.read().await;
        if !users.iter().any(|u| u.id == chirp.user_id) {
            return Err(StoreError::ForeignKey { user_id: chirp.user_id });
        }

        let now = Utc::now();
        let record = ChirpRecord {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body: chirp.body,
            user_id: chirp.user_id,
        };
        self.chirps.write().await.push(record.clone());
        debug!(chirp_id = %record.id, "chirp row inserted");
        Ok(record)
    }

    async fn list_chirps(&self) -> Result<Vec<ChirpRecord>, StoreError> {
        Ok(self.chirps.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_user_assigns_id_and_timestamps() {
        let store = MemoryStore::new();
        let user = store.create_user("a@b.com").await.unwrap();

        assert!(!user.id.is_nil());
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(store.list_users().await.unwrap(), vec![user]);
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let store = MemoryStore::new();
        store.create_user("a@b.com").await.unwrap();

        let err = store.create_user("a@b.com").await.unwrap_err();
        assert_eq!(err, StoreError::Conflict { email: "a@b.com".to_owned() });
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn chirp_requires_existing_owner() {
        let store = MemoryStore::new();
        let stranger = Uuid::new_v4();

        let err = store
            .create_chirp(NewChirp { body: "hi".to_owned(), user_id: stranger })
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::ForeignKey { user_id: stranger });
        assert!(store.list_chirps().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn chirps_list_in_insertion_order() {
        let store = MemoryStore::new();
        let user = store.create_user("a@b.com").await.unwrap();
        for body in ["first", "second", "third"] {
            store
                .create_chirp(NewChirp { body: body.to_owned(), user_id: user.id })
                .await
                .unwrap();
        }

        let bodies: Vec<_> = store.list_chirps().await.unwrap().into_iter().map(|c| c.body).collect();
        assert_eq!(bodies, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn deleting_users_keeps_chirps() {
        let store = MemoryStore::new();
        let user = store.create_user("a@b.com").await.unwrap();
        store
            .create_chirp(NewChirp { body: "still here".to_owned(), user_id: user.id })
            .await
            .unwrap();

        store.delete_all_users().await.unwrap();
        store.delete_all_users().await.unwrap();

        assert!(store.list_users().await.unwrap().is_empty());
        assert_eq!(store.list_chirps().await.unwrap().len(), 1);
    }
}
