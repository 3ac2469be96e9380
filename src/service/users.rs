use std::sync::Arc;

use tracing::info;

use crate::api::{ApiError, ApiResult};
use crate::config::Platform;
use crate::metrics::HitCounter;
use crate::model::User;
use crate::store::Store;

/// Registration and the administrative reset.
#[derive(Clone)]
pub struct UserService {
    store: Option<Arc<dyn Store>>,
    hits: Arc<HitCounter>,
    platform: Platform,
}

impl UserService {
    pub fn new(store: Option<Arc<dyn Store>>, hits: Arc<HitCounter>, platform: Platform) -> Self {
        Self { store, hits, platform }
    }

    /// Registers a user. Email format and emptiness are not checked here;
    /// uniqueness is the store's call.
    pub async fn create_user(&self, email: &str) -> ApiResult<User> {
        let store = self.store.as_ref().ok_or(ApiError::PersistenceDisabled)?;
        let row = store
            .create_user(email)
            .await
            .map_err(ApiError::persistence("Could not create user"))?;

        info!(user_id = %row.id, "user created");
        Ok(row.into())
    }

    /// Deletes every user and zeroes the hit counter. Dev platform only.
    ///
    /// Chirps are kept. Without a store only the counter is cleared. If the
    /// deletion fails the counter is left as it was.
    pub async fn reset_all_users(&self) -> ApiResult<()> {
        if !self.platform.is_dev() {
            return Err(ApiError::Forbidden { action: "reset" });
        }

        if let Some(store) = &self.store {
            store
                .delete_all_users()
                .await
                .map_err(ApiError::persistence("Could not delete users"))?;
        }
        self.hits.reset();

        info!("users and hit counter reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service(platform: Platform) -> (UserService, Arc<MemoryStore>, Arc<HitCounter>) {
        let store = Arc::new(MemoryStore::new());
        let hits = Arc::new(HitCounter::new());
        let shared: Arc<dyn Store> = store.clone();
        let svc = UserService::new(Some(shared), hits.clone(), platform);
        (svc, store, hits)
    }

    #[tokio::test]
    async fn create_user_persists_one_row() {
        let (svc, store, _) = service(Platform::Dev);

        let user = svc.create_user("a@b.com").await.unwrap();

        let rows = store.list_users().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].email, "a@b.com");
        assert_eq!(rows[0].id, user.id);
        assert!(!user.id.is_nil());
    }

    #[tokio::test]
    async fn duplicate_email_is_a_persistence_failure() {
        let (svc, _, _) = service(Platform::Dev);
        svc.create_user("a@b.com").await.unwrap();

        let err = svc.create_user("a@b.com").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::PersistenceFailure { message: "Could not create user", .. }
        ));
    }

    #[tokio::test]
    async fn reset_outside_dev_changes_nothing() {
        let (svc, store, hits) = service(Platform::Other("prod".to_owned()));
        svc.create_user("a@b.com").await.unwrap();
        hits.increment();

        let err = svc.reset_all_users().await.unwrap_err();

        assert!(matches!(err, ApiError::Forbidden { .. }));
        assert_eq!(store.list_users().await.unwrap().len(), 1);
        assert_eq!(hits.value(), 1);
    }

    #[tokio::test]
    async fn reset_in_dev_is_idempotent() {
        let (svc, store, hits) = service(Platform::Dev);
        svc.create_user("a@b.com").await.unwrap();
        hits.increment();

        svc.reset_all_users().await.unwrap();
        svc.reset_all_users().await.unwrap();

        assert!(store.list_users().await.unwrap().is_empty());
        assert_eq!(hits.value(), 0);
    }

    #[tokio::test]
    async fn without_store_reset_clears_counter_and_create_is_disabled() {
        let hits = Arc::new(HitCounter::new());
        let svc = UserService::new(None, hits.clone(), Platform::Dev);
        hits.increment();

        svc.reset_all_users().await.unwrap();
        assert_eq!(hits.value(), 0);
        assert!(matches!(
            svc.create_user("a@b.com").await,
            Err(ApiError::PersistenceDisabled)
        ));
    }
}
