use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::api::{ApiError, ApiResult};
use crate::model::Chirp;
use crate::moderation::moderate;
use crate::store::{NewChirp, Store};
use crate::validation::check_chirp_len;

/// Validation, moderation and storage of chirps.
#[derive(Clone)]
pub struct ChirpService {
    store: Option<Arc<dyn Store>>,
}

impl ChirpService {
    pub fn new(store: Option<Arc<dyn Store>>) -> Self {
        Self { store }
    }

    /// Checks the raw body length, then returns the moderated body.
    pub fn validate_chirp(&self, body: &str) -> ApiResult<String> {
        check_chirp_len(body)?;
        Ok(moderate(body))
    }

    /// Validates, moderates and stores a chirp for `user_id`.
    pub async fn create_chirp(&self, body: &str, user_id: Uuid) -> ApiResult<Chirp> {
        let cleaned = self.validate_chirp(body)?;
        let store = self.store.as_ref().ok_or(ApiError::PersistenceDisabled)?;

        let row = store
            .create_chirp(NewChirp { body: cleaned, user_id })
            .await
            .map_err(ApiError::persistence("Could not create chirp"))?;

        info!(chirp_id = %row.id, %user_id, "chirp created");
        Ok(row.into())
    }

    /// Every chirp, in the order the store returns them. Empty is not an error.
    pub async fn list_all_chirps(&self) -> ApiResult<Vec<Chirp>> {
        let store = self.store.as_ref().ok_or(ApiError::PersistenceDisabled)?;
        let rows = store
            .list_chirps()
            .await
            .map_err(ApiError::persistence("Could not get chirps"))?;
        Ok(rows.into_iter().map(Chirp::from).collect())
    }
}
