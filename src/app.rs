//! Shared state and the route table.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::{admin, assets, chirps, users};
use crate::config::{Config, Platform, StoreTarget};
use crate::method::Method;
use crate::metrics::HitCounter;
use crate::middleware::hits::count_hits;
use crate::router::Router;
use crate::service::{ChirpService, UserService};
use crate::store::{MemoryStore, Store};

/// Everything handlers share. Cloning is one `Arc` bump.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    hits: Arc<HitCounter>,
    users: UserService,
    chirps: ChirpService,
    assets: PathBuf,
    persistence: bool,
}

impl AppState {
    /// `store: None` runs the service in validate-only mode.
    pub fn new(store: Option<Arc<dyn Store>>, platform: Platform, assets: impl Into<PathBuf>) -> Self {
        let hits = Arc::new(HitCounter::new());
        let persistence = store.is_some();
        Self {
            inner: Arc::new(Inner {
                users: UserService::new(store.clone(), Arc::clone(&hits), platform),
                chirps: ChirpService::new(store),
                hits,
                assets: assets.into(),
                persistence,
            }),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let store: Option<Arc<dyn Store>> = match config.store {
            StoreTarget::Disabled => None,
            StoreTarget::Memory => Some(Arc::new(MemoryStore::new())),
        };
        Self::new(store, config.platform.clone(), config.assets.clone())
    }

    pub fn hits(&self) -> &HitCounter { &self.inner.hits }
    pub fn users(&self) -> &UserService { &self.inner.users }
    pub fn chirps(&self) -> &ChirpService { &self.inner.chirps }
    pub fn assets(&self) -> &Path { &self.inner.assets }
    pub fn persistence_enabled(&self) -> bool { self.inner.persistence }
}

impl AsRef<HitCounter> for AppState {
    fn as_ref(&self) -> &HitCounter {
        self.hits()
    }
}

/// Builds the router for `state`.
///
/// Validate-only mode serves the admin endpoints, static assets and
/// `POST /api/validate_chirp`. With persistence, the user and chirp
/// resources are added on top.
pub fn router(state: AppState) -> Router<AppState> {
    let persistence = state.persistence_enabled();

    let router = Router::with_state(state)
        .mount("/app/", count_hits(assets::serve))
        .on(Method::Get,  "/admin/healthz",      admin::healthz)
        .on(Method::Get,  "/admin/metrics",      admin::metrics)
        .on(Method::Post, "/admin/reset",        admin::reset)
        .on(Method::Post, "/api/validate_chirp", chirps::validate);

    if !persistence {
        return router;
    }

    router
        .on(Method::Post, "/api/users",  users::create)
        .on(Method::Post, "/api/chirps", chirps::create)
        .on(Method::Get,  "/api/chirps", chirps::list)
}
