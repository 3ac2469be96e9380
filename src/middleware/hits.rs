//! Hit-counting middleware.
//!
//! Wraps a handler so that every request reaching it bumps the shared
//! [`HitCounter`] before the inner handler runs. The count is taken on
//! traversal: a request that ends in a 404 from the inner handler still
//! counts.
//!
//! ```rust,no_run
//! use chirpy::middleware::hits::count_hits;
//! use chirpy::{AppState, Router, api};
//!
//! fn routes(state: AppState) -> Router<AppState> {
//!     Router::with_state(state)
//!         .mount("/app/", count_hits(api::assets::serve))
//! }
//! ```

use std::future::Future;

use crate::metrics::HitCounter;
use crate::request::Request;

/// Returns a handler that increments the state's [`HitCounter`] and then
/// delegates to `inner`.
pub fn count_hits<S, H, Fut>(inner: H) -> impl Fn(S, Request) -> Fut + Send + Sync + 'static
where
    S: AsRef<HitCounter> + 'static,
    H: Fn(S, Request) -> Fut + Send + Sync + 'static,
    Fut: Future + Send + 'static,
{
    move |state: S, req: Request| {
        state.as_ref().increment();
        inner(state, req)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{Method, Router, Status};

    #[derive(Clone, Default)]
    struct State(Arc<HitCounter>);

    impl AsRef<HitCounter> for State {
        fn as_ref(&self) -> &HitCounter {
            &self.0
        }
    }

    async fn missing(_state: State, _req: Request) -> Status {
        Status::NotFound
    }

    #[tokio::test]
    async fn counts_requests_even_when_inner_fails() {
        let state = State::default();
        let router = Router::with_state(state.clone())
            .mount("/app/", count_hits(missing));

        for _ in 0..3 {
            let res = router.dispatch(Request::new(Method::Get, "/app/nope.png", "")).await;
            assert_eq!(res.status_code(), 404);
        }
        assert_eq!(state.0.value(), 3);
    }

    #[tokio::test]
    async fn unrouted_requests_do_not_count() {
        let state = State::default();
        let router = Router::with_state(state.clone())
            .mount("/app/", count_hits(missing));

        router.dispatch(Request::new(Method::Get, "/admin/metrics", "")).await;
        assert_eq!(state.0.value(), 0);
    }
}
