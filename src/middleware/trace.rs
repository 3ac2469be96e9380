//! Request tracing.

use std::future::Future;
use std::time::Instant;

use tracing::{Instrument, info, info_span, warn};

use crate::response::Response;

/// Runs `fut` inside a `request` span and logs how it went.
///
/// Server errors log at `warn`; everything else at `info`.
pub(crate) async fn instrument<F>(method: &str, path: &str, user_agent: &str, fut: F) -> Response
where
    F: Future<Output = Response>,
{
    let span = info_span!("request", %method, %path, %user_agent);
    let started = Instant::now();

    let res = fut.instrument(span.clone()).await;

    let status = res.status_code();
    let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
    span.in_scope(|| {
        if status >= 500 {
            warn!(status, latency_ms, "request failed");
        } else {
            info!(status, latency_ms, "request handled");
        }
    });
    res
}
