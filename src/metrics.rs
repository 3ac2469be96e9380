//! Process-wide request counter for the static asset path.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counts requests routed through the static asset prefix.
///
/// Starts at zero, only ever goes up, and is cleared by the administrative
/// reset. Shared behind an `Arc` by [`AppState`](crate::AppState); nothing
/// else holds it.
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicU64,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one hit. Never loses an increment under concurrency.
    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Current count. May trail increments still in flight on other threads.
    pub fn value(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Sets the count back to zero. A concurrent increment may land on
    /// either side of the reset.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }

    /// The HTML admin report served at `/admin/metrics`.
    pub fn report(&self) -> String {
        format!(
            "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {} times!</p>\n  </body>\n</html>",
            self.value()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn starts_at_zero_and_resets() {
        let hits = HitCounter::new();
        assert_eq!(hits.value(), 0);
        hits.increment();
        hits.increment();
        assert_eq!(hits.value(), 2);
        hits.reset();
        assert_eq!(hits.value(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_increments_are_not_lost() {
        const TASKS: u64 = 64;
        const PER_TASK: u64 = 500;

        let hits = Arc::new(HitCounter::new());
        let mut set = tokio::task::JoinSet::new();
        for _ in 0..TASKS {
            let hits = Arc::clone(&hits);
            set.spawn(async move {
                for _ in 0..PER_TASK {
                    hits.increment();
                }
            });
        }
        while let Some(res) = set.join_next().await {
            res.unwrap();
        }

        assert_eq!(hits.value(), TASKS * PER_TASK);
    }

    #[test]
    fn report_embeds_current_count() {
        let hits = HitCounter::new();
        for _ in 0..7 {
            hits.increment();
        }
        let report = hits.report();
        assert!(report.starts_with("<html>"));
        assert!(report.contains("<p>Chirpy has been visited 7 times!</p>"));
    }
}
