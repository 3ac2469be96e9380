//! Middleware layer.
//!
//! Cross-cutting concerns that wrap handlers or the whole dispatch:
//!
//! - [`trace`]: per-request span with method, path, status and latency.
//!   Applied by [`Router::dispatch`](crate::Router::dispatch) to every request.
//! - [`hits`]: counts every request routed through a wrapped handler.

pub mod hits;
pub(crate) mod trace;
