//! # chirpy
//!
//! A minimal HTTP backend for short text posts ("chirps"): register users,
//! post chirps that are length-checked and moderated, list them back.
//!
//! ## Layers
//!
//! - **Dispatcher**: [`Router`] (one radix tree per method, plus prefix
//!   mounts), [`Server`] (hyper, HTTP/1.1 and HTTP/2, graceful shutdown) and
//!   the [`middleware`] that wraps them.
//! - **Core**: the [`validation`] gate, the [`moderation`] filter, the
//!   [`metrics`] hit counter and the orchestrators in [`service`].
//! - **Edges**: [`api`] handlers and the JSON envelopes, the [`store`] port,
//!   and [`config`].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use chirpy::{AppState, Config, Server, app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), chirpy::Error> {
//!     let config = Config::from_env()?;
//!     let state = AppState::from_config(&config);
//!     Server::bind(config.addr).serve(app::router(state)).await
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod api;
pub mod app;
pub mod config;
pub mod metrics;
pub mod middleware;
pub mod model;
pub mod moderation;
pub mod service;
pub mod store;
pub mod validation;

pub use app::AppState;
pub use config::Config;
pub use error::Error;
pub use handler::Handler;
pub use method::{Method, UnknownMethod};
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
