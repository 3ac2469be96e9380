//! HTTP handlers.
//!
//! Each handler decodes its payload through the validation gate, calls an
//! orchestrator from [`service`](crate::service) and encodes the outcome.

pub mod admin;
pub mod assets;
pub mod chirps;
pub mod encode;
pub mod error;
pub mod users;

pub use encode::Json;
pub use error::{ApiError, ApiResult};
