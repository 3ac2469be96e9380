//! Unified error type for startup and serving.

use crate::config::ConfigError;

/// The error type returned by chirpy's fallible infrastructure operations.
///
/// Request-level failures (400, 403, 500…) are expressed as HTTP responses
/// through [`ApiError`](crate::api::ApiError), not as `Error`s. This type
/// surfaces what stops the process: bad configuration or failing to bind.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(#[from] ConfigError),
}
