//! Request-level failures and how they reach the client.
//!
//! The full error, including any storage detail, is logged. Only the class
//! message for the status goes over the wire, inside the `{"error": …}`
//! envelope.

use tracing::{error, info};

use crate::api::encode::respond_error;
use crate::response::{IntoResponse, Response};
use crate::status::Status;
use crate::store::StoreError;

/// Convenient result alias for handlers and orchestrators.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The payload could not be decoded.
    #[error("malformed request: {0}")]
    MalformedRequest(#[source] serde_json::Error),

    /// The chirp body is over the length limit.
    #[error("chirp is {len} characters, limit is {max}")]
    TooLong { len: usize, max: usize },

    /// An administrative action outside the dev platform.
    #[error("{action} refused outside the dev platform")]
    Forbidden { action: &'static str },

    /// The store failed. `message` is what the client sees.
    #[error("{message}: {source}")]
    PersistenceFailure {
        message: &'static str,
        #[source]
        source: StoreError,
    },

    /// A persistence-backed operation ran with no store configured.
    #[error("persistence is disabled")]
    PersistenceDisabled,

    /// The success payload could not be serialised.
    #[error("failed to encode response: {0}")]
    EncodingFailure(#[source] serde_json::Error),
}

impl ApiError {
    pub(crate) fn persistence(message: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::PersistenceFailure { message, source }
    }

    pub fn status(&self) -> Status {
        match self {
            Self::MalformedRequest(_) | Self::TooLong { .. } => Status::BadRequest,
            Self::Forbidden { .. } => Status::Forbidden,
            Self::PersistenceDisabled => Status::NotFound,
            Self::PersistenceFailure { .. } | Self::EncodingFailure(_) => {
                Status::InternalServerError
            }
        }
    }

    /// What the client is told. `None` means an empty body.
    pub fn public_message(&self) -> Option<&'static str> {
        match self {
            Self::MalformedRequest(_) => Some("Something went wrong"),
            Self::TooLong { .. } => Some("Chirp is too long"),
            Self::Forbidden { .. } => Some("Forbidden"),
            Self::PersistenceFailure { message, .. } => Some(*message),
            Self::PersistenceDisabled => Some("Not Found"),
            Self::EncodingFailure(_) => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if u16::from(status) >= 500 {
            error!(error = %self, "request failed");
        } else {
            info!(error = %self, "request rejected");
        }

        match self.public_message() {
            Some(message) => respond_error(status, message),
            None => Response::status(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn body_json(res: &Response) -> Value {
        serde_json::from_slice(res.body()).unwrap()
    }

    #[test]
    fn storage_detail_never_reaches_the_client() {
        let err = ApiError::persistence("Could not create user")(StoreError::Conflict {
            email: "secret@example.com".to_owned(),
        });
        let res = err.into_response();

        assert_eq!(res.status_code(), 500);
        assert_eq!(body_json(&res), serde_json::json!({ "error": "Could not create user" }));
        assert!(!String::from_utf8_lossy(res.body()).contains("secret"));
    }

    #[test]
    fn too_long_is_bad_request() {
        let res = ApiError::TooLong { len: 141, max: 140 }.into_response();
        assert_eq!(res.status_code(), 400);
        assert_eq!(res.header("content-type"), Some("application/json"));
        assert_eq!(body_json(&res)["error"], "Chirp is too long");
    }

    #[test]
    fn forbidden_is_403() {
        let res = ApiError::Forbidden { action: "reset" }.into_response();
        assert_eq!(res.status_code(), 403);
        assert_eq!(body_json(&res)["error"], "Forbidden");
    }

    #[test]
    fn encoding_failure_has_empty_body() {
        let source = serde_json::from_str::<Value>("{").unwrap_err();
        let res = ApiError::EncodingFailure(source).into_response();
        assert_eq!(res.status_code(), 500);
        assert!(res.body().is_empty());
    }
}
