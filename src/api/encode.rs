//! JSON response envelopes.

use serde::Serialize;

use crate::api::error::ApiError;
use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// A serialisable payload sent with a given status.
///
/// If serialisation fails the client gets a bare `500`, never a success
/// status with a broken body.
pub struct Json<T>(pub Status, pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        respond_json(self.0, &self.1)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Serialises `payload` as the response body.
pub fn respond_json<T: Serialize + ?Sized>(status: Status, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(bytes) => Response::builder().status(status).json(bytes),
        Err(e) => ApiError::EncodingFailure(e).into_response(),
    }
}

/// The `{"error": message}` envelope.
pub fn respond_error(status: Status, message: &str) -> Response {
    respond_json(status, &ErrorBody { error: message })
}
