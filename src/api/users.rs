//! `/api/users` endpoints.

use serde::Deserialize;

use crate::api::{ApiResult, Json};
use crate::app::AppState;
use crate::model::User;
use crate::request::Request;
use crate::status::Status;
use crate::validation;

/// Body of `POST /api/users`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUser {
    #[serde(default, deserialize_with = "validation::null_as_default")]
    pub email: String,
}

/// `POST /api/users` → `201` with the new user.
pub async fn create(state: AppState, req: Request) -> ApiResult<Json<User>> {
    let CreateUser { email } = validation::decode(&req)?;
    let user = state.users().create_user(&email).await?;
    Ok(Json(Status::Created, user))
}
