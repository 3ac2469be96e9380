//! `/api/chirps` and `/api/validate_chirp` endpoints.

use serde::Deserialize;
use uuid::Uuid;

use crate::api::{ApiResult, Json};
use crate::app::AppState;
use crate::model::{Chirp, CleanedChirp};
use crate::request::Request;
use crate::status::Status;
use crate::validation;

/// Body of `POST /api/chirps`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateChirp {
    #[serde(default, deserialize_with = "validation::null_as_default")]
    pub body: String,
    #[serde(default, deserialize_with = "validation::null_as_default")]
    pub user_id: Uuid,
}

/// Body of `POST /api/validate_chirp`.
#[derive(Debug, Default, Deserialize)]
pub struct ValidateChirp {
    #[serde(default, deserialize_with = "validation::null_as_default")]
    pub body: String,
}

/// `POST /api/validate_chirp` → `200 {"cleaned_body": …}`.
pub async fn validate(state: AppState, req: Request) -> ApiResult<Json<CleanedChirp>> {
    let ValidateChirp { body } = validation::decode(&req)?;
    let cleaned_body = state.chirps().validate_chirp(&body)?;
    Ok(Json(Status::Ok, CleanedChirp { cleaned_body }))
}

/// `POST /api/chirps` → `201` with the stored chirp.
pub async fn create(state: AppState, req: Request) -> ApiResult<Json<Chirp>> {
    let CreateChirp { body, user_id } = validation::decode(&req)?;
    let chirp = state.chirps().create_chirp(&body, user_id).await?;
    Ok(Json(Status::Created, chirp))
}

/// `GET /api/chirps` → `200` with every chirp.
pub async fn list(state: AppState, _req: Request) -> ApiResult<Json<Vec<Chirp>>> {
    let chirps = state.chirps().list_all_chirps().await?;
    Ok(Json(Status::Ok, chirps))
}
