//! `/admin` endpoints.

use crate::api::ApiResult;
use crate::app::AppState;
use crate::request::Request;
use crate::response::{ContentType, Response};
use crate::status::Status;

/// `GET /admin/healthz`. Always `200 OK`; if the process can answer at
/// all, it is alive.
pub async fn healthz(_state: AppState, _req: Request) -> Response {
    Response::text("OK")
}

/// `GET /admin/metrics`. HTML report of static asset hits.
pub async fn metrics(state: AppState, _req: Request) -> Response {
    Response::builder().bytes(ContentType::Html, state.hits().report().into_bytes())
}

/// `POST /admin/reset`. Dev platform only.
pub async fn reset(state: AppState, _req: Request) -> ApiResult<Status> {
    state.users().reset_all_users().await?;
    Ok(Status::Ok)
}
