//! `GET /api/dashboard`: every user's visit history.
//!
//! Mounted without the session middleware: under the `open` policy no
//! session is needed. Under `logged-in` the optional `X-Session-Id`
//! header must name a logged-in session.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::middleware::session::session_id_from_headers;
use crate::api::types::ApiContext;
use crate::flow::{self, Dashboard};

pub async fn list(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
) -> Result<Json<Dashboard>, ApiError> {
    let session_id = session_id_from_headers(&headers);
    Ok(Json(flow::dashboard(&ctx.core, session_id.as_ref())?))
}
