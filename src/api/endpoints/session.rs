//! Session lifecycle endpoints.
//!
//! - `POST /api/sessions`: start a session (unprotected)
//! - `GET /api/session`: current state of the session
//! - `DELETE /api/session`: end the session and drop its state

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, SessionHandle};
use crate::flow::{self, SessionStatus};

#[derive(Serialize)]
pub struct StartResponse {
    pub session_id: Uuid,
}

pub async fn start(
    State(ctx): State<ApiContext>,
) -> Result<(StatusCode, Json<StartResponse>), ApiError> {
    let session_id = ctx.core.start_session()?;
    Ok((StatusCode::CREATED, Json(StartResponse { session_id })))
}

pub async fn status(
    State(ctx): State<ApiContext>,
    Extension(session): Extension<SessionHandle>,
) -> Result<Json<SessionStatus>, ApiError> {
    Ok(Json(flow::status(&ctx.core, &session.id)?))
}

pub async fn end(
    State(ctx): State<ApiContext>,
    Extension(session): Extension<SessionHandle>,
) -> Result<StatusCode, ApiError> {
    ctx.core.end_session(&session.id)?;
    Ok(StatusCode::NO_CONTENT)
}
