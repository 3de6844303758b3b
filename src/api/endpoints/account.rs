//! Signup, login and logout.
//!
//! - `POST /api/signup`: create an account (unprotected)
//! - `POST /api/login`: bind a username to the session
//! - `POST /api/logout`: clear the session's identity

use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::{ApiContext, SessionHandle};
use crate::flow;
use crate::models::Notice;

#[derive(Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub async fn signup(
    State(ctx): State<ApiContext>,
    ApiJson(creds): ApiJson<Credentials>,
) -> Result<Json<Notice>, ApiError> {
    Ok(Json(flow::signup(&ctx.core, &creds.username, &creds.password)?))
}

pub async fn login(
    State(ctx): State<ApiContext>,
    Extension(session): Extension<SessionHandle>,
    ApiJson(creds): ApiJson<Credentials>,
) -> Result<Json<Notice>, ApiError> {
    Ok(Json(flow::login(
        &ctx.core,
        &session.id,
        &creds.username,
        &creds.password,
    )?))
}

pub async fn logout(
    State(ctx): State<ApiContext>,
    Extension(session): Extension<SessionHandle>,
) -> Result<Json<Notice>, ApiError> {
    Ok(Json(flow::logout(&ctx.core, &session.id)?))
}
