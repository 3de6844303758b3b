//! Chat intake endpoints.
//!
//! - `GET /api/chat/prompts`: prompt table, symptom vocabulary, bounds
//! - `POST /api/chat/appointments`: add an appointment date to the session
//! - `POST /api/chat/submit`: evaluate risk and record the visit once
//! - `POST /api/chat/report`: regenerate and download the PDF report

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::extract::{ApiJson, ApiQuery};
use crate::api::types::{ApiContext, SessionHandle};
use crate::flow::{self, IntakeForm, IntakeOutcome, AGE_RANGE, WEEKS_RANGE, WEIGHT_RANGE};
use crate::models::{Language, Notice, Symptom};
use crate::prompts::{prompts_for, Prompts};

#[derive(Deserialize)]
pub struct PromptsQuery {
    #[serde(default)]
    pub language: Language,
}

#[derive(Serialize)]
pub struct Bounds {
    pub age: (u32, u32),
    pub weight: (u32, u32),
    pub weeks: (u32, u32),
}

#[derive(Serialize)]
pub struct PromptsResponse {
    pub language: Language,
    pub prompts: &'static Prompts,
    pub symptoms: &'static [Symptom],
    pub bounds: Bounds,
}

pub async fn prompts(ApiQuery(query): ApiQuery<PromptsQuery>) -> Json<PromptsResponse> {
    Json(PromptsResponse {
        language: query.language,
        prompts: prompts_for(query.language),
        symptoms: Symptom::ALL,
        bounds: Bounds {
            age: AGE_RANGE,
            weight: WEIGHT_RANGE,
            weeks: WEEKS_RANGE,
        },
    })
}

#[derive(Deserialize)]
pub struct AppointmentRequest {
    pub date: NaiveDate,
}

pub async fn add_appointment(
    State(ctx): State<ApiContext>,
    Extension(session): Extension<SessionHandle>,
    ApiJson(req): ApiJson<AppointmentRequest>,
) -> Result<Json<Notice>, ApiError> {
    Ok(Json(flow::add_appointment(&ctx.core, &session.id, req.date)?))
}

#[derive(Deserialize)]
pub struct SubmitRequest {
    /// Client-chosen key; a visit is recorded at most once per key.
    pub submission_id: Uuid,
    #[serde(flatten)]
    pub form: IntakeForm,
}

pub async fn submit(
    State(ctx): State<ApiContext>,
    Extension(session): Extension<SessionHandle>,
    ApiJson(req): ApiJson<SubmitRequest>,
) -> Result<Json<IntakeOutcome>, ApiError> {
    Ok(Json(flow::submit_intake(
        &ctx.core,
        &session.id,
        &req.form,
        req.submission_id,
    )?))
}

/// `Content-Disposition` for the download. Names that are not plain ASCII
/// fall back to RFC 5987 encoding.
fn content_disposition(file_name: &str) -> HeaderValue {
    if file_name.is_ascii() {
        if let Ok(value) = HeaderValue::from_str(&format!("attachment; filename=\"{file_name}\"")) {
            return value;
        }
    }
    let encoded: String = file_name
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() || b"-_.".contains(&b) {
                (b as char).to_string()
            } else {
                format!("%{b:02X}")
            }
        })
        .collect();
    HeaderValue::from_str(&format!("attachment; filename*=UTF-8''{encoded}"))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

pub async fn report(
    State(ctx): State<ApiContext>,
    Extension(session): Extension<SessionHandle>,
    ApiJson(form): ApiJson<IntakeForm>,
) -> Result<impl IntoResponse, ApiError> {
    let (generated, notice) = flow::generate_report(&ctx.core, &session.id, &form)?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    headers.insert(header::CONTENT_DISPOSITION, content_disposition(&generated.file_name));
    if let Ok(value) = HeaderValue::from_str(&notice.text) {
        headers.insert("X-Notice", value);
    }

    Ok((headers, generated.bytes))
}
