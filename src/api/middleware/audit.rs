//! Access logging middleware.
//!
//! Logs every session-bound request with session id, method, path,
//! status and latency. Request bodies are never logged (they carry
//! passwords).

use std::time::Instant;

use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::api::types::SessionHandle;

pub async fn log_access(req: Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let session = req.extensions().get::<SessionHandle>().map(|s| s.id);
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        session = ?session,
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "API access"
    );

    response
}
