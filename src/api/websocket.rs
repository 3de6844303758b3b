//! Greeting stream over WebSocket.
//!
//! `GET /ws/greeting?session=<id>&language=<English|Hindi>` upgrades once
//! the session is known and logged in, then sends the greeting one frame
//! per character (each frame is the full prefix so far) with the
//! configured delay between frames. When the last frame is out the full
//! greeting is appended to the session's message log and the socket is
//! closed.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::extract::ApiQuery;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;
use crate::flow;
use crate::greeting;
use crate::models::Language;

#[derive(Deserialize)]
pub struct GreetingQuery {
    session: Uuid,
    #[serde(default)]
    language: Language,
}

pub async fn greeting_upgrade(
    ws: WebSocketUpgrade,
    State(ctx): State<ApiContext>,
    ApiQuery(query): ApiQuery<GreetingQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let text = flow::greeting(&ctx.core, &query.session, query.language)?;

    tracing::debug!(session = %query.session, language = %query.language, "Greeting stream accepted");
    let core = ctx.core.clone();
    Ok(ws.on_upgrade(move |socket| stream_greeting(socket, core, query.session, text)))
}

async fn stream_greeting(
    mut socket: WebSocket,
    core: Arc<CoreState>,
    session_id: Uuid,
    text: &'static str,
) {
    let (tx, mut rx) = mpsc::channel::<String>(16);
    let delay = core.config.greeting_delay;

    let producer = tokio::spawn(async move { greeting::type_out(text, delay, &tx).await });

    let mut delivered = true;
    while let Some(frame) = rx.recv().await {
        if socket.send(Message::Text(frame)).await.is_err() {
            delivered = false;
            break;
        }
    }
    drop(rx);

    let completed = matches!(producer.await, Ok(true));
    if delivered && completed {
        if let Err(e) = flow::greeting_shown(&core, &session_id, text) {
            tracing::warn!(session = %session_id, "Greeting not logged: {e}");
        }
    }

    let _ = socket.close().await;
    tracing::debug!(session = %session_id, delivered, "Greeting stream closed");
}
