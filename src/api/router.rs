//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! JSON routes are nested under `/api/`, the greeting stream lives at
//! `/ws/greeting`.
//!
//! Middleware stack on session-bound routes (outermost → innermost):
//! 1. Extension(ApiContext) → 2. Session resolver → 3. Access logger

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::api::websocket;
use crate::core_state::CoreState;

/// Build the API router around shared state.
pub fn api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    // Session-bound routes. Extension must be outermost so the session
    // middleware can reach ApiContext.
    let sessioned = Router::new()
        .route(
            "/session",
            get(endpoints::session::status).delete(endpoints::session::end),
        )
        .route("/login", post(endpoints::account::login))
        .route("/logout", post(endpoints::account::logout))
        .route("/chat/appointments", post(endpoints::chat::add_appointment))
        .route("/chat/submit", post(endpoints::chat::submit))
        .route("/chat/report", post(endpoints::chat::report))
        .with_state(ctx.clone())
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(axum::middleware::from_fn(middleware::session::require_session))
        .layer(axum::Extension(ctx.clone()));

    // Routes that work without a session.
    let open = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/sessions", post(endpoints::session::start))
        .route("/signup", post(endpoints::account::signup))
        .route("/dashboard", get(endpoints::dashboard::list))
        .route("/chat/prompts", get(endpoints::chat::prompts))
        .with_state(ctx.clone());

    let ws_routes = Router::new()
        .route("/ws/greeting", get(websocket::greeting_upgrade))
        .with_state(ctx);

    Router::new()
        .nest("/api", sessioned)
        .nest("/api", open)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .merge(ws_routes)
}
