//! Shared types for the API layer.

use std::sync::Arc;

use uuid::Uuid;

use crate::core_state::CoreState;

/// Header carrying the session id on every session-bound request.
pub const SESSION_HEADER: &str = "X-Session-Id";

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        Self { core }
    }
}

/// Resolved session, injected into request extensions by the session
/// middleware after the `X-Session-Id` header was validated.
#[derive(Debug, Clone, Copy)]
pub struct SessionHandle {
    pub id: Uuid,
}
