//! Local HTTP API.
//!
//! Each screen of the intake form is exposed as a small set of JSON
//! endpoints under `/api/`, one request per user action. Requests that act
//! on a session carry its id in the `X-Session-Id` header; the greeting
//! animation streams over `/ws/greeting`.
//!
//! The router is composable: `api_router()` returns a `Router` that can
//! be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;
pub mod websocket;

pub use router::api_router;
pub use server::{start_api_server, ApiServer};
pub use types::ApiContext;
