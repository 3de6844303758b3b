//! API endpoint handlers.
//!
//! Each module corresponds to a screen or concern. Handlers decode the
//! request, call into `flow`, and encode the result.

pub mod account;
pub mod chat;
pub mod dashboard;
pub mod health;
pub mod session;
