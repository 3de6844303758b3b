//! API middleware stack.
//!
//! Execution order on session-bound routes (outermost → innermost):
//! 1. Session resolver: `X-Session-Id` must name a live session
//! 2. Access logger: logs after the session is known

pub mod audit;
pub mod session;
