//! Application layer - command handlers and the per-user draft session.

pub mod handlers;
pub mod session;
