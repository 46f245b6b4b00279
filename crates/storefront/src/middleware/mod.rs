//! Middleware and request extractors.

pub mod auth;
pub mod session;

pub use auth::{OptionalAuth, RequireAuth, clear_current_user, set_current_user, visitor_key};
pub use session::create_session_layer;
