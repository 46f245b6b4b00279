//! Session-scoped values.

use serde::{Deserialize, Serialize};

use atelier_core::UserId;

/// Session storage keys.
pub mod session_keys {
    /// The authenticated shopper, if any.
    pub const CURRENT_USER: &str = "current_user";
    /// Stable per-session visitor token; keys likes and checkout attempts
    /// for shoppers without an account.
    pub const VISITOR_ID: &str = "visitor_id";
}

/// The authenticated shopper stored in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
}
