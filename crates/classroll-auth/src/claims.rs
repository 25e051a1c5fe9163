//! JWT claim structure for session tokens.

use classroll_core::Role;
use serde::{Deserialize, Serialize};

/// Identity and role carried by a session token.
///
/// Everything the authorization layer needs is in here, so verifying a
/// request never touches the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub email: String,
    pub role: Role,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}
