//! JWT claims types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in a Chatline bearer token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (fixed, from configuration)
    pub sub: String,
    /// Unique token id
    pub jti: String,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
    /// Issuer (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Audience (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// Authenticated user id
    pub user_id: Uuid,
    /// Authenticated user email
    pub email: String,
}
