//! Authenticated identity passed explicitly through service calls

use uuid::Uuid;

/// The authenticated caller, extracted from a validated bearer token.
///
/// Handlers receive this as an explicit parameter rather than reading an
/// ambient request context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
}

impl AuthContext {
    pub fn new(user_id: Uuid, email: String) -> Self {
        Self { user_id, email }
    }
}
