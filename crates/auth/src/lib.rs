//! Authentication for the Chatline API
//!
//! Provides JWT issuance and validation, password hashing, and an axum
//! extractor that works with any state implementing `FromRef<S>` for
//! `AuthConfig`.

mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;
mod password;

pub use claims::Claims;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::AuthUser;
pub use jwt::{issue_token, validate_token, TOKEN_TTL_SECS};
pub use password::{hash_password, verify_password};
