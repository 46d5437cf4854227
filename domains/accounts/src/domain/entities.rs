//! Domain entities for the Accounts domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chatline_common::{Error, Result};
use validator::ValidateEmail;

/// Maximum username length (varchar(50))
const MAX_USERNAME_LENGTH: usize = 50;

/// Maximum email length (varchar(100))
const MAX_EMAIL_LENGTH: usize = 100;

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// PHC-format argon2 hash, never the plaintext password
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with validation. Expects an already-hashed password.
    pub fn new(username: String, email: String, password_hash: String) -> Result<Self> {
        if username.trim().is_empty() {
            return Err(Error::Validation("Username is required".to_string()));
        }
        if username.len() > MAX_USERNAME_LENGTH {
            return Err(Error::Validation(format!(
                "Username must be at most {} characters",
                MAX_USERNAME_LENGTH
            )));
        }

        if !email.validate_email() {
            return Err(Error::Validation("Invalid email format".to_string()));
        }
        if email.len() > MAX_EMAIL_LENGTH {
            return Err(Error::Validation(format!(
                "Email must be at most {} characters",
                MAX_EMAIL_LENGTH
            )));
        }

        if password_hash.is_empty() {
            return Err(Error::Validation("Password hash is required".to_string()));
        }

        Ok(User {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        })
    }
}
