//! Domain entities for the Chats domain
//!
//! Chat sessions group messages per user. Each entity enforces its own
//! validation rules so invalid rows never reach the database.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chatline_common::{Error, Result};

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "message_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// Maximum title length in characters (varchar(50))
pub const MAX_TITLE_LENGTH: usize = 50;

/// Chat session entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ChatSession {
    /// Create a new, untitled session for a user
    pub fn new(user_id: Uuid) -> Self {
        ChatSession {
            id: Uuid::new_v4(),
            user_id,
            title: None,
            created_at: Utc::now(),
        }
    }

    /// Normalize a model-generated title: trim surrounding whitespace and
    /// truncate to the storage limit on a character boundary.
    pub fn clamp_title(raw: &str) -> String {
        raw.trim().chars().take(MAX_TITLE_LENGTH).collect()
    }
}

/// Message entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: Uuid,
    pub chat_session_id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message
    pub fn new(chat_session_id: Uuid, role: MessageRole, content: String) -> Result<Self> {
        // CHECK (length(trim(content)) > 0)
        if content.trim().is_empty() {
            return Err(Error::Validation(
                "Message content cannot be empty or whitespace-only".to_string(),
            ));
        }

        Ok(Message {
            id: Uuid::new_v4(),
            chat_session_id,
            role,
            content,
            created_at: Utc::now(),
        })
    }
}
