//! Request handlers for the Chats domain

pub mod chat;
pub mod messages;
pub mod sessions;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use chatline_common::{Error, Result};
use chatline_llm::{LlmMessage, LlmRole};

use crate::api::middleware::ChatsState;
use crate::domain::entities::{ChatSession, Message, MessageRole};

/// Chat session DTO
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ChatSession> for SessionResponse {
    fn from(s: ChatSession) -> Self {
        Self {
            id: s.id,
            title: s.title,
            created_at: s.created_at,
        }
    }
}

/// Message DTO; content carries whatever representation the handler chose
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub chat_session_id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            chat_session_id: m.chat_session_id,
            role: m.role,
            content: m.content,
            created_at: m.created_at,
        }
    }
}

/// Load a session and verify the caller owns it.
///
/// Sessions belonging to other users are reported as not found so their
/// existence is never revealed.
async fn find_owned_session(state: &ChatsState, id: Uuid, user_id: Uuid) -> Result<ChatSession> {
    match state.repos.sessions.find(id).await? {
        Some(session) if session.user_id == user_id => Ok(session),
        _ => Err(Error::NotFound("Chat session not found".to_string())),
    }
}

/// Map stored messages to completion request turns, preserving order
fn to_llm_messages(messages: &[Message]) -> Vec<LlmMessage> {
    messages
        .iter()
        .map(|m| LlmMessage {
            role: match m.role {
                MessageRole::User => LlmRole::User,
                MessageRole::Assistant => LlmRole::Assistant,
            },
            content: m.content.clone(),
        })
        .collect()
}
