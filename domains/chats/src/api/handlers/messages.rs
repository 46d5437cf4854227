//! Message sending handler
//!
//! The core orchestration: persist the user's message, relay the session
//! history to the completion service, persist the reply. When the service
//! yields no usable text the user's message is removed again so a failed
//! exchange leaves no half-finished conversation behind.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use chatline_auth::AuthUser;
use chatline_common::{Error, Result, ValidatedJson};
use chatline_llm::CompletionRequest;

use crate::api::middleware::ChatsState;
use crate::domain::entities::{ChatSession, Message, MessageRole};
use crate::domain::prompts::SYSTEM_PROMPT;
use crate::domain::render::render_message;

use super::{find_owned_session, to_llm_messages, MessageResponse, SessionResponse};

#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, message = "Message content is required"))]
    pub content: String,

    /// Target session; a new session is created when absent
    pub chat_session_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub session: SessionResponse,
    pub user_message: MessageResponse,
    pub assistant_message: MessageResponse,
}

/// Send a message and relay the conversation to the completion service
pub async fn send_message(
    AuthUser(ctx): AuthUser,
    State(state): State<ChatsState>,
    ValidatedJson(req): ValidatedJson<SendMessageRequest>,
) -> Result<(StatusCode, Json<SendMessageResponse>)> {
    // Reject whitespace-only content before touching the database
    if req.content.trim().is_empty() {
        return Err(Error::Validation(
            "Message content cannot be empty or whitespace-only".to_string(),
        ));
    }

    let session = match req.chat_session_id {
        Some(id) => find_owned_session(&state, id, ctx.user_id).await?,
        None => {
            let session = ChatSession::new(ctx.user_id);
            state.repos.sessions.create(&session).await?
        }
    };

    let user_message = Message::new(session.id, MessageRole::User, req.content)?;
    let user_message = state.repos.messages.create(&user_message).await?;

    // Full session history, user message included, in conversation order
    let history = state.repos.messages.list_by_session(session.id).await?;

    let request = CompletionRequest {
        system_prompt: Some(SYSTEM_PROMPT.to_string()),
        messages: to_llm_messages(&history),
    };

    let reply = match state.llm.complete(request).await {
        Ok(response) => response.content,
        Err(e) => {
            tracing::error!(
                chat_session_id = %session.id,
                error = %e,
                "Completion failed, removing user message"
            );
            rollback_user_message(&state, user_message.id).await;
            return Err(Error::Internal(
                "No response received from the AI service".to_string(),
            ));
        }
    };

    let assistant_message = match Message::new(session.id, MessageRole::Assistant, reply) {
        Ok(message) => message,
        Err(_) => {
            rollback_user_message(&state, user_message.id).await;
            return Err(Error::Internal(
                "No response received from the AI service".to_string(),
            ));
        }
    };
    let assistant_message = state.repos.messages.create(&assistant_message).await?;

    tracing::info!(
        chat_session_id = %session.id,
        user_message_id = %user_message.id,
        assistant_message_id = %assistant_message.id,
        "Message exchange completed"
    );

    Ok((
        StatusCode::CREATED,
        Json(SendMessageResponse {
            session: session.into(),
            user_message: render_message(user_message).into(),
            assistant_message: render_message(assistant_message).into(),
        }),
    ))
}

/// Best-effort removal of the just-persisted user message. A failure here
/// only leaves an unanswered message behind, so it is logged, not returned.
async fn rollback_user_message(state: &ChatsState, message_id: Uuid) {
    if let Err(e) = state.repos.messages.delete(message_id).await {
        tracing::warn!(
            message_id = %message_id,
            error = %e,
            "Failed to remove user message after completion failure"
        );
    }
}
