//! Session title and deletion handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use chatline_auth::AuthUser;
use chatline_common::{Error, Result};
use chatline_llm::{CompletionRequest, LlmMessage, LlmRole};

use crate::api::middleware::ChatsState;
use crate::domain::entities::ChatSession;
use crate::domain::prompts::TITLE_PROMPT;

use super::{find_owned_session, to_llm_messages, SessionResponse};

/// Generate and store a title for a session from its conversation so far
pub async fn generate_title(
    AuthUser(ctx): AuthUser,
    State(state): State<ChatsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    let session = find_owned_session(&state, id, ctx.user_id).await?;
    let history = state.repos.messages.list_by_session(session.id).await?;

    // The titling instruction rides along as a final user turn
    let mut messages = to_llm_messages(&history);
    messages.push(LlmMessage {
        role: LlmRole::User,
        content: TITLE_PROMPT.to_string(),
    });

    let response = state
        .llm
        .complete(CompletionRequest {
            system_prompt: None,
            messages,
        })
        .await
        .map_err(|e| {
            tracing::error!(chat_session_id = %session.id, error = %e, "Title generation failed");
            Error::Internal("No response received from the AI service".to_string())
        })?;

    let title = ChatSession::clamp_title(&response.content);
    if title.is_empty() {
        return Err(Error::Internal(
            "No response received from the AI service".to_string(),
        ));
    }

    let updated = state
        .repos
        .sessions
        .update_title(session.id, &title)
        .await?
        .ok_or_else(|| Error::NotFound("Chat session not found".to_string()))?;

    tracing::info!(chat_session_id = %updated.id, "Session title generated");

    Ok(Json(updated.into()))
}

/// Delete a session and all of its messages
pub async fn delete_session(
    AuthUser(ctx): AuthUser,
    State(state): State<ChatsState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let session = find_owned_session(&state, id, ctx.user_id).await?;
    state.repos.sessions.delete(session.id).await?;

    tracing::info!(chat_session_id = %session.id, "Session deleted");

    Ok(StatusCode::NO_CONTENT)
}
