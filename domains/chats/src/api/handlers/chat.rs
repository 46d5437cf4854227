//! Chat view handler

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chatline_auth::AuthUser;
use chatline_common::Result;

use crate::api::middleware::ChatsState;
use crate::domain::render::render_messages;

use super::{find_owned_session, MessageResponse, SessionResponse};

#[derive(Debug, Deserialize)]
pub struct ChatQuery {
    /// Empty or unparseable values mean "no session selected", not an error
    #[serde(default, deserialize_with = "lenient_uuid")]
    pub chat_session_id: Option<Uuid>,
}

fn lenient_uuid<'de, D>(deserializer: D) -> std::result::Result<Option<Uuid>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| Uuid::parse_str(s.trim()).ok()))
}

/// The selected session with its messages rendered to HTML
#[derive(Debug, Serialize)]
pub struct CurrentSessionResponse {
    pub session: SessionResponse,
    pub messages: Vec<MessageResponse>,
}

/// View model for the chat page: the caller's session list plus, when a
/// session is selected, that session's full history.
#[derive(Debug, Serialize)]
pub struct ChatViewResponse {
    pub sessions: Vec<SessionResponse>,
    pub current: Option<CurrentSessionResponse>,
}

/// Get the chat view for the authenticated user
pub async fn get_chat(
    AuthUser(ctx): AuthUser,
    State(state): State<ChatsState>,
    Query(query): Query<ChatQuery>,
) -> Result<Json<ChatViewResponse>> {
    let sessions = state.repos.sessions.list_by_user(ctx.user_id).await?;

    let current = match query.chat_session_id {
        Some(id) => {
            let session = find_owned_session(&state, id, ctx.user_id).await?;
            let messages = state.repos.messages.list_by_session(session.id).await?;
            let rendered = render_messages(messages);

            Some(CurrentSessionResponse {
                session: session.into(),
                messages: rendered.into_iter().map(MessageResponse::from).collect(),
            })
        }
        None => None,
    };

    Ok(Json(ChatViewResponse {
        sessions: sessions.into_iter().map(SessionResponse::from).collect(),
        current,
    }))
}
