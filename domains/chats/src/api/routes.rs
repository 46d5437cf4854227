//! Route definitions for the Chats domain API

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{chat, messages, sessions};
use super::middleware::ChatsState;

/// Create all Chats domain API routes
pub fn routes() -> Router<ChatsState> {
    Router::new()
        .route("/v1/chat", get(chat::get_chat))
        .route("/v1/chat/messages", post(messages::send_message))
        .route("/v1/chat/sessions/{id}/title", post(sessions::generate_title))
        .route("/v1/chat/sessions/{id}", delete(sessions::delete_session))
}
