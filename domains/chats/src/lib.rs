//! Chats domain: chat sessions, messages, LLM orchestration

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{ChatSession, Message, MessageRole};

// Re-export repository types
pub use repository::{ChatsRepositories, MessageRepository, SessionRepository};

// Re-export API types
pub use api::routes;
pub use api::ChatsState;
