//! Repository layer for the Chats domain

pub mod messages;
pub mod sessions;

pub use messages::MessageRepository;
pub use sessions::SessionRepository;

use sqlx::PgPool;

/// Container for all Chats domain repositories
#[derive(Clone)]
pub struct ChatsRepositories {
    pub sessions: SessionRepository,
    pub messages: MessageRepository,
}

impl ChatsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            sessions: SessionRepository::new(pool.clone()),
            messages: MessageRepository::new(pool),
        }
    }
}
