//! Message repository

use sqlx::PgPool;
use uuid::Uuid;

use chatline_common::Result;

use crate::domain::entities::Message;

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a session's messages in conversation order
    pub async fn list_by_session(&self, chat_session_id: Uuid) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, chat_session_id, role, content, created_at
            FROM messages
            WHERE chat_session_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(chat_session_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// Create a new message
    pub async fn create(&self, message: &Message) -> Result<Message> {
        let created = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (id, chat_session_id, role, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, chat_session_id, role, content, created_at
            "#,
        )
        .bind(message.id)
        .bind(message.chat_session_id)
        .bind(message.role)
        .bind(&message.content)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Delete a message
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
