//! Chat session repository

use sqlx::PgPool;
use uuid::Uuid;

use chatline_common::Result;

use crate::domain::entities::ChatSession;

#[derive(Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find session by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<ChatSession>> {
        let session = sqlx::query_as::<_, ChatSession>(
            r#"
            SELECT id, user_id, title, created_at
            FROM chat_sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }

    /// List a user's sessions, newest first
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<ChatSession>> {
        let sessions = sqlx::query_as::<_, ChatSession>(
            r#"
            SELECT id, user_id, title, created_at
            FROM chat_sessions
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sessions)
    }

    /// Create a new session
    pub async fn create(&self, session: &ChatSession) -> Result<ChatSession> {
        let created = sqlx::query_as::<_, ChatSession>(
            r#"
            INSERT INTO chat_sessions (id, user_id, title, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, title, created_at
            "#,
        )
        .bind(session.id)
        .bind(session.user_id)
        .bind(&session.title)
        .bind(session.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Update a session's title
    pub async fn update_title(&self, id: Uuid, title: &str) -> Result<Option<ChatSession>> {
        let updated = sqlx::query_as::<_, ChatSession>(
            r#"
            UPDATE chat_sessions SET title = $2
            WHERE id = $1
            RETURNING id, user_id, title, created_at
            "#,
        )
        .bind(id)
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete a session and, via cascade, its messages
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM chat_sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
