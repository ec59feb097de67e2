use crate::Result as DbErrorResult;

use ap_core::{RecipientDirectory, RecipientId, StoreResult};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Users and their authored content, as seen by audience resolution.
pub struct RecipientRepository {
    pool: SqlitePool,
}

impl RecipientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_user(&self, id: &str, role: &str) -> DbErrorResult<()> {
        let created_at = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (id, role, created_at)
                VALUES (?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET role = excluded.role
            "#,
        )
        .bind(id)
        .bind(role)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Record a piece of content. `created_at` is the content's own timestamp.
    pub async fn create_post(
        &self,
        id: &str,
        author_id: &str,
        created_at: DateTime<Utc>,
    ) -> DbErrorResult<()> {
        sqlx::query("INSERT INTO posts (id, author_id, created_at) VALUES (?, ?, ?)")
            .bind(id)
            .bind(author_id)
            .bind(created_at.timestamp())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn find_all_ids(&self) -> DbErrorResult<Vec<RecipientId>> {
        let ids = sqlx::query_scalar::<_, String>("SELECT id FROM users")
            .fetch_all(&self.pool)
            .await?;

        Ok(ids)
    }

    pub async fn find_ids_by_role(&self, role: &str) -> DbErrorResult<Vec<RecipientId>> {
        let ids = sqlx::query_scalar::<_, String>("SELECT id FROM users WHERE role = ?")
            .bind(role)
            .fetch_all(&self.pool)
            .await?;

        Ok(ids)
    }

    /// One author id per qualifying post, duplicates included.
    pub async fn find_author_ids_since(
        &self,
        since: DateTime<Utc>,
    ) -> DbErrorResult<Vec<RecipientId>> {
        let ids = sqlx::query_scalar::<_, String>(
            "SELECT author_id FROM posts WHERE created_at >= ?",
        )
        .bind(since.timestamp())
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl RecipientDirectory for RecipientRepository {
    async fn all_recipient_ids(&self) -> StoreResult<Vec<RecipientId>> {
        Ok(self.find_all_ids().await?)
    }

    async fn recipient_ids_with_role(&self, role: &str) -> StoreResult<Vec<RecipientId>> {
        Ok(self.find_ids_by_role(role).await?)
    }

    async fn content_author_ids_since(
        &self,
        since: DateTime<Utc>,
    ) -> StoreResult<Vec<RecipientId>> {
        Ok(self.find_author_ids_since(since).await?)
    }
}
