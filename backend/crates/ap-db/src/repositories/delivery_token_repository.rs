use crate::Result as DbErrorResult;
use crate::timestamp::to_datetime;

use ap_core::{DeliveryToken, StoreResult, TokenStore};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct TokenRow {
    token: String,
    user_id: String,
    enabled: bool,
    platform: Option<String>,
    created_at: i64,
}

impl TryFrom<TokenRow> for DeliveryToken {
    type Error = crate::DbError;

    fn try_from(row: TokenRow) -> DbErrorResult<Self> {
        Ok(DeliveryToken {
            recipient_id: row.user_id,
            token: row.token,
            enabled: row.enabled,
            platform: row.platform,
            created_at: Some(to_datetime(row.created_at, "delivery_tokens.created_at")?),
        })
    }
}

pub struct DeliveryTokenRepository {
    pool: SqlitePool,
}

impl DeliveryTokenRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register or re-register a token. A token moving to another user is
    /// reassigned; `created_at` is kept from the first registration.
    pub async fn upsert(&self, token: &DeliveryToken) -> DbErrorResult<()> {
        let created_at = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO delivery_tokens (token, user_id, enabled, platform, created_at)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(token) DO UPDATE SET
                    user_id = excluded.user_id,
                    enabled = excluded.enabled,
                    platform = excluded.platform
            "#,
        )
        .bind(&token.token)
        .bind(&token.recipient_id)
        .bind(token.enabled)
        .bind(&token.platform)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_user(&self, user_id: &str) -> DbErrorResult<Vec<DeliveryToken>> {
        let rows = sqlx::query_as::<_, TokenRow>(
            r#"
                SELECT token, user_id, enabled, platform, created_at
                FROM delivery_tokens
                WHERE user_id = ?
                ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DeliveryToken::try_from).collect()
    }

    pub async fn delete(&self, token: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM delivery_tokens WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl TokenStore for DeliveryTokenRepository {
    async fn tokens_for(&self, recipient_id: &str) -> StoreResult<Vec<DeliveryToken>> {
        Ok(self.find_by_user(recipient_id).await?)
    }

    async fn save_token(&self, token: &DeliveryToken) -> StoreResult<()> {
        Ok(self.upsert(token).await?)
    }

    async fn delete_token(&self, token: &str) -> StoreResult<bool> {
        Ok(self.delete(token).await?)
    }
}
