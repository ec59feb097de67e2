use crate::timestamp::to_optional_datetime;
use crate::{DbError, Result as DbErrorResult};

use ap_core::store::notification_record_store::MAX_WRITE_BATCH;
use ap_core::{
    BroadcastCategory, ErrorLocation, NotificationRecord, NotificationRecordStore, StoreResult,
};

use std::panic::Location;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct NotificationRow {
    id: String,
    broadcast_id: String,
    user_id: String,
    category: String,
    message: String,
    is_read: bool,
    actors_json: String,
    deep_link: Option<String>,
    image_url: Option<String>,
    created_at: i64,
}

impl TryFrom<NotificationRow> for NotificationRecord {
    type Error = DbError;

    fn try_from(row: NotificationRow) -> DbErrorResult<Self> {
        Ok(NotificationRecord {
            id: row.id,
            broadcast_id: Uuid::parse_str(&row.broadcast_id).map_err(|e| {
                DbError::serialization(format!("Invalid UUID in notifications.broadcast_id: {}", e))
            })?,
            recipient_id: row.user_id,
            category: BroadcastCategory::from_str(&row.category)
                .map_err(|e| DbError::serialization(e.to_string()))?,
            message: row.message,
            is_read: row.is_read,
            actors: serde_json::from_str(&row.actors_json)?,
            deep_link: row.deep_link,
            image_url: row.image_url,
            created_at: to_optional_datetime(Some(row.created_at), "notifications.created_at")?,
        })
    }
}

pub struct NotificationRepository {
    pool: SqlitePool,
}

impl NotificationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Write every record in one transaction. Existing ids are overwritten,
    /// keeping their original `created_at`.
    pub async fn upsert_batch(&self, records: &[NotificationRecord]) -> DbErrorResult<()> {
        if records.len() > MAX_WRITE_BATCH {
            return Err(DbError::BatchTooLarge {
                size: records.len(),
                limit: MAX_WRITE_BATCH,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let now = Utc::now().timestamp();
        let mut tx = self.pool.begin().await?;

        for record in records {
            let actors_json = serde_json::to_string(&record.actors)?;

            sqlx::query(
                r#"
                    INSERT INTO notifications (
                        id, broadcast_id, user_id, category, message, is_read,
                        actors_json, deep_link, image_url, created_at, updated_at
                    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                    ON CONFLICT(id) DO UPDATE SET
                        category = excluded.category,
                        message = excluded.message,
                        is_read = excluded.is_read,
                        actors_json = excluded.actors_json,
                        deep_link = excluded.deep_link,
                        image_url = excluded.image_url,
                        updated_at = excluded.updated_at
                "#,
            )
            .bind(&record.id)
            .bind(record.broadcast_id.to_string())
            .bind(&record.recipient_id)
            .bind(record.category.as_str())
            .bind(&record.message)
            .bind(record.is_read)
            .bind(actors_json)
            .bind(&record.deep_link)
            .bind(&record.image_url)
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn find_by_broadcast(
        &self,
        broadcast_id: Uuid,
    ) -> DbErrorResult<Vec<NotificationRecord>> {
        let rows = sqlx::query_as::<_, NotificationRow>(
            r#"
                SELECT id, broadcast_id, user_id, category, message, is_read,
                       actors_json, deep_link, image_url, created_at
                FROM notifications
                WHERE broadcast_id = ?
                ORDER BY user_id
            "#,
        )
        .bind(broadcast_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(NotificationRecord::try_from).collect()
    }
}

#[async_trait]
impl NotificationRecordStore for NotificationRepository {
    async fn commit_batch(&self, records: &[NotificationRecord]) -> StoreResult<()> {
        Ok(self.upsert_batch(records).await?)
    }

    async fn records_for_broadcast(
        &self,
        broadcast_id: Uuid,
    ) -> StoreResult<Vec<NotificationRecord>> {
        Ok(self.find_by_broadcast(broadcast_id).await?)
    }
}
