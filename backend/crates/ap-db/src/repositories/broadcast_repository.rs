use crate::timestamp::{to_datetime, to_optional_datetime};
use crate::{DbError, Result as DbErrorResult};

use ap_core::{
    BroadcastCategory, BroadcastMessage, BroadcastStats, BroadcastStatus, BroadcastStore,
    StoreError, StoreResult, TargetAudienceSpec,
};

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const SELECT_COLUMNS: &str = r#"
    SELECT id, title, body, category, target_audience_json, image_url, deep_link, status,
           total_recipients, delivered, opened, clicked, created_at, scheduled_for, sent_at
    FROM broadcasts
"#;

#[derive(FromRow)]
struct BroadcastRow {
    id: String,
    title: String,
    body: String,
    category: String,
    target_audience_json: String,
    image_url: Option<String>,
    deep_link: Option<String>,
    status: String,
    total_recipients: i64,
    delivered: i64,
    opened: i64,
    clicked: i64,
    created_at: i64,
    scheduled_for: Option<i64>,
    sent_at: Option<i64>,
}

impl TryFrom<BroadcastRow> for BroadcastMessage {
    type Error = DbError;

    fn try_from(row: BroadcastRow) -> DbErrorResult<Self> {
        let target_audience: TargetAudienceSpec =
            serde_json::from_str(&row.target_audience_json)?;

        Ok(BroadcastMessage {
            id: Uuid::parse_str(&row.id).map_err(|e| {
                DbError::serialization(format!("Invalid UUID in broadcasts.id: {}", e))
            })?,
            title: row.title,
            body: row.body,
            category: BroadcastCategory::from_str(&row.category)
                .map_err(|e| DbError::serialization(e.to_string()))?,
            target_audience,
            image_url: row.image_url,
            deep_link: row.deep_link,
            status: BroadcastStatus::from_str(&row.status)
                .map_err(|e| DbError::serialization(e.to_string()))?,
            stats: BroadcastStats {
                total_recipients: count(row.total_recipients),
                delivered: count(row.delivered),
                opened: count(row.opened),
                clicked: count(row.clicked),
            },
            created_at: to_datetime(row.created_at, "broadcasts.created_at")?,
            scheduled_for: to_optional_datetime(row.scheduled_for, "broadcasts.scheduled_for")?,
            sent_at: to_optional_datetime(row.sent_at, "broadcasts.sent_at")?,
        })
    }
}

fn count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

fn column(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

pub struct BroadcastRepository {
    pool: SqlitePool,
}

impl BroadcastRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, message: &BroadcastMessage) -> DbErrorResult<()> {
        let target_audience_json = serde_json::to_string(&message.target_audience)?;

        sqlx::query(
            r#"
                INSERT INTO broadcasts (
                    id, title, body, category, target_audience_json, image_url, deep_link,
                    status, total_recipients, delivered, opened, clicked,
                    created_at, scheduled_for, sent_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(message.id.to_string())
        .bind(&message.title)
        .bind(&message.body)
        .bind(message.category.as_str())
        .bind(target_audience_json)
        .bind(&message.image_url)
        .bind(&message.deep_link)
        .bind(message.status.as_str())
        .bind(column(message.stats.total_recipients))
        .bind(column(message.stats.delivered))
        .bind(column(message.stats.opened))
        .bind(column(message.stats.clicked))
        .bind(message.created_at.timestamp())
        .bind(message.scheduled_for.map(|dt| dt.timestamp()))
        .bind(message.sent_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Persist lifecycle state. Content and audience are immutable after creation.
    pub async fn update_state(&self, message: &BroadcastMessage) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE broadcasts
                SET status = ?, total_recipients = ?, delivered = ?, opened = ?, clicked = ?,
                    sent_at = ?
                WHERE id = ?
            "#,
        )
        .bind(message.status.as_str())
        .bind(column(message.stats.total_recipients))
        .bind(column(message.stats.delivered))
        .bind(column(message.stats.opened))
        .bind(column(message.stats.clicked))
        .bind(message.sent_at.map(|dt| dt.timestamp()))
        .bind(message.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Conditional `draft|scheduled -> sending`; `true` when this call won.
    pub async fn claim(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE broadcasts
                SET status = ?
                WHERE id = ? AND status IN (?, ?)
            "#,
        )
        .bind(BroadcastStatus::Sending.as_str())
        .bind(id.to_string())
        .bind(BroadcastStatus::Draft.as_str())
        .bind(BroadcastStatus::Scheduled.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<BroadcastMessage>> {
        let row = sqlx::query_as::<_, BroadcastRow>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(BroadcastMessage::try_from).transpose()
    }

    pub async fn find_recent(&self, limit: u32) -> DbErrorResult<Vec<BroadcastMessage>> {
        let rows = sqlx::query_as::<_, BroadcastRow>(&format!(
            "{} ORDER BY created_at DESC, rowid DESC LIMIT ?",
            SELECT_COLUMNS
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(BroadcastMessage::try_from).collect()
    }

    pub async fn find_due(&self, now: DateTime<Utc>) -> DbErrorResult<Vec<BroadcastMessage>> {
        let rows = sqlx::query_as::<_, BroadcastRow>(&format!(
            "{} WHERE status = ? AND (scheduled_for IS NULL OR scheduled_for <= ?) \
             ORDER BY scheduled_for",
            SELECT_COLUMNS
        ))
        .bind(BroadcastStatus::Scheduled.as_str())
        .bind(now.timestamp())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(BroadcastMessage::try_from).collect()
    }
}

#[async_trait]
impl BroadcastStore for BroadcastRepository {
    async fn insert_broadcast(&self, message: &BroadcastMessage) -> StoreResult<()> {
        Ok(self.create(message).await?)
    }

    async fn claim_for_sending(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.claim(id).await?)
    }

    async fn update_broadcast(&self, message: &BroadcastMessage) -> StoreResult<()> {
        if !self.update_state(message).await? {
            return Err(StoreError::not_found("broadcast", message.id.to_string()));
        }
        Ok(())
    }

    async fn find_broadcast(&self, id: Uuid) -> StoreResult<Option<BroadcastMessage>> {
        Ok(self.find_by_id(id).await?)
    }

    async fn list_broadcasts(&self, limit: u32) -> StoreResult<Vec<BroadcastMessage>> {
        Ok(self.find_recent(limit).await?)
    }

    async fn due_scheduled(&self, now: DateTime<Utc>) -> StoreResult<Vec<BroadcastMessage>> {
        Ok(self.find_due(now).await?)
    }
}
