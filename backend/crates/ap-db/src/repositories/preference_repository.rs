use crate::Result as DbErrorResult;

use ap_core::{PreferenceStore, RecipientId, RecipientPreference, StoreResult};

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

/// Keeps each `IN (...)` list well under SQLite's bound-parameter limit.
const LOOKUP_CHUNK: usize = 500;

#[derive(FromRow)]
struct PreferenceRow {
    user_id: String,
    promotional_enabled: bool,
    overrides_json: String,
}

impl PreferenceRow {
    fn into_preference(self) -> DbErrorResult<RecipientPreference> {
        let bag: BTreeMap<String, bool> = serde_json::from_str(&self.overrides_json)?;
        Ok(RecipientPreference::from_flag_bag(
            self.user_id,
            self.promotional_enabled,
            bag,
        ))
    }
}

pub struct PreferenceRepository {
    pool: SqlitePool,
}

impl PreferenceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn upsert(&self, preference: &RecipientPreference) -> DbErrorResult<()> {
        let overrides_json = serde_json::to_string(&preference.flag_bag())?;
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO notification_preferences
                    (user_id, promotional_enabled, overrides_json, updated_at)
                VALUES (?, ?, ?, ?)
                ON CONFLICT(user_id) DO UPDATE SET
                    promotional_enabled = excluded.promotional_enabled,
                    overrides_json = excluded.overrides_json,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(&preference.recipient_id)
        .bind(preference.promotional_enabled)
        .bind(overrides_json)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_user_ids(
        &self,
        user_ids: &[RecipientId],
    ) -> DbErrorResult<HashMap<RecipientId, RecipientPreference>> {
        let mut found = HashMap::with_capacity(user_ids.len());

        for chunk in user_ids.chunks(LOOKUP_CHUNK) {
            let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
                "SELECT user_id, promotional_enabled, overrides_json \
                 FROM notification_preferences WHERE user_id IN (",
            );
            let mut ids = query.separated(", ");
            for id in chunk {
                ids.push_bind(id.as_str());
            }
            ids.push_unseparated(")");

            let rows = query
                .build_query_as::<PreferenceRow>()
                .fetch_all(&self.pool)
                .await?;

            for row in rows {
                let preference = row.into_preference()?;
                found.insert(preference.recipient_id.clone(), preference);
            }
        }

        Ok(found)
    }
}

#[async_trait]
impl PreferenceStore for PreferenceRepository {
    async fn preferences_for(
        &self,
        recipient_ids: &[RecipientId],
    ) -> StoreResult<HashMap<RecipientId, RecipientPreference>> {
        Ok(self.find_by_user_ids(recipient_ids).await?)
    }

    async fn save_preference(&self, preference: &RecipientPreference) -> StoreResult<()> {
        Ok(self.upsert(preference).await?)
    }
}
