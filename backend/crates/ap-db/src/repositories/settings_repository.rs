use crate::Result as DbErrorResult;
use crate::timestamp::to_datetime;

use ap_core::{AppSettings, SettingsStore, StoreResult};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, SqlitePool};

/// Key of the single platform settings document.
const PRIMARY_SETTINGS_ID: &str = "primary";

#[derive(FromRow)]
struct SettingsRow {
    settings_json: String,
    updated_at: i64,
}

pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_primary(&self) -> DbErrorResult<Option<AppSettings>> {
        let row = sqlx::query_as::<_, SettingsRow>(
            "SELECT settings_json, updated_at FROM app_settings WHERE id = ?",
        )
        .bind(PRIMARY_SETTINGS_ID)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| -> DbErrorResult<AppSettings> {
            let mut settings: AppSettings = serde_json::from_str(&r.settings_json)?;
            settings.updated_at = Some(to_datetime(r.updated_at, "app_settings.updated_at")?);
            Ok(settings)
        })
        .transpose()
    }

    /// Replace the settings document, stamping `updated_at`.
    pub async fn save_primary(&self, settings: &AppSettings) -> DbErrorResult<AppSettings> {
        let now = Utc::now();
        let mut saved = settings.clone();
        saved.updated_at = None;
        let settings_json = serde_json::to_string(&saved)?;

        sqlx::query(
            r#"
                INSERT INTO app_settings (id, settings_json, updated_at)
                VALUES (?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    settings_json = excluded.settings_json,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(PRIMARY_SETTINGS_ID)
        .bind(settings_json)
        .bind(now.timestamp())
        .execute(&self.pool)
        .await?;

        saved.updated_at = Some(to_datetime(now.timestamp(), "app_settings.updated_at")?);
        Ok(saved)
    }
}

#[async_trait]
impl SettingsStore for SettingsRepository {
    async fn load_settings(&self) -> StoreResult<Option<AppSettings>> {
        Ok(self.find_primary().await?)
    }

    async fn save_settings(&self, settings: &AppSettings) -> StoreResult<AppSettings> {
        Ok(self.save_primary(settings).await?)
    }
}
