//! Primary settings document plus best-effort publication to remote config.

use ap_core::{AppSettings, SettingsStore, SettingsUpdate, StoreResult};
use ap_remote_config::{ConfigSyncEngine, ConfigUpdate};

use std::sync::Arc;

use tokio::sync::Mutex;

pub const SYNC_FAILED_WARNING: &str = "Settings saved but remote config sync failed";

#[derive(Debug, Clone)]
pub struct SettingsOutcome {
    pub settings: AppSettings,
    /// Set when the save succeeded but publishing to remote config did not.
    pub remote_config_error: Option<String>,
}

pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
    sync: Option<Arc<ConfigSyncEngine>>,
    /// Serializes read-merge-write so concurrent updates cannot drop keys.
    write_lock: Mutex<()>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn SettingsStore>, sync: Option<Arc<ConfigSyncEngine>>) -> Self {
        Self {
            store,
            sync,
            write_lock: Mutex::new(()),
        }
    }

    pub fn sync_enabled(&self) -> bool {
        self.sync.is_some()
    }

    pub async fn get(&self) -> StoreResult<AppSettings> {
        Ok(self.store.load_settings().await?.unwrap_or_default())
    }

    /// Merge `update` into the stored document and save it. Sections that
    /// are published remotely are then synced; a sync failure is reported
    /// alongside the saved settings, never instead of them.
    ///
    /// Updates are serialized within this process; the document is a single
    /// row with no version column, so separate server processes sharing one
    /// database can still overwrite each other.
    pub async fn update(&self, update: &SettingsUpdate) -> StoreResult<SettingsOutcome> {
        let settings = {
            let _guard = self.write_lock.lock().await;
            let mut settings = self.get().await?;
            settings.apply(update);
            self.store.save_settings(&settings).await?
        };
        log::info!("Settings saved");

        let mut remote_config_error = None;
        if let Some(sync) = &self.sync
            && update.touches_remote_config()
        {
            match sync.sync(&ConfigUpdate::from(update)).await {
                Ok(outcome) => log::debug!(
                    "Settings published to remote config in {} attempt(s)",
                    outcome.attempts
                ),
                Err(e) => {
                    log::error!("Remote config sync failed: {}", e);
                    remote_config_error = Some(e.to_string());
                }
            }
        }

        Ok(SettingsOutcome {
            settings,
            remote_config_error,
        })
    }
}
