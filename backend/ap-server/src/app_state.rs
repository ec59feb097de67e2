use crate::{Result as ServerErrorResult, SettingsService};

use ap_broadcast::{
    AudienceResolver, BroadcastDispatcher, BroadcastService, DeliveryTokenRegistry, DispatchConfig,
    HttpPushGateway, NotificationRecordWriter, PreferenceGate,
};
use ap_config::Config;
use ap_core::PushGateway;
use ap_db::{
    BroadcastRepository, DeliveryTokenRepository, NotificationRepository, PreferenceRepository,
    RecipientRepository, SettingsRepository,
};
use ap_remote_config::ConfigSyncEngine;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub broadcasts: Arc<BroadcastService>,
    pub settings: Arc<SettingsService>,
    pub prometheus: PrometheusHandle,
}

impl AppState {
    /// Wire the services over `pool` with explicit outbound clients.
    pub fn new(
        pool: SqlitePool,
        config: &Config,
        gateway: Arc<dyn PushGateway>,
        sync: Option<ConfigSyncEngine>,
        prometheus: PrometheusHandle,
    ) -> Self {
        let resolver = AudienceResolver::new(
            Arc::new(RecipientRepository::new(pool.clone())),
            config.broadcast.activity_lookback_days,
        );
        let gate = PreferenceGate::new(Arc::new(PreferenceRepository::new(pool.clone())));
        let writer = NotificationRecordWriter::new(
            Arc::new(NotificationRepository::new(pool.clone())),
            config.broadcast.record_batch_size,
        );
        let dispatcher = BroadcastDispatcher::new(
            DeliveryTokenRegistry::new(Arc::new(DeliveryTokenRepository::new(pool.clone()))),
            gateway,
            DispatchConfig::from(&config.broadcast),
        );

        let broadcasts = BroadcastService::new(
            Arc::new(BroadcastRepository::new(pool.clone())),
            resolver,
            gate,
            writer,
            dispatcher,
        );
        let settings = SettingsService::new(
            Arc::new(SettingsRepository::new(pool.clone())),
            sync.map(Arc::new),
        );

        Self {
            pool,
            broadcasts: Arc::new(broadcasts),
            settings: Arc::new(settings),
            prometheus,
        }
    }

    /// State backed by the HTTP push gateway and, when enabled, remote config.
    pub fn from_config(
        pool: SqlitePool,
        config: &Config,
        prometheus: PrometheusHandle,
    ) -> ServerErrorResult<Self> {
        let gateway = HttpPushGateway::from_config(&config.push)?;
        if config.push.project_id.is_none() {
            log::warn!("push.project_id is not set; push deliveries will be counted as failed");
        }

        let sync = ConfigSyncEngine::from_config(&config.remote_config)?;
        if sync.is_none() {
            log::info!("Remote config sync disabled");
        }

        Ok(Self::new(pool, config, Arc::new(gateway), sync, prometheus))
    }
}
