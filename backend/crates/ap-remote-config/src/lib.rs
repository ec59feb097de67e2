//! Best-effort propagation of admin settings into the shared remote
//! configuration template, guarded by optimistic concurrency.

pub mod error;
pub mod flag_aliases;
pub mod http_remote_config_service;
pub mod metrics;
pub mod retry_policy;
pub mod sync_engine;
pub mod template_merge;

#[cfg(test)]
mod tests;

pub use error::{Result as SyncResult, SyncError};
pub use flag_aliases::{FLAG_ALIASES, FlagAlias};
pub use http_remote_config_service::HttpRemoteConfigService;
pub use metrics::RemoteConfigMetrics;
pub use retry_policy::{RetryPolicy, SyncRetryPolicy};
pub use sync_engine::{ConfigSyncEngine, SyncOutcome, SyncPhase};
pub use template_merge::{ConfigUpdate, apply_update};
