use crate::{
    ConfigUpdate, HttpRemoteConfigService, RemoteConfigMetrics, SyncError, SyncResult,
    SyncRetryPolicy, apply_update,
};

use ap_config::RemoteSyncConfig;
use ap_core::{ConfigTemplate, RemoteConfigError, RemoteConfigService, RemoteErrorKind};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

/// Remote call of a sync attempt that failed. Merging is local and cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Fetch,
    Validate,
    Publish,
}

impl fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fetch => "fetch",
            Self::Validate => "validate",
            Self::Publish => "publish",
        })
    }
}

#[derive(Debug, Clone)]
pub struct SyncOutcome {
    /// Attempts made, including the successful one.
    pub attempts: u32,
    /// The template as published, carrying its new version marker.
    pub template: ConfigTemplate,
}

/// Fetch, merge, validate and publish a settings update into the remote
/// template, re-fetching on version conflicts.
pub struct ConfigSyncEngine {
    service: Arc<dyn RemoteConfigService>,
    policy: SyncRetryPolicy,
    metrics: RemoteConfigMetrics,
}

impl ConfigSyncEngine {
    pub fn new(service: Arc<dyn RemoteConfigService>, policy: SyncRetryPolicy) -> Self {
        Self {
            service,
            policy,
            metrics: RemoteConfigMetrics::new(),
        }
    }

    /// Engine backed by the HTTP client, or `None` when sync is disabled.
    pub fn from_config(config: &RemoteSyncConfig) -> Result<Option<Self>, RemoteConfigError> {
        let project_id = match config.project_id.as_deref() {
            Some(project_id) if config.enabled => project_id,
            _ => return Ok(None),
        };

        let service = HttpRemoteConfigService::new(
            &config.base_url,
            project_id,
            config.access_token.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;

        Ok(Some(Self::new(
            Arc::new(service),
            SyncRetryPolicy::from(config),
        )))
    }

    /// Run the sync until it publishes or a failure is final.
    ///
    /// Invalid templates and rejected credentials fail on the first attempt.
    /// Conflicts and server errors are retried within their budgets, each
    /// retry starting again from a fresh fetch. However the two interleave, a
    /// sync never makes more than [`SyncRetryPolicy::total_attempts`] attempts.
    pub async fn sync(&self, update: &ConfigUpdate) -> SyncResult<SyncOutcome> {
        let mut attempts = 0;
        let mut conflicts = 0;
        let mut server_failures = 0;

        loop {
            attempts += 1;
            self.metrics.attempt();

            let (phase, error) = match self.attempt(update).await {
                Ok(template) => {
                    self.metrics.outcome("success");
                    if attempts > 1 {
                        log::info!("Remote config published after {} attempts", attempts);
                    } else {
                        log::info!("Remote config published");
                    }
                    return Ok(SyncOutcome { attempts, template });
                }
                Err(failure) => failure,
            };

            let exhausted = attempts >= self.policy.total_attempts();
            let delay = match error.kind() {
                RemoteErrorKind::Conflict => {
                    conflicts += 1;
                    self.metrics.conflict();
                    if exhausted || !self.policy.conflict.allows_retry(conflicts) {
                        return Err(self.fail(
                            "conflict",
                            phase,
                            SyncError::conflict(attempts, error),
                        ));
                    }
                    self.policy.conflict.delay_for_attempt(conflicts)
                }
                RemoteErrorKind::Unavailable => {
                    server_failures += 1;
                    self.metrics.server_error();
                    if exhausted || !self.policy.transient.allows_retry(server_failures) {
                        return Err(self.fail(
                            "server",
                            phase,
                            SyncError::server(attempts, error),
                        ));
                    }
                    self.policy.transient.delay_for_attempt(server_failures)
                }
                RemoteErrorKind::InvalidTemplate => {
                    return Err(self.fail("validation", phase, SyncError::validation(error)));
                }
                RemoteErrorKind::Unauthorized => {
                    return Err(self.fail("auth", phase, SyncError::auth(error)));
                }
                RemoteErrorKind::Other => {
                    return Err(self.fail("remote", phase, SyncError::remote(error)));
                }
            };

            log::warn!(
                "Remote config {} failed on attempt {}: {}. Retrying in {:?}",
                phase,
                attempts,
                error,
                delay
            );
            sleep(delay).await;
        }
    }

    async fn attempt(
        &self,
        update: &ConfigUpdate,
    ) -> Result<ConfigTemplate, (SyncPhase, RemoteConfigError)> {
        let mut template = self
            .service
            .get_template()
            .await
            .map_err(|e| (SyncPhase::Fetch, e))?;
        log::debug!(
            "Fetched remote config template ({} parameters)",
            template.parameters.len()
        );

        apply_update(&mut template, update);

        self.service
            .validate_template(&template)
            .await
            .map_err(|e| (SyncPhase::Validate, e))?;

        self.service
            .publish_template(&template)
            .await
            .map_err(|e| (SyncPhase::Publish, e))
    }

    fn fail(&self, outcome: &str, phase: SyncPhase, error: SyncError) -> SyncError {
        self.metrics.outcome(outcome);
        log::error!("Remote config sync failed during {}: {}", phase, error);
        error
    }
}
