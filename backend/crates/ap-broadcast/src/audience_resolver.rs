use crate::BroadcastMetrics;

use ap_core::{Audience, RecipientDirectory, RecipientId, StoreResult};

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

/// Turns a validated [`Audience`] into a de-duplicated set of recipient ids.
pub struct AudienceResolver {
    directory: Arc<dyn RecipientDirectory>,
    default_lookback_days: u32,
    metrics: BroadcastMetrics,
}

impl AudienceResolver {
    pub fn new(directory: Arc<dyn RecipientDirectory>, default_lookback_days: u32) -> Self {
        Self {
            directory,
            default_lookback_days,
            metrics: BroadcastMetrics::new(),
        }
    }

    pub async fn resolve(&self, audience: &Audience) -> StoreResult<BTreeSet<RecipientId>> {
        self.resolve_at(audience, Utc::now()).await
    }

    /// Resolve relative to `now`, which anchors the activity lookback window.
    ///
    /// `custom` audiences are returned as given: ids are not checked against
    /// the directory.
    pub async fn resolve_at(
        &self,
        audience: &Audience,
        now: DateTime<Utc>,
    ) -> StoreResult<BTreeSet<RecipientId>> {
        let ids: BTreeSet<RecipientId> = match audience {
            Audience::All => self.directory.all_recipient_ids().await?.into_iter().collect(),
            Audience::Role(role) => self
                .directory
                .recipient_ids_with_role(role)
                .await?
                .into_iter()
                .collect(),
            Audience::Activity { days } => {
                let days = days.unwrap_or(self.default_lookback_days);
                let since = now - Duration::days(i64::from(days));
                self.directory
                    .content_author_ids_since(since)
                    .await?
                    .into_iter()
                    .collect()
            }
            Audience::Custom(ids) => ids.iter().cloned().collect(),
        };

        log::debug!(
            "Resolved {} audience to {} recipients",
            audience.audience_type(),
            ids.len()
        );
        self.metrics
            .audience_resolved(audience.audience_type(), ids.len());

        Ok(ids)
    }
}
