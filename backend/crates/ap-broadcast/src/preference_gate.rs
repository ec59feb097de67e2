use crate::BroadcastMetrics;

use ap_core::{
    AudienceType, BroadcastCategory, PreferenceStore, RecipientId, RecipientPreference,
    SkipReason, StoreResult,
};

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRecipient {
    pub recipient_id: RecipientId,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EligibilityResult {
    pub eligible: BTreeSet<RecipientId>,
    pub skipped: Vec<SkippedRecipient>,
}

/// Consent filter applied between audience resolution and delivery.
pub struct PreferenceGate {
    store: Arc<dyn PreferenceStore>,
    metrics: BroadcastMetrics,
}

impl PreferenceGate {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            metrics: BroadcastMetrics::new(),
        }
    }

    pub async fn filter_eligible(
        &self,
        candidates: &BTreeSet<RecipientId>,
        category: BroadcastCategory,
        audience_type: AudienceType,
    ) -> StoreResult<EligibilityResult> {
        let ids: Vec<RecipientId> = candidates.iter().cloned().collect();
        let preferences = self.store.preferences_for(&ids).await?;

        let mut result = EligibilityResult::default();
        for id in ids {
            match evaluate(preferences.get(&id), category, audience_type) {
                Ok(()) => {
                    result.eligible.insert(id);
                }
                Err(reason) => {
                    self.metrics.recipient_skipped(&reason);
                    result.skipped.push(SkippedRecipient {
                        recipient_id: id,
                        reason,
                    });
                }
            }
        }

        log::debug!(
            "Preference gate: {} eligible, {} skipped for {} broadcast",
            result.eligible.len(),
            result.skipped.len(),
            category
        );

        Ok(result)
    }
}

/// Consent decision for one recipient.
///
/// CONSENT BYPASS: for `all` audiences a missing preference record or
/// `promotional_enabled == false` does not exclude the recipient. This sends
/// promotional content to users who never opted in or who opted out, and must
/// be signed off by product before it is relied on. Category opt-outs are
/// still honoured.
pub fn evaluate(
    preference: Option<&RecipientPreference>,
    category: BroadcastCategory,
    audience_type: AudienceType,
) -> Result<(), SkipReason> {
    let bypass_consent = audience_type == AudienceType::All;

    let Some(preference) = preference else {
        return if bypass_consent {
            Ok(())
        } else {
            Err(SkipReason::NoPreferences)
        };
    };

    if !preference.promotional_enabled && !bypass_consent {
        return Err(SkipReason::PromotionalDisabled);
    }

    if !preference.category_enabled(category) {
        return Err(SkipReason::CategoryDisabled(category));
    }

    Ok(())
}
