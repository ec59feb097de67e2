use crate::{BroadcastCategory, RecipientId};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stored notification consent for one recipient.
///
/// The four known categories have dedicated flags; any other category key
/// lands in `overrides`. An unset flag means "enabled".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecipientPreference {
    pub recipient_id: RecipientId,
    pub promotional_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcement: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_update: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<bool>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, bool>,
}

impl RecipientPreference {
    pub fn new(recipient_id: impl Into<RecipientId>, promotional_enabled: bool) -> Self {
        Self {
            recipient_id: recipient_id.into(),
            promotional_enabled,
            announcement: None,
            promo: None,
            feature_update: None,
            event: None,
            overrides: BTreeMap::new(),
        }
    }

    /// Builder-style setter for a category flag.
    pub fn with_category(mut self, category: BroadcastCategory, enabled: bool) -> Self {
        *self.category_slot(category) = Some(enabled);
        self
    }

    /// Build from the loose `{ "<category>": bool }` bag clients write.
    ///
    /// Known category keys fill the dedicated flags; everything else is kept
    /// as a generic override.
    pub fn from_flag_bag(
        recipient_id: impl Into<RecipientId>,
        promotional_enabled: bool,
        bag: BTreeMap<String, bool>,
    ) -> Self {
        let mut preference = Self::new(recipient_id, promotional_enabled);
        for (key, enabled) in bag {
            match key.parse::<BroadcastCategory>() {
                Ok(category) => *preference.category_slot(category) = Some(enabled),
                Err(_) => {
                    preference.overrides.insert(key, enabled);
                }
            }
        }
        preference
    }

    /// Flatten the category flags back into a single bag, for storage.
    pub fn flag_bag(&self) -> BTreeMap<String, bool> {
        let mut bag = self.overrides.clone();
        for category in BroadcastCategory::ALL {
            if let Some(enabled) = self.category_flag(category) {
                bag.insert(category.as_str().to_string(), enabled);
            }
        }
        bag
    }

    /// Whether this recipient accepts broadcasts of `category`.
    pub fn category_enabled(&self, category: BroadcastCategory) -> bool {
        self.category_flag(category)
            .or_else(|| self.overrides.get(category.as_str()).copied())
            .unwrap_or(true)
    }

    fn category_flag(&self, category: BroadcastCategory) -> Option<bool> {
        match category {
            BroadcastCategory::Announcement => self.announcement,
            BroadcastCategory::Promo => self.promo,
            BroadcastCategory::FeatureUpdate => self.feature_update,
            BroadcastCategory::Event => self.event,
        }
    }

    fn category_slot(&mut self, category: BroadcastCategory) -> &mut Option<bool> {
        match category {
            BroadcastCategory::Announcement => &mut self.announcement,
            BroadcastCategory::Promo => &mut self.promo,
            BroadcastCategory::FeatureUpdate => &mut self.feature_update,
            BroadcastCategory::Event => &mut self.event,
        }
    }
}
