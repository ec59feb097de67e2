use crate::{BroadcastCategory, RecipientPreference};

use std::collections::BTreeMap;

#[test]
fn test_unset_category_defaults_to_enabled() {
    let pref = RecipientPreference::new("u1", true);
    for category in BroadcastCategory::ALL {
        assert!(pref.category_enabled(category));
    }
}

#[test]
fn test_explicit_category_flag_wins() {
    let pref = RecipientPreference::new("u1", true).with_category(BroadcastCategory::Promo, false);
    assert!(!pref.category_enabled(BroadcastCategory::Promo));
    assert!(pref.category_enabled(BroadcastCategory::Event));
}

#[test]
fn test_flag_bag_splits_known_and_unknown_keys() {
    let mut bag = BTreeMap::new();
    bag.insert("event".to_string(), false);
    bag.insert("weekly_digest".to_string(), true);

    let pref = RecipientPreference::from_flag_bag("u1", false, bag.clone());
    assert_eq!(pref.event, Some(false));
    assert_eq!(pref.overrides.get("weekly_digest"), Some(&true));
    assert!(!pref.category_enabled(BroadcastCategory::Event));

    assert_eq!(pref.flag_bag(), bag);
}
