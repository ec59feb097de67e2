use crate::{RetryPolicy, SyncRetryPolicy};

use ap_config::RemoteSyncConfig;

use std::time::Duration;

use googletest::prelude::*;

#[test]
fn given_policy_when_delay_computed_then_linear_in_attempt() {
    let policy = RetryPolicy::new(3, Duration::from_secs(1));

    assert_eq!(policy.delay_for_attempt(1), Duration::from_secs(1));
    assert_eq!(policy.delay_for_attempt(2), Duration::from_secs(2));
    assert_eq!(policy.delay_for_attempt(3), Duration::from_secs(3));
}

#[test]
fn given_max_attempts_when_checking_retry_then_budget_respected() {
    let policy = RetryPolicy::new(2, Duration::from_secs(2));

    assert!(policy.allows_retry(1));
    assert!(!policy.allows_retry(2));
}

#[test]
fn given_default_policy_then_matches_documented_budgets() {
    let policy = SyncRetryPolicy::default();

    assert_that!(policy.conflict.max_attempts, eq(3));
    assert_eq!(policy.conflict.step, Duration::from_millis(1000));
    assert_that!(policy.transient.max_attempts, eq(2));
    assert_eq!(policy.transient.step, Duration::from_millis(2000));
}

#[test]
fn given_sync_config_when_converted_then_knobs_carried_over() {
    let config = RemoteSyncConfig {
        conflict_max_attempts: 5,
        conflict_backoff_ms: 250,
        server_max_attempts: 4,
        server_backoff_ms: 500,
        ..RemoteSyncConfig::default()
    };

    let policy = SyncRetryPolicy::from(&config);

    assert_eq!(policy.conflict, RetryPolicy::new(5, Duration::from_millis(250)));
    assert_eq!(policy.transient, RetryPolicy::new(4, Duration::from_millis(500)));
}

#[test]
fn given_default_sync_config_when_converted_then_equals_default_policy() {
    let policy = SyncRetryPolicy::from(&RemoteSyncConfig::default());

    assert_eq!(policy, SyncRetryPolicy::default());
}
